//! Display controls a capture binding can drive.

/// Paragraph alignment of rendered text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// The operations a capture binding needs from the control it renders into.
///
/// Hosts implement this for their own text widget to retrofit capture
/// behaviour onto it with [`KeyCapture::attach`](crate::KeyCapture::attach).
pub trait DisplayControl {
    /// Replace the displayed text and set its alignment.
    ///
    /// Must be idempotent: rendering the same text twice leaves the same
    /// visible state.
    fn render(&mut self, text: &str, alignment: Alignment);

    /// Text currently displayed.
    fn text(&self) -> String;

    fn set_alignment(&mut self, alignment: Alignment);

    /// Show or hide the text cursor.
    fn set_cursor_visible(&mut self, visible: bool);

    /// Give up keyboard focus. Controls without a focus concept ignore it.
    fn release_focus(&mut self) {}
}

impl<C: DisplayControl + ?Sized> DisplayControl for &mut C {
    fn render(&mut self, text: &str, alignment: Alignment) {
        (**self).render(text, alignment);
    }

    fn text(&self) -> String {
        (**self).text()
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        (**self).set_alignment(alignment);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        (**self).set_cursor_visible(visible);
    }

    fn release_focus(&mut self) {
        (**self).release_focus();
    }
}

impl<C: DisplayControl + ?Sized> DisplayControl for Box<C> {
    fn render(&mut self, text: &str, alignment: Alignment) {
        (**self).render(text, alignment);
    }

    fn text(&self) -> String {
        (**self).text()
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        (**self).set_alignment(alignment);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        (**self).set_cursor_visible(visible);
    }

    fn release_focus(&mut self) {
        (**self).release_focus();
    }
}

/// A plain in-memory text control.
///
/// Used as the built-in control of a natively constructed
/// [`KeyCapture`](crate::KeyCapture), and as a stand-in for a host widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDisplay {
    text: String,
    alignment: Alignment,
    cursor_visible: bool,
    focused: bool,
    render_count: usize,
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self {
            text: String::new(),
            alignment: Alignment::default(),
            cursor_visible: true,
            focused: true,
            render_count: 0,
        }
    }
}

impl TextDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A control that already shows `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Number of render calls received.
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl DisplayControl for TextDisplay {
    fn render(&mut self, text: &str, alignment: Alignment) {
        if self.text != text {
            self.text = text.to_string();
        }
        self.alignment = alignment;
        self.render_count += 1;
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn release_focus(&mut self) {
        self.focused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_idempotent() {
        let mut display = TextDisplay::new();
        display.render("Ctrl + A", Alignment::Center);
        let first = (display.text(), display.alignment());
        display.render("Ctrl + A", Alignment::Center);
        assert_eq!((display.text(), display.alignment()), first);
        assert_eq!(display.render_count(), 2);
    }

    fn drive<C: DisplayControl>(mut control: C) {
        control.render("new", Alignment::Right);
        control.set_cursor_visible(false);
        control.release_focus();
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        let mut display = TextDisplay::with_text("old");
        drive(&mut display);
        assert_eq!(display.text(), "new");
        assert_eq!(display.alignment(), Alignment::Right);
        assert!(!display.cursor_visible());
        assert!(!display.has_focus());
    }

    #[test]
    fn test_forwarding_through_box() {
        let mut boxed: Box<dyn DisplayControl> = Box::new(TextDisplay::new());
        boxed.render("x", Alignment::Center);
        assert_eq!(boxed.text(), "x");
    }
}
