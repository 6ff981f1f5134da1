//! Integration tests for the host binding: native construction versus
//! attaching to an existing control, and policy behaviour seen through the
//! rendered text.

use keycapture::{
    Alignment, CapturePolicy, DisplayControl, KeyCapture, KeyOutcome, ModifierMask, MouseButton,
    PolicyChange, TextDisplay,
};
use std::num::NonZeroUsize;

/// A host control with its own notion of text, used to check retrofit.
#[derive(Debug, Default)]
struct HostLabel {
    content: String,
    centered: bool,
    cursor_width: u32,
    focus_released: usize,
}

impl DisplayControl for HostLabel {
    fn render(&mut self, text: &str, alignment: Alignment) {
        self.content = text.to_string();
        self.centered = alignment == Alignment::Center;
    }

    fn text(&self) -> String {
        self.content.clone()
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        self.centered = alignment == Alignment::Center;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_width = u32::from(visible);
    }

    fn release_focus(&mut self) {
        self.focus_released += 1;
    }
}

enum Event {
    Key(ModifierMask, &'static str),
    Button(MouseButton),
    AllowModifiers(bool),
    MaxLength(usize),
}

fn apply<C: DisplayControl>(capture: &mut KeyCapture<C>, event: &Event) {
    match event {
        Event::Key(mask, key) => {
            capture.on_key_press(*mask, key);
        }
        Event::Button(button) => {
            capture.on_button_press(*button);
        }
        Event::AllowModifiers(allowed) => {
            capture.set_modifiers_allowed(*allowed);
        }
        Event::MaxLength(n) => {
            capture.set_max_combination_length(*n);
        }
    }
}

fn script() -> Vec<Event> {
    vec![
        Event::Key(ModifierMask::CTRL, "A"),
        Event::Key(ModifierMask::ALT | ModifierMask::SHIFT | ModifierMask::CTRL, "B"),
        Event::Key(ModifierMask::ALT | ModifierMask::SHIFT, "Comma"),
        Event::Key(ModifierMask::empty(), "Return"),
        Event::Button(MouseButton::Back),
        Event::Button(MouseButton::Middle),
        Event::Key(ModifierMask::SHIFT, "Shift"),
        Event::MaxLength(0),
        Event::Key(ModifierMask::CTRL, "Equal"),
        Event::AllowModifiers(false),
        Event::Key(ModifierMask::CTRL, "Minus"),
        Event::MaxLength(1),
        Event::Button(MouseButton::Forward),
    ]
}

// ---------------------------------------------------------------------------
// Retrofit equivalence
// ---------------------------------------------------------------------------

#[test]
fn native_and_attached_stay_in_lockstep() {
    let mut native = KeyCapture::new(CapturePolicy::default());
    let mut host = TextDisplay::new();
    let mut attached = KeyCapture::attach(&mut host, CapturePolicy::default());
    let mut label = KeyCapture::attach(HostLabel::default(), CapturePolicy::default());

    assert_eq!(native.control().text(), attached.control().text());
    assert_eq!(native.control().text(), label.control().text());

    for event in script() {
        apply(&mut native, &event);
        apply(&mut attached, &event);
        apply(&mut label, &event);

        assert_eq!(native.combination(), attached.combination());
        assert_eq!(native.combination(), label.combination());
        assert_eq!(native.control().text(), attached.control().text());
        assert_eq!(native.control().text(), label.control().text());
    }

    assert_eq!(native.display_text(), "mouse5");
    drop(attached);
    assert_eq!(host.text(), "mouse5");
}

#[test]
fn attach_configures_appearance() {
    let mut host = HostLabel {
        cursor_width: 2,
        ..HostLabel::default()
    };
    let capture = KeyCapture::attach(&mut host, CapturePolicy::default());
    drop(capture);

    assert_eq!(host.cursor_width, 0);
    assert!(host.centered);
    assert_eq!(host.content, "-");
}

#[test]
fn attach_preserves_existing_text() {
    let capture = KeyCapture::attach(
        TextDisplay::with_text("Ctrl + S"),
        CapturePolicy::default(),
    );
    assert_eq!(capture.display_text(), "Ctrl + S");
    assert_eq!(capture.combination().map(|c| c.token_count()), Some(2));

    let control = capture.into_inner();
    assert_eq!(control.text(), "Ctrl + S");
    assert!(!control.cursor_visible());
}

#[test]
fn attach_keeps_text_outside_the_policy() {
    let policy = CapturePolicy::new(false, NonZeroUsize::new(1).unwrap());
    let mut capture = KeyCapture::attach(TextDisplay::with_text("Ctrl + S"), policy);
    assert_eq!(capture.combination().map(|c| c.token_count()), Some(2));
    assert_eq!(capture.control().text(), "Ctrl + S");

    // The policy still governs what gets captured next
    capture.on_key_press(ModifierMask::CTRL, "Q");
    assert_eq!(capture.control().text(), "Q");
}

#[test]
fn commit_key_reaches_host_control() {
    let mut capture = KeyCapture::attach(HostLabel::default(), CapturePolicy::default());
    capture.on_key_press(ModifierMask::CTRL, "Z");
    assert_eq!(
        capture.on_key_press(ModifierMask::empty(), "Enter"),
        KeyOutcome::ReleaseFocus
    );
    let host = capture.into_inner();
    assert_eq!(host.focus_released, 1);
    assert_eq!(host.content, "Ctrl + Z");
}

// ---------------------------------------------------------------------------
// Policy seen through the display
// ---------------------------------------------------------------------------

#[test]
fn oversized_combination_keeps_previous_text() {
    let policy = CapturePolicy::new(true, NonZeroUsize::new(2).unwrap());
    let mut capture = KeyCapture::new(policy);
    capture.on_key_press(ModifierMask::SHIFT, "A");

    let outcome = capture.on_key_press(ModifierMask::SHIFT | ModifierMask::CTRL, "B");
    assert_eq!(outcome, KeyOutcome::Rejected);
    assert_eq!(capture.control().text(), "Shift + A");
}

#[test]
fn button_replaces_modified_combination() {
    let mut capture = KeyCapture::new(CapturePolicy::default());
    capture.on_key_press(ModifierMask::CTRL | ModifierMask::ALT, "X");
    capture.on_button_press(MouseButton::Back);
    assert_eq!(capture.control().text(), "mouse4");
    assert!(!capture.combination().unwrap().has_modifiers());
}

#[test]
fn disabling_modifiers_resets_only_modified_combinations() {
    let mut capture = KeyCapture::new(CapturePolicy::default());
    capture.on_key_press(ModifierMask::CTRL, "A");
    assert_eq!(capture.set_modifiers_allowed(false), PolicyChange::Reset);
    assert_eq!(capture.control().text(), "-");

    capture.on_key_press(ModifierMask::CTRL, "A");
    assert_eq!(capture.control().text(), "A");
    assert_eq!(capture.set_modifiers_allowed(true), PolicyChange::Applied);
    assert_eq!(capture.set_modifiers_allowed(false), PolicyChange::Applied);
    assert_eq!(capture.control().text(), "A");
}

#[test]
fn invalid_max_length_is_rejected() {
    let mut capture = KeyCapture::new(CapturePolicy::default());
    assert_eq!(capture.set_max_combination_length(0), PolicyChange::Rejected);
    assert_eq!(capture.policy().max_combination_length(), 3);
}
