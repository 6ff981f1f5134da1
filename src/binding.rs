//! Host binding: feeds input events into a [`CaptureState`] and renders the
//! result into a display control.
//!
//! A binding is built either natively, owning a fresh [`TextDisplay`], or by
//! attaching to a control the host already has. Both paths produce the same
//! type and behave identically for the same event sequence.

use crate::capture::{CapturePolicy, CaptureState, KeyOutcome, PolicyChange};
use crate::display::{Alignment, DisplayControl, TextDisplay};
use keycapture_keys::{Combination, ModifierMask, MouseButton, key_token};
use winit::keyboard::{Key, ModifiersState};

/// A display control that captures key combinations.
#[derive(Debug)]
pub struct KeyCapture<C: DisplayControl = TextDisplay> {
    state: CaptureState,
    control: C,
}

impl KeyCapture<TextDisplay> {
    /// Build a capture control with its own display, starting idle.
    pub fn new(policy: CapturePolicy) -> Self {
        Self::configure(TextDisplay::new(), CaptureState::new(policy))
    }
}

impl Default for KeyCapture<TextDisplay> {
    fn default() -> Self {
        Self::new(CapturePolicy::default())
    }
}

impl<C: DisplayControl> KeyCapture<C> {
    /// Attach capture behaviour to an existing control.
    ///
    /// Whatever the control already shows becomes the initial combination.
    /// Pass `&mut control` to keep ownership with the host.
    pub fn attach(control: C, policy: CapturePolicy) -> Self {
        let existing = control.text();
        log::debug!("Attaching key capture to control showing {:?}", existing);
        Self::configure(control, CaptureState::with_initial_text(policy, &existing))
    }

    fn configure(mut control: C, state: CaptureState) -> Self {
        control.set_cursor_visible(false);
        control.set_alignment(Alignment::Center);
        let mut capture = Self { state, control };
        capture.render();
        capture
    }

    /// Handle a key press delivered by the host.
    pub fn on_key_press(&mut self, mask: ModifierMask, raw_key: &str) -> KeyOutcome {
        let outcome = self.state.on_key_press(mask, raw_key);
        self.after_input(outcome);
        outcome
    }

    /// Handle a winit key press.
    pub fn on_winit_key(&mut self, key: &Key, modifiers: ModifiersState) -> KeyOutcome {
        match key_token(key) {
            Some(token) => self.on_key_press(ModifierMask::from(modifiers), &token),
            None => {
                log::trace!("Ignoring uncapturable key {:?}", key);
                KeyOutcome::Ignored
            }
        }
    }

    /// Handle a mouse button press delivered by the host.
    pub fn on_button_press(&mut self, button: impl Into<MouseButton>) -> KeyOutcome {
        let outcome = self.state.on_button_press(button.into());
        self.after_input(outcome);
        outcome
    }

    pub fn set_modifiers_allowed(&mut self, allowed: bool) -> PolicyChange {
        let change = self.state.set_modifiers_allowed(allowed);
        if change == PolicyChange::Reset {
            self.render();
        }
        change
    }

    pub fn set_max_combination_length(&mut self, length: usize) -> PolicyChange {
        let change = self.state.set_max_combination_length(length);
        if change == PolicyChange::Reset {
            self.render();
        }
        change
    }

    /// Optionally replace the combination verbatim, then render it.
    pub fn display_combination(&mut self, text: Option<&str>) {
        if let Some(text) = text {
            self.state.set_combination(text);
        }
        self.render();
    }

    pub fn combination(&self) -> Option<&Combination> {
        self.state.combination()
    }

    /// The text this binding renders: the combination or `-`.
    pub fn display_text(&self) -> &str {
        self.state.display_text()
    }

    pub fn policy(&self) -> &CapturePolicy {
        self.state.policy()
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    /// Detach and hand back the control, which keeps its last rendering.
    pub fn into_inner(self) -> C {
        self.control
    }

    fn after_input(&mut self, outcome: KeyOutcome) {
        match outcome {
            KeyOutcome::ReleaseFocus => self.control.release_focus(),
            KeyOutcome::Captured | KeyOutcome::Rejected | KeyOutcome::Ignored => self.render(),
        }
    }

    fn render(&mut self) {
        self.control
            .render(self.state.display_text(), Alignment::Center);
    }
}
