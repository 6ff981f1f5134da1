//! Capture state machine.
//!
//! [`CaptureState`] holds the current combination and the policy that
//! decides which combinations may be captured. It is either idle (nothing
//! captured, rendered as `-`) or holds one combination. Text seeded from a
//! host control or set verbatim is kept as given; only key and button
//! presses are checked against the policy.
//!
//! Policy violations are not errors: an oversized combination leaves the
//! previous one in place, and a policy change that the current combination
//! would violate resets it to idle.

use keycapture_config::{CaptureConfig, ConfigError};
use keycapture_keys::{
    Combination, IDLE_TEXT, ModifierMask, MouseButton, extract_modifiers, is_commit_key,
};
use std::num::NonZeroUsize;

const DEFAULT_MAX_COMBINATION_LENGTH: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// Which combinations may be captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturePolicy {
    modifiers_allowed: bool,
    max_combination_length: NonZeroUsize,
}

impl Default for CapturePolicy {
    fn default() -> Self {
        Self {
            modifiers_allowed: true,
            max_combination_length: DEFAULT_MAX_COMBINATION_LENGTH,
        }
    }
}

impl CapturePolicy {
    pub fn new(modifiers_allowed: bool, max_combination_length: NonZeroUsize) -> Self {
        Self {
            modifiers_allowed,
            max_combination_length,
        }
    }

    pub fn modifiers_allowed(&self) -> bool {
        self.modifiers_allowed
    }

    pub fn max_combination_length(&self) -> usize {
        self.max_combination_length.get()
    }
}

impl TryFrom<&CaptureConfig> for CapturePolicy {
    type Error = ConfigError;

    fn try_from(config: &CaptureConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        let max = NonZeroUsize::new(config.max_combination_length).ok_or_else(|| {
            ConfigError::Validation("max_combination_length must be at least 1".to_string())
        })?;
        Ok(Self::new(config.modifiers_allowed, max))
    }
}

/// Result of feeding a key or button press into the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A new combination was stored.
    Captured,
    /// The combination would exceed the maximum length; nothing changed.
    Rejected,
    /// The commit key was pressed; the host should release input focus.
    ReleaseFocus,
    /// The input carries nothing capturable (unmapped button, empty key).
    Ignored,
}

/// Result of a policy setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyChange {
    /// Policy updated, the current combination still conforms.
    Applied,
    /// Policy updated and the current combination was cleared.
    Reset,
    /// The value was invalid; the previous policy is kept.
    Rejected,
}

/// Current combination plus the policy governing it.
#[derive(Debug, Clone, Default)]
pub struct CaptureState {
    combination: Option<Combination>,
    policy: CapturePolicy,
}

impl CaptureState {
    /// Idle state with the given policy.
    pub fn new(policy: CapturePolicy) -> Self {
        Self {
            combination: None,
            policy,
        }
    }

    /// State seeded verbatim from text already shown by a control. Empty
    /// text (or `-`) starts idle.
    pub fn with_initial_text(policy: CapturePolicy, text: &str) -> Self {
        Self {
            combination: Combination::from_text(text),
            policy,
        }
    }

    pub fn combination(&self) -> Option<&Combination> {
        self.combination.as_ref()
    }

    /// Text for the display control: the combination, or `-` when idle.
    pub fn display_text(&self) -> &str {
        self.combination
            .as_ref()
            .map_or(IDLE_TEXT, Combination::as_str)
    }

    pub fn is_idle(&self) -> bool {
        self.combination.is_none()
    }

    pub fn policy(&self) -> &CapturePolicy {
        &self.policy
    }

    /// Handle a key press: `mask` holds the modifiers, `raw_key` the key
    /// token before symbol translation.
    pub fn on_key_press(&mut self, mask: ModifierMask, raw_key: &str) -> KeyOutcome {
        if is_commit_key(raw_key) {
            log::trace!("Commit key pressed, releasing focus");
            return KeyOutcome::ReleaseFocus;
        }

        let modifiers: Vec<&str> = if self.policy.modifiers_allowed {
            extract_modifiers(mask).iter().map(|m| m.as_str()).collect()
        } else {
            Vec::new()
        };

        let Some(combination) = Combination::new(modifiers.as_slice(), raw_key) else {
            return KeyOutcome::Ignored;
        };

        if combination.token_count() > self.policy.max_combination_length() {
            log::debug!(
                "Rejected {:?}: {} tokens exceeds max of {}",
                combination.as_str(),
                combination.token_count(),
                self.policy.max_combination_length()
            );
            return KeyOutcome::Rejected;
        }

        log::debug!("Captured {:?}", combination.as_str());
        self.combination = Some(combination);
        KeyOutcome::Captured
    }

    /// Handle a mouse button press. Only the side buttons are capturable;
    /// they never combine with modifiers.
    pub fn on_button_press(&mut self, button: MouseButton) -> KeyOutcome {
        let Some(token) = button.token() else {
            return KeyOutcome::Ignored;
        };
        let Some(combination) = Combination::new::<&str>(&[], token) else {
            return KeyOutcome::Ignored;
        };
        log::debug!("Captured {:?} from {:?}", combination.as_str(), button);
        self.combination = Some(combination);
        KeyOutcome::Captured
    }

    pub fn set_modifiers_allowed(&mut self, allowed: bool) -> PolicyChange {
        let disabling = self.policy.modifiers_allowed && !allowed;
        self.policy.modifiers_allowed = allowed;

        if disabling && self.combination.as_ref().is_some_and(Combination::has_modifiers) {
            log::info!("Modifiers disabled, clearing captured combination");
            self.combination = None;
            return PolicyChange::Reset;
        }
        PolicyChange::Applied
    }

    /// Values below 1 are rejected and leave the policy unchanged.
    pub fn set_max_combination_length(&mut self, length: usize) -> PolicyChange {
        let Some(max) = NonZeroUsize::new(length) else {
            log::warn!("Ignoring invalid max combination length {}", length);
            return PolicyChange::Rejected;
        };
        self.policy.max_combination_length = max;

        if self
            .combination
            .as_ref()
            .is_some_and(|c| c.token_count() > length)
        {
            log::info!(
                "Max combination length lowered to {}, clearing captured combination",
                length
            );
            self.combination = None;
            return PolicyChange::Reset;
        }
        PolicyChange::Applied
    }

    /// Replace the combination with `text` verbatim. Empty text (or `-`)
    /// returns to idle.
    pub fn set_combination(&mut self, text: &str) {
        self.combination = Combination::from_text(text);
    }
}
