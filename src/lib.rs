//! keycapture: capture a typed key combination or mouse side-button press
//! and show it, normalised, in a display control.
//!
//! The engine lives in three layers:
//!
//! - [`keycapture_keys`]: symbol mapping, modifier decoding and combination
//!   formatting ("Alt + Shift + A", "Ctrl + =")
//! - [`capture`]: the capture state machine and its policy
//!   (modifiers allowed, maximum combination length)
//! - [`binding`]: the host binding that feeds input events in and renders
//!   the result into a [`DisplayControl`]
//!
//! ```
//! use keycapture::{CapturePolicy, DisplayControl, KeyCapture, ModifierMask, TextDisplay};
//!
//! // Native: the capture control owns its display.
//! let mut capture = KeyCapture::new(CapturePolicy::default());
//! capture.on_key_press(ModifierMask::CTRL | ModifierMask::SHIFT, "Equal");
//! assert_eq!(capture.control().text(), "Shift + Ctrl + =");
//!
//! // Retrofit: attach to a control the host already has.
//! let mut existing = TextDisplay::with_text("Alt + F4");
//! let capture = KeyCapture::attach(&mut existing, CapturePolicy::default());
//! assert_eq!(capture.display_text(), "Alt + F4");
//! ```

pub mod binding;
pub mod capture;
pub mod cli;
pub mod display;
pub mod logging;

pub use binding::KeyCapture;
pub use capture::{CapturePolicy, CaptureState, KeyOutcome, PolicyChange};
pub use display::{Alignment, DisplayControl, TextDisplay};

pub use keycapture_config::{CaptureConfig, ConfigError};
pub use keycapture_keys::{
    Combination, ModifierMask, ModifierName, MouseButton, extract_modifiers,
    stringify_combination, to_symbol,
};
