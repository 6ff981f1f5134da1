//! Key combination normalisation for keycapture.
//!
//! This crate turns raw input (a modifier mask plus a key token, or a mouse
//! button) into the canonical combination strings shown by a capture
//! control, e.g. "Alt + Shift + A" or "Ctrl + =".
//!
//! Features:
//! - Symbol mapping for punctuation keys ("Comma" → ",")
//! - Modifier mask decoding in fixed Alt, Shift, Ctrl order
//! - Combination formatting with self-reference stripping
//! - winit adapters for keys, modifier state and mouse buttons
//! - A parser for textual event descriptions ("Ctrl+Shift+A", "mouse:back")

pub mod combination;
pub mod modifiers;
pub mod parser;
pub mod platform;
pub mod symbols;

pub use combination::{Combination, IDLE_TEXT, SEPARATOR, stringify_combination};
pub use modifiers::{ModifierMask, ModifierName, extract_modifiers};
pub use parser::{InputEvent, ParseError, parse_key_event};
pub use platform::{MouseButton, is_commit_key, key_token};
pub use symbols::to_symbol;
