//! Key event description parser.
//!
//! Parses human-readable event strings like "Ctrl+Shift+A" or "mouse:back"
//! into the raw input a capture control receives from its host: a modifier
//! mask plus a raw key token, or a mouse button.

use crate::modifiers::ModifierMask;
use crate::platform::{MouseButton, char_token};
use thiserror::Error;

/// Error type for event description parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty key event")]
    Empty,
    #[error("Unknown modifier: '{0}'")]
    UnknownModifier(String),
    #[error("Key event ends with '+', no key specified")]
    MissingKey,
    #[error("Unknown mouse button: '{0}'")]
    UnknownButton(String),
}

/// A raw input event, as the host would deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key {
        modifiers: ModifierMask,
        token: String,
    },
    Button(MouseButton),
}

/// Parse an event description into an [`InputEvent`].
///
/// Supported formats:
/// - `Modifier+Modifier+Key`: the last part is the pressed key, every
///   earlier part must be a modifier (`Ctrl`/`Control`, `Alt`/`Option`,
///   `Shift`). `Ctrl++` presses Plus with Ctrl held.
/// - `mouse:<button>`: `back`, `forward`, `left`, `right`, `middle` or a
///   button number.
///
/// A bare modifier ("Shift") is a press of that modifier key, reported with
/// its own bit set the way keyboards report it.
pub fn parse_key_event(s: &str) -> Result<InputEvent, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(name) = strip_mouse_prefix(s) {
        return MouseButton::from_name(name.trim())
            .map(InputEvent::Button)
            .ok_or_else(|| ParseError::UnknownButton(name.to_string()));
    }

    let (prefix, key_part) = split_key(s)?;

    let mut modifiers = ModifierMask::empty();
    if let Some(prefix) = prefix {
        for part in prefix.split('+').map(str::trim) {
            let mask = parse_modifier(part)
                .ok_or_else(|| ParseError::UnknownModifier(part.to_string()))?;
            modifiers |= mask;
        }
    }

    let token = match parse_modifier(key_part) {
        Some(mask) => {
            modifiers |= mask;
            modifier_token(mask).to_string()
        }
        None => normalize_key(key_part),
    };

    Ok(InputEvent::Key { modifiers, token })
}

fn strip_mouse_prefix(s: &str) -> Option<&str> {
    const PREFIX: &str = "mouse:";
    let head = s.get(..PREFIX.len())?;
    head.eq_ignore_ascii_case(PREFIX).then(|| &s[PREFIX.len()..])
}

/// Split off the key part. A trailing `++`, a lone `+` or `++` is the Plus
/// key.
fn split_key(s: &str) -> Result<(Option<&str>, &str), ParseError> {
    if s == "+" || s == "++" {
        return Ok((None, "+"));
    }
    if let Some(prefix) = s.strip_suffix("++") {
        return Ok((Some(prefix), "+"));
    }
    match s.rsplit_once('+') {
        Some((_, key)) if key.trim().is_empty() => Err(ParseError::MissingKey),
        Some((prefix, key)) => Ok((Some(prefix), key.trim())),
        None => Ok((None, s)),
    }
}

fn parse_modifier(part: &str) -> Option<ModifierMask> {
    match part.to_lowercase().as_str() {
        "ctrl" | "control" => Some(ModifierMask::CTRL),
        "alt" | "option" => Some(ModifierMask::ALT),
        "shift" => Some(ModifierMask::SHIFT),
        _ => None,
    }
}

fn modifier_token(mask: ModifierMask) -> &'static str {
    if mask == ModifierMask::CTRL {
        "Ctrl"
    } else if mask == ModifierMask::ALT {
        "Alt"
    } else {
        "Shift"
    }
}

/// Normalize a key name to the raw token the host reports.
fn normalize_key(s: &str) -> String {
    let mut chars = s.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return char_token(ch);
    }

    let named = match s.to_lowercase().as_str() {
        "enter" | "return" => "Return",
        "escape" | "esc" => "Escape",
        "space" => "Space",
        "tab" => "Tab",
        "backspace" => "Backspace",
        "delete" | "del" => "Delete",
        "insert" | "ins" => "Insert",
        "home" => "Home",
        "end" => "End",
        "pageup" | "pgup" => "PageUp",
        "pagedown" | "pgdn" => "PageDown",
        "up" | "arrowup" => "Up",
        "down" | "arrowdown" => "Down",
        "left" | "arrowleft" => "Left",
        "right" | "arrowright" => "Right",
        _ => return s.to_string(),
    };
    named.to_string()
}
