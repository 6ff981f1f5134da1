//! Toolkit input → raw key tokens.
//!
//! Contains:
//! - winit logical key → raw token name (the names the symbol table expects)
//! - mouse button mapping to the synthetic `mouse4`/`mouse5` tokens
//! - the commit key check (Return/Enter releases focus instead of capturing)

use crate::symbols::token_for_char;
use winit::keyboard::{Key, NamedKey};

/// Mouse buttons as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// The "back" side button.
    Back,
    /// The "forward"/extra side button.
    Forward,
    Other(u16),
}

impl MouseButton {
    /// Synthetic primary token for side buttons. Other buttons are not
    /// capturable.
    pub fn token(self) -> Option<&'static str> {
        match self {
            MouseButton::Back => Some("mouse4"),
            MouseButton::Forward => Some("mouse5"),
            _ => None,
        }
    }

    /// Parse a button name such as `back`, `forward` or `left`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "left" => Some(MouseButton::Left),
            "right" => Some(MouseButton::Right),
            "middle" => Some(MouseButton::Middle),
            "back" | "mouse4" | "xbutton1" => Some(MouseButton::Back),
            "forward" | "mouse5" | "xbutton2" | "extra" => Some(MouseButton::Forward),
            other => other.parse().ok().map(MouseButton::Other),
        }
    }
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        use winit::event::MouseButton as W;
        match button {
            W::Left => MouseButton::Left,
            W::Right => MouseButton::Right,
            W::Middle => MouseButton::Middle,
            W::Back => MouseButton::Back,
            W::Forward => MouseButton::Forward,
            W::Other(n) => MouseButton::Other(n),
        }
    }
}

/// True for the key that confirms input rather than being captured.
pub fn is_commit_key(token: &str) -> bool {
    token.eq_ignore_ascii_case("Return") || token.eq_ignore_ascii_case("Enter")
}

/// Derive the raw token for a winit logical key.
///
/// Returns `None` for dead and unidentified keys, which cannot be captured.
pub fn key_token(key: &Key) -> Option<String> {
    match key {
        Key::Named(named) => Some(named_key_token(*named)),
        Key::Character(s) => {
            let mut chars = s.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                // Composed input (IME, ligatures) is kept as typed
                return Some(s.to_string());
            }
            Some(char_token(ch))
        }
        Key::Unidentified(_) | Key::Dead(_) => {
            log::trace!("No token for key {:?}", key);
            None
        }
    }
}

/// Token for a single produced character.
pub fn char_token(ch: char) -> String {
    if ch == ' ' {
        return "Space".to_string();
    }
    match token_for_char(ch) {
        Some(token) => token.to_string(),
        None => ch.to_uppercase().collect(),
    }
}

fn named_key_token(named: NamedKey) -> String {
    let token = match named {
        NamedKey::Enter => "Return",
        NamedKey::Control => "Ctrl",
        NamedKey::Alt => "Alt",
        NamedKey::Shift => "Shift",
        NamedKey::Super | NamedKey::Meta => "Meta",
        NamedKey::Escape => "Escape",
        NamedKey::Tab => "Tab",
        NamedKey::Space => "Space",
        NamedKey::Backspace => "Backspace",
        NamedKey::Delete => "Delete",
        NamedKey::Insert => "Insert",
        NamedKey::Home => "Home",
        NamedKey::End => "End",
        NamedKey::PageUp => "PageUp",
        NamedKey::PageDown => "PageDown",
        NamedKey::ArrowUp => "Up",
        NamedKey::ArrowDown => "Down",
        NamedKey::ArrowLeft => "Left",
        NamedKey::ArrowRight => "Right",
        NamedKey::CapsLock => "CapsLock",
        // F-keys and the long tail use winit's own variant name
        other => return format!("{other:?}"),
    };
    token.to_string()
}
