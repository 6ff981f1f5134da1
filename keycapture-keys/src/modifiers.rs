//! Modifier bitmask decoding.
//!
//! Modifiers are always reported in the fixed display order Alt, Shift,
//! Ctrl, independent of how the bits are laid out in the mask.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// One of the modifier keys a combination can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModifierName {
    Alt,
    Shift,
    Ctrl,
}

impl ModifierName {
    /// All modifiers in display order.
    pub const ALL: [ModifierName; 3] = [ModifierName::Alt, ModifierName::Shift, ModifierName::Ctrl];

    /// Token used in a rendered combination.
    pub fn as_str(self) -> &'static str {
        match self {
            ModifierName::Alt => "Alt",
            ModifierName::Shift => "Shift",
            ModifierName::Ctrl => "Ctrl",
        }
    }

    /// The mask bit that marks this modifier as held.
    pub fn mask(self) -> ModifierMask {
        match self {
            ModifierName::Alt => ModifierMask::ALT,
            ModifierName::Shift => ModifierMask::SHIFT,
            ModifierName::Ctrl => ModifierMask::CTRL,
        }
    }

    /// Parse a rendered modifier token. Matching is exact.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Alt" => Some(ModifierName::Alt),
            "Shift" => Some(ModifierName::Shift),
            "Ctrl" => Some(ModifierName::Ctrl),
            _ => None,
        }
    }
}

impl fmt::Display for ModifierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of modifiers held while a key was pressed.
///
/// Bits: Ctrl=1, Alt=2, Shift=4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierMask(u8);

impl ModifierMask {
    pub const CTRL: ModifierMask = ModifierMask(0b001);
    pub const ALT: ModifierMask = ModifierMask(0b010);
    pub const SHIFT: ModifierMask = ModifierMask(0b100);

    const ALL_BITS: u8 = 0b111;

    /// A mask with no modifiers held.
    pub const fn empty() -> Self {
        ModifierMask(0)
    }

    /// Build a mask from raw bits, dropping unknown bits.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        ModifierMask(bits & Self::ALL_BITS)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is also set in `self`.
    pub const fn contains(self, other: ModifierMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: ModifierMask) {
        self.0 |= other.0;
    }
}

impl BitOr for ModifierMask {
    type Output = ModifierMask;

    fn bitor(self, rhs: ModifierMask) -> ModifierMask {
        ModifierMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModifierMask {
    fn bitor_assign(&mut self, rhs: ModifierMask) {
        self.insert(rhs);
    }
}

impl From<winit::keyboard::ModifiersState> for ModifierMask {
    /// Super/Cmd is not part of the captured modifier set and is dropped.
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        let mut mask = ModifierMask::empty();
        if state.alt_key() {
            mask |= ModifierMask::ALT;
        }
        if state.shift_key() {
            mask |= ModifierMask::SHIFT;
        }
        if state.control_key() {
            mask |= ModifierMask::CTRL;
        }
        mask
    }
}

/// Decode a modifier mask into modifier names in display order.
pub fn extract_modifiers(mask: ModifierMask) -> Vec<ModifierName> {
    ModifierName::ALL
        .into_iter()
        .filter(|m| mask.contains(m.mask()))
        .collect()
}
