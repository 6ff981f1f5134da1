//! Canonical combination strings.
//!
//! A combination is zero or more modifier tokens followed by one primary
//! token, joined with `" + "`: "Alt + Shift + A", "Ctrl + =", "mouse4".

use crate::modifiers::ModifierName;
use crate::symbols::to_symbol;
use std::fmt;

/// Separator placed between tokens of a rendered combination.
pub const SEPARATOR: &str = " + ";

/// Text shown while no combination has been captured.
pub const IDLE_TEXT: &str = "-";

/// Render modifiers plus a primary key as a canonical combination string.
///
/// Every token goes through [`to_symbol`]. When the primary key is itself
/// one of the modifiers (pressing bare Shift reports Shift as both the key
/// and a held modifier) that modifier is dropped once.
///
/// ```
/// use keycapture_keys::stringify_combination;
///
/// assert_eq!(stringify_combination(&["Alt", "Shift"], "A"), "Alt + Shift + A");
/// assert_eq!(stringify_combination::<&str>(&[], "B"), "B");
/// assert_eq!(stringify_combination(&["Shift"], "Shift"), "Shift");
/// assert_eq!(stringify_combination(&["Ctrl"], "Equal"), "Ctrl + =");
/// ```
pub fn stringify_combination<S: AsRef<str>>(modifiers: &[S], primary: &str) -> String {
    let key = to_symbol(primary);
    let mut mods: Vec<&str> = modifiers.iter().map(|m| to_symbol(m.as_ref())).collect();

    if let Some(pos) = mods.iter().position(|m| *m == key) {
        mods.remove(pos);
    }

    let mut combination = String::new();
    if !mods.is_empty() {
        combination.push_str(&mods.join(SEPARATOR));
        combination.push_str(SEPARATOR);
    }
    combination.push_str(key);
    combination
}

/// A captured, non-empty combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    text: String,
}

impl Combination {
    /// Format a combination from modifier tokens and a raw primary key.
    ///
    /// Returns `None` when nothing would be rendered (empty key, no modifiers).
    pub fn new<S: AsRef<str>>(modifiers: &[S], primary: &str) -> Option<Self> {
        let text = stringify_combination(modifiers, primary);
        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    /// Adopt an already rendered combination string verbatim.
    ///
    /// The empty string and [`IDLE_TEXT`] mean "no combination".
    pub fn from_text(text: &str) -> Option<Self> {
        if text.is_empty() || text == IDLE_TEXT {
            None
        } else {
            Some(Self {
                text: text.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Tokens in rendered order; the last one is the primary key.
    pub fn tokens(&self) -> Vec<&str> {
        self.text.split(SEPARATOR).collect()
    }

    pub fn token_count(&self) -> usize {
        self.text.split(SEPARATOR).count()
    }

    /// The primary key or button token.
    pub fn primary(&self) -> &str {
        self.text
            .rsplit_once(SEPARATOR)
            .map_or(self.text.as_str(), |(_, key)| key)
    }

    /// Modifiers held together with the primary key.
    pub fn modifiers(&self) -> Vec<ModifierName> {
        let tokens = self.tokens();
        let held = &tokens[..tokens.len() - 1];
        held.iter()
            .filter_map(|t| ModifierName::from_token(t))
            .collect()
    }

    pub fn has_modifiers(&self) -> bool {
        !self.modifiers().is_empty()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Combination {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
