//! Display symbols for punctuation and operator keys.
//!
//! The input layer reports punctuation keys by name ("Comma", "Equal").
//! Captured combinations show the glyph instead, so "Ctrl + Equal" is
//! rendered as "Ctrl + =".

/// Translate a raw key token into its display glyph.
///
/// Tokens without a glyph are returned unchanged, which makes the
/// translation total and idempotent.
pub fn to_symbol(token: &str) -> &str {
    symbol_for(token).unwrap_or(token)
}

/// Look up the glyph for a raw key token, if it has one.
pub fn symbol_for(token: &str) -> Option<&'static str> {
    let symbol = match token {
        "Comma" => ",",
        "Question" => "?",
        "Period" => ".",
        "Slash" => "/",
        "Semicolon" => ";",
        "Colon" => ":",
        "Less" => "<",
        "Greater" => ">",
        "Minus" => "-",
        "Equal" => "=",
        "Plus" => "+",
        "Underscore" => "_",
        _ => return None,
    };
    Some(symbol)
}

/// Reverse lookup: the raw token name the input layer uses for a glyph.
///
/// Used when a toolkit reports the produced character rather than the key
/// name, so the token can still go through [`to_symbol`].
pub fn token_for_char(ch: char) -> Option<&'static str> {
    let token = match ch {
        ',' => "Comma",
        '?' => "Question",
        '.' => "Period",
        '/' => "Slash",
        ';' => "Semicolon",
        ':' => "Colon",
        '<' => "Less",
        '>' => "Greater",
        '-' => "Minus",
        '=' => "Equal",
        '+' => "Plus",
        '_' => "Underscore",
        _ => return None,
    };
    Some(token)
}
