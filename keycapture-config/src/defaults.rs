//! Default value functions used as `#[serde(default = "...")]` attributes.

pub fn modifiers_allowed() -> bool {
    true
}

pub fn max_combination_length() -> usize {
    3
}
