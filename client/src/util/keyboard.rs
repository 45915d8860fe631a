//! Keyboard activation for link-like cards.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

/// `KeyboardEvent.key` values that activate a focused card.
pub const ACTIVATION_KEYS: [&str; 2] = ["Enter", " "];

/// True for Enter and Space; every other key is left to the browser.
pub fn is_activation_key(key: &str) -> bool {
    ACTIVATION_KEYS.contains(&key)
}
