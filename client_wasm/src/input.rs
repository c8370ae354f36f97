//! Keyboard input handling

/// Key names the simulation reacts to, lowercased
pub const MOVEMENT_KEYS: [&str; 8] = [
    "w",
    "s",
    "a",
    "d",
    "arrowup",
    "arrowdown",
    "arrowleft",
    "arrowright",
];

/// Normalize a DOM key name (key matching is case-insensitive)
pub fn normalize_key(key: &str) -> String {
    key.to_ascii_lowercase()
}

/// True if the key steers the player
pub fn is_movement_key(key: &str) -> bool {
    MOVEMENT_KEYS.contains(&key)
}
