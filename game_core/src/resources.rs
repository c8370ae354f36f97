use std::collections::HashSet;

/// Held-key snapshot, updated asynchronously by key events and read once
/// per tick. Keys are lowercased on insert; no debouncing, last event
/// before the snapshot wins.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, held: bool) {
        let key = key.to_ascii_lowercase();
        if held {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    pub fn up(&self) -> bool {
        self.is_held("w") || self.is_held("arrowup")
    }

    pub fn down(&self) -> bool {
        self.is_held("s") || self.is_held("arrowdown")
    }

    pub fn left(&self) -> bool {
        self.is_held("a") || self.is_held("arrowleft")
    }

    pub fn right(&self) -> bool {
        self.is_held("d") || self.is_held("arrowright")
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Round score: the player's size, floored
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_from_size(&mut self, size: f32) {
        self.value = size.floor() as u32;
    }
}

/// Terminal round outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player reached the win size
    Won,
    /// Player collided with a bigger fish
    Eaten,
}

/// Side effects recorded during one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub fish_eaten: u32,
    pub score_changed: bool,
    pub round_over: Option<Outcome>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.fish_eaten = 0;
        self.score_changed = false;
        self.round_over = None;
    }
}

/// Random number generator - the sole randomness source for the simulation
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_set_and_release() {
        let mut input = InputState::new();
        input.set("w", true);
        assert!(input.is_held("w"));
        input.set("w", false);
        assert!(!input.is_held("w"));
    }

    #[test]
    fn test_input_state_lowercases_keys() {
        let mut input = InputState::new();
        input.set("ArrowUp", true);
        assert!(input.is_held("arrowup"));
        assert!(input.up());
    }

    #[test]
    fn test_input_state_axis_helpers_combine_wasd_and_arrows() {
        let mut input = InputState::new();
        input.set("s", true);
        assert!(input.down());
        input.set("s", false);
        input.set("arrowdown", true);
        assert!(input.down());
        assert!(!input.up());
        input.set("arrowleft", true);
        assert!(input.left());
        input.set("d", true);
        assert!(input.right());
    }

    #[test]
    fn test_score_floors_size() {
        let mut score = Score::new();
        score.set_from_size(21.9);
        assert_eq!(score.value, 21);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.fish_eaten = 3;
        events.score_changed = true;
        events.round_over = Some(Outcome::Won);

        events.clear();

        assert_eq!(events.fish_eaten, 0);
        assert!(!events.score_changed);
        assert!(events.round_over.is_none());
    }
}
