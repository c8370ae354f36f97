use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub player_start_size: f32,
    pub player_speed: f32,
    pub fish_count: usize,
    pub min_fish_size: f32,
    pub max_fish_size: f32,
    pub fish_speed_min: f32,
    pub fish_speed_max: f32,
    pub spawn_y_margin: f32,
    pub despawn_margin: f32,
    pub collision_tolerance: f32,
    pub growth_factor: f32,
    pub win_fraction: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            player_start_size: Params::PLAYER_START_SIZE,
            player_speed: Params::PLAYER_SPEED,
            fish_count: Params::FISH_COUNT,
            min_fish_size: Params::MIN_FISH_SIZE,
            max_fish_size: Params::MAX_FISH_SIZE,
            fish_speed_min: Params::FISH_SPEED_MIN,
            fish_speed_max: Params::FISH_SPEED_MAX,
            spawn_y_margin: Params::SPAWN_Y_MARGIN,
            despawn_margin: Params::DESPAWN_MARGIN,
            collision_tolerance: Params::COLLISION_TOLERANCE,
            growth_factor: Params::GROWTH_FACTOR,
            win_fraction: Params::WIN_FRACTION,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Player size at which the round is won
    pub fn win_size(&self) -> f32 {
        self.canvas_width * self.win_fraction
    }

    /// Wrap player X across the horizontal edges (screen is a cylinder).
    /// There is deliberately no vertical analogue.
    pub fn wrap_player_x(&self, x: f32, size: f32) -> f32 {
        if x < -size {
            self.canvas_width + size
        } else if x > self.canvas_width + size {
            -size
        } else {
            x
        }
    }

    /// True once a fish has drifted far enough off-screen to be recycled
    pub fn fish_exited(&self, x: f32, size: f32) -> bool {
        x < -size - self.despawn_margin || x > self.canvas_width + size + self.despawn_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_size() {
        let config = Config::new();
        assert_eq!(config.win_size(), 320.0, "Win size is 0.4x canvas width");
    }

    #[test]
    fn test_wrap_player_x_left_to_right() {
        let config = Config::new();
        assert_eq!(config.wrap_player_x(-20.1, 20.0), 820.0);
    }

    #[test]
    fn test_wrap_player_x_right_to_left() {
        let config = Config::new();
        assert_eq!(config.wrap_player_x(820.1, 20.0), -20.0);
    }

    #[test]
    fn test_wrap_player_x_in_bounds_unchanged() {
        let config = Config::new();
        assert_eq!(config.wrap_player_x(-20.0, 20.0), -20.0);
        assert_eq!(config.wrap_player_x(820.0, 20.0), 820.0);
        assert_eq!(config.wrap_player_x(400.0, 20.0), 400.0);
    }

    #[test]
    fn test_fish_exited() {
        let config = Config::new();
        assert!(config.fish_exited(-81.0, 30.0));
        assert!(config.fish_exited(881.0, 30.0));
        assert!(!config.fish_exited(-80.0, 30.0));
        assert!(!config.fish_exited(880.0, 30.0));
        assert!(!config.fish_exited(400.0, 30.0));
    }
}
