use glam::Vec2;

use crate::{Config, GameRng};

/// Player component - the golden fish steered by the keyboard
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32, // pixels per tick
    pub facing_right: bool,
}

impl Player {
    /// Fresh player for round start: centered, size 20, facing right
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(config.canvas_width / 2.0, config.canvas_height / 2.0),
            size: config.player_start_size,
            speed: config.player_speed,
            facing_right: true,
        }
    }
}

/// Fish component - one member of the school.
///
/// Fish entities are never despawned during a round; this component is
/// overwritten in place by [`Fish::random`] whenever the fish leaves the
/// screen or gets eaten, so the slot index stays stable.
#[derive(Debug, Clone, Copy)]
pub struct Fish {
    pub pos: Vec2,
    pub size: f32,
    pub vel: f32, // signed; sign encodes travel direction
    pub hue: f32, // degrees, cosmetic only
    pub id: u32,  // fresh per spawn; render key stability only
}

impl Fish {
    /// Draw a fresh fish from the RNG: random side, size, speed, lane and hue.
    ///
    /// This is the single spawn path - round init, off-screen respawn and
    /// eaten respawn all go through here.
    pub fn random(rng: &mut GameRng, config: &Config) -> Self {
        use rand::Rng;
        let size = rng.0.gen_range(config.min_fish_size..config.max_fish_size);
        let from_left = rng.0.gen_bool(0.5);
        let speed = rng.0.gen_range(config.fish_speed_min..config.fish_speed_max);
        Self {
            pos: Vec2::new(
                if from_left { -size } else { config.canvas_width + size },
                rng.0.gen_range(
                    config.spawn_y_margin..config.canvas_height - config.spawn_y_margin,
                ),
            ),
            size,
            vel: if from_left { speed } else { -speed },
            hue: rng.0.gen_range(0.0..360.0),
            id: rng.0.gen(),
        }
    }

    /// Fish mirror based on travel direction
    pub fn facing_right(&self) -> bool {
        self.vel > 0.0
    }
}

/// Per-tick movement intent for the player, rebuilt from the input snapshot.
///
/// Opposing flags may both be set; each axis applies them independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_new_centered() {
        let config = Config::new();
        let player = Player::new(&config);
        assert_eq!(player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(player.size, 20.0);
        assert_eq!(player.speed, 3.0);
        assert!(player.facing_right);
    }

    #[test]
    fn test_fish_random_within_ranges() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let fish = Fish::random(&mut rng, &config);
            assert!(fish.size >= config.min_fish_size && fish.size < config.max_fish_size);
            assert!(
                fish.vel.abs() >= config.fish_speed_min && fish.vel.abs() < config.fish_speed_max
            );
            assert!(fish.pos.y >= 50.0 && fish.pos.y < config.canvas_height - 50.0);
            assert!((0.0..360.0).contains(&fish.hue));
        }
    }

    #[test]
    fn test_fish_random_spawn_side_matches_direction() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let fish = Fish::random(&mut rng, &config);
            if fish.vel > 0.0 {
                // Spawned off the left edge, swimming right
                assert_eq!(fish.pos.x, -fish.size);
            } else {
                assert_eq!(fish.pos.x, config.canvas_width + fish.size);
            }
        }
    }

    #[test]
    fn test_fish_facing_follows_velocity_sign() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut fish = Fish::random(&mut rng, &config);
        fish.vel = 1.0;
        assert!(fish.facing_right());
        fish.vel = -1.0;
        assert!(!fish.facing_right());
    }
}
