use hecs::World;

use crate::{Config, Fish, GameRng};

/// Recycle fish that drifted past the despawn margin.
///
/// The replacement is written over the existing component, so the entity
/// (and with it the school's slot order) survives the respawn. Size, speed,
/// lane and hue are all drawn fresh - no continuity with the previous
/// occupant.
pub fn respawn_exited(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, fish) in world.query_mut::<&mut Fish>() {
        if config.fish_exited(fish.pos.x, fish.size) {
            *fish = Fish::random(rng, config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_fish;

    #[test]
    fn test_exited_fish_is_replaced_in_place() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(11);
        let entity = create_fish(&mut world, &mut rng, &config);

        let old_id = {
            let mut fish = world.get::<&mut Fish>(entity).unwrap();
            fish.pos.x = -fish.size - config.despawn_margin - 1.0;
            fish.id
        };

        respawn_exited(&mut world, &config, &mut rng);

        let fish = *world.get::<&Fish>(entity).unwrap();
        assert_ne!(fish.id, old_id, "Respawn draws a fresh identity");
        assert!(
            !config.fish_exited(fish.pos.x, fish.size),
            "Respawned fish sits at a screen edge"
        );
        assert_eq!(world.len(), 1, "Entity count unchanged");
    }

    #[test]
    fn test_on_screen_fish_untouched() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(11);
        let entity = create_fish(&mut world, &mut rng, &config);

        let before = *world.get::<&Fish>(entity).unwrap();
        respawn_exited(&mut world, &config, &mut rng);
        let after = *world.get::<&Fish>(entity).unwrap();

        assert_eq!(before.id, after.id);
        assert_eq!(before.size, after.size);
        assert_eq!(before.vel, after.vel);
    }

    #[test]
    fn test_respawn_waits_for_margin() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(11);
        let entity = create_fish(&mut world, &mut rng, &config);

        // Just off-screen but within the margin: still swimming in/out
        let old_id = {
            let mut fish = world.get::<&mut Fish>(entity).unwrap();
            fish.pos.x = -fish.size - config.despawn_margin + 1.0;
            fish.id
        };

        respawn_exited(&mut world, &config, &mut rng);
        assert_eq!(world.get::<&Fish>(entity).unwrap().id, old_id);
    }
}
