use hecs::World;

use crate::{Config, Events, Fish, GameRng, Outcome, Player, Score};

/// Resolve player/fish collisions for this tick.
///
/// The hit-test is a circle-distance check against 0.7x the radius sum,
/// slightly more forgiving than true edge-touching. Eating a smaller fish
/// grows the player by a tenth of the eaten size and respawns the fish in
/// place; later fish in the same tick are compared against the grown size.
/// Touching a bigger fish ends the round. Once a terminal outcome is set,
/// no further collisions are processed.
pub fn resolve_collisions(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let player_data = {
        let mut query = world.query::<&Player>();
        query.iter().next().map(|(e, p)| (e, *p))
    };
    let (player_entity, mut player) = match player_data {
        Some(data) => data,
        None => return,
    };

    for (_entity, fish) in world.query_mut::<&mut Fish>() {
        let distance = player.pos.distance(fish.pos);
        if distance >= (player.size + fish.size) * config.collision_tolerance {
            continue;
        }

        if player.size > fish.size {
            player.size += fish.size * config.growth_factor;
            score.set_from_size(player.size);
            events.fish_eaten += 1;
            events.score_changed = true;

            if player.size >= config.win_size() {
                events.round_over = Some(Outcome::Won);
                break;
            }

            *fish = Fish::random(rng, config);
        } else {
            events.round_over = Some(Outcome::Eaten);
            break;
        }
    }

    if let Ok(mut stored) = world.get::<&mut Player>(player_entity) {
        *stored = player;
    }
}
