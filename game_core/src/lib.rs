pub mod components;
pub mod config;
pub mod params;
pub mod phase;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use phase::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one simulation tick.
///
/// Motion is expressed in pixels per tick; the host scheduler calls this
/// once per animation frame and there is no fixed timestep. Does nothing
/// unless the round is playing. A terminal collision outcome is applied
/// to the phase before returning.
pub fn step(
    world: &mut World,
    input: &InputState,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    phase: &mut RoundPhase,
) {
    events.clear();

    if !phase.is_playing() {
        return;
    }

    // 1. Snapshot held keys into the player's intent
    ingest_input(world, input);

    // 2. Move the player (vertical clamp, horizontal wrap)
    move_player(world, config);

    // 3. Advance the school
    move_fish(world);

    // 4. Recycle fish that left the screen
    respawn_exited(world, config, rng);

    // 5. Eat or be eaten
    resolve_collisions(world, config, score, events, rng);

    if let Some(outcome) = events.round_over {
        phase.transition(RoundAction::Ended(outcome));
    }
}

/// Helper to create the player entity
pub fn create_player(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Player::new(config), MoveIntent::new()))
}

/// Helper to create one fish entity with a fresh random draw
pub fn create_fish(world: &mut World, rng: &mut GameRng, config: &Config) -> hecs::Entity {
    world.spawn((Fish::random(rng, config),))
}

/// (Re-)initialize a round: discard all entities, spawn the player and a
/// full school of fish, and reset the score to the player's starting size.
pub fn start_round(world: &mut World, config: &Config, score: &mut Score, rng: &mut GameRng) {
    world.clear();
    create_player(world, config);
    for _ in 0..config.fish_count {
        create_fish(world, rng, config);
    }
    score.set_from_size(config.player_start_size);
}
