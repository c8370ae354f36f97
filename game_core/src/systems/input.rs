use hecs::World;

use crate::{InputState, MoveIntent, Player};

/// Snapshot the held-key state into the player's movement intent.
///
/// Opposing keys both set their flag; the movement system applies each
/// axis direction independently, so symmetric moves cancel out.
pub fn ingest_input(world: &mut World, input: &InputState) {
    for (_entity, (_player, intent)) in world.query_mut::<(&Player, &mut MoveIntent)>() {
        *intent = MoveIntent {
            up: input.up(),
            down: input.down(),
            left: input.left(),
            right: input.right(),
        };
    }
}
