use hecs::World;

use crate::{Config, Fish, MoveIntent, Player};

/// Apply player movement from the tick's intent.
///
/// Each held direction applies +/- speed independently. Vertical movement
/// is clamped so the player stays fully on-screen; horizontal movement is
/// unclamped and wraps across the edges instead. The asymmetry is
/// intentional: the screen is a horizontal cylinder.
pub fn move_player(world: &mut World, config: &Config) {
    for (_entity, (player, intent)) in world.query_mut::<(&mut Player, &MoveIntent)>() {
        if intent.up {
            player.pos.y = (player.pos.y - player.speed).max(player.size);
        }
        if intent.down {
            player.pos.y = (player.pos.y + player.speed).min(config.canvas_height - player.size);
        }
        if intent.left {
            player.pos.x -= player.speed;
            player.facing_right = false;
        }
        if intent.right {
            player.pos.x += player.speed;
            player.facing_right = true;
        }

        player.pos.x = config.wrap_player_x(player.pos.x, player.size);
    }
}

/// Advance every fish along its lane
pub fn move_fish(world: &mut World) {
    for (_entity, fish) in world.query_mut::<&mut Fish>() {
        fish.pos.x += fish.vel;
    }
}
