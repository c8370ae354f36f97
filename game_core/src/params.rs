/// Game tuning parameters for Fishy
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    // Player
    pub const PLAYER_START_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 3.0; // pixels per tick

    // Fish school
    pub const FISH_COUNT: usize = 12;
    pub const MIN_FISH_SIZE: f32 = 15.0;
    pub const MAX_FISH_SIZE: f32 = 60.0;
    pub const FISH_SPEED_MIN: f32 = 0.5; // |pixels per tick|
    pub const FISH_SPEED_MAX: f32 = 2.0;
    pub const SPAWN_Y_MARGIN: f32 = 50.0; // keep spawns away from top/bottom edges
    pub const DESPAWN_MARGIN: f32 = 50.0; // beyond own size before off-screen respawn

    // Eating
    pub const COLLISION_TOLERANCE: f32 = 0.7; // fraction of radius sum
    pub const GROWTH_FACTOR: f32 = 0.1; // fraction of eaten fish's size
    pub const WIN_FRACTION: f32 = 0.4; // of canvas width
}
