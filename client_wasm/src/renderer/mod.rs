//! Canvas 2D renderer
//!
//! Pure output: reads entity state, never mutates it. A missing 2d
//! context is a fatal precondition - the round cannot start without a
//! drawing surface.

mod draw;

use game_core::{Fish, Player};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::simulation::LocalRound;

const PLAYER_COLOR: &str = "#FFD700";
const FISH_SATURATION: f32 = 70.0;
const FISH_LIGHTNESS: f32 = 60.0;

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw one frame: background, bubbles, the school, then the player
    pub fn render(&self, round: &LocalRound, now_ms: f64) -> Result<(), JsValue> {
        draw::background(&self.ctx, self.width, self.height)?;
        draw::bubbles(&self.ctx, now_ms, self.width, self.height)?;

        for (_entity, fish) in round.world.query::<&Fish>().iter() {
            draw::fish(
                &self.ctx,
                fish.pos.x as f64,
                fish.pos.y as f64,
                fish.size as f64,
                &hsl(fish.hue),
                fish.facing_right(),
            )?;
        }

        for (_entity, player) in round.world.query::<&Player>().iter() {
            draw::fish(
                &self.ctx,
                player.pos.x as f64,
                player.pos.y as f64,
                player.size as f64,
                PLAYER_COLOR,
                player.facing_right,
            )?;
        }

        Ok(())
    }
}

fn hsl(hue: f32) -> String {
    format!("hsl({hue}, {FISH_SATURATION}%, {FISH_LIGHTNESS}%)")
}
