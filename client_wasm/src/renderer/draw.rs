//! Canvas 2D drawing primitives

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const SKY_BLUE: &str = "#87CEEB";
const STEEL_BLUE: &str = "#4682B4";
const BUBBLE_FILL: &str = "rgba(255, 255, 255, 0.3)";
const BUBBLE_COUNT: usize = 10;

/// Two-stop vertical ocean gradient over the whole canvas
pub fn background(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
    gradient.add_color_stop(0.0, SKY_BLUE)?;
    gradient.add_color_stop(1.0, STEEL_BLUE)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, width, height);
    Ok(())
}

/// Decorative bubbles drifting as a function of wall-clock time only.
/// Purely cosmetic - the simulation never sees them.
pub fn bubbles(
    ctx: &CanvasRenderingContext2d,
    now_ms: f64,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(BUBBLE_FILL);
    for i in 0..BUBBLE_COUNT {
        let i = i as f64;
        let x = (now_ms * 0.1 + i * 80.0) % width;
        let y = (now_ms * 0.05 + i * 60.0) % height;
        let radius = 3.0 + (now_ms * 0.01 + i).sin() * 2.0;
        ctx.begin_path();
        ctx.arc(x, y, radius, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

/// Draw one fish: ellipse body, triangular tail, two-tone eye.
/// Mirrored horizontally when facing left. Used for the school and for
/// the player alike.
pub fn fish(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    size: f64,
    color: &str,
    facing_right: bool,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(x, y)?;
    if !facing_right {
        ctx.scale(-1.0, 1.0)?;
    }

    // Body
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.ellipse(0.0, 0.0, size, size * 0.7, 0.0, 0.0, TAU)?;
    ctx.fill();

    // Tail
    ctx.begin_path();
    ctx.move_to(-size * 0.8, 0.0);
    ctx.line_to(-size * 1.3, -size * 0.4);
    ctx.line_to(-size * 1.3, size * 0.4);
    ctx.close_path();
    ctx.fill();

    // Eye
    ctx.set_fill_style_str("white");
    ctx.begin_path();
    ctx.arc(size * 0.3, -size * 0.2, size * 0.2, 0.0, TAU)?;
    ctx.fill();

    ctx.set_fill_style_str("black");
    ctx.begin_path();
    ctx.arc(size * 0.35, -size * 0.2, size * 0.1, 0.0, TAU)?;
    ctx.fill();

    ctx.restore();
    Ok(())
}
