//! Browser client for Fishy
//!
//! Canvas 2D rendering plus keyboard input, exposed to the host page as
//! wasm-bindgen exports. The page owns the requestAnimationFrame loop and
//! calls `frame` once per display refresh; `frame` returns whether the
//! round is still playing, so stopping the loop is the cancellation path.

#![cfg(target_arch = "wasm32")]

mod input;
mod renderer;
mod simulation;

use game_core::RoundPhase;
use renderer::Renderer;
use simulation::LocalRound;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

struct Client {
    round: LocalRound,
    renderer: Renderer,
}

// Global client storage for WASM bindings
static mut CLIENT: Option<Client> = None;

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let renderer = Renderer::new(&canvas)?;
    let seed = js_sys::Date::now() as u64;
    unsafe {
        CLIENT = Some(Client {
            round: LocalRound::new(seed),
            renderer,
        });
    }
    log::info!("client initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn key_down(key: &str) {
    let key = input::normalize_key(key);
    if !input::is_movement_key(&key) {
        return;
    }
    unsafe {
        if let Some(ref mut client) = CLIENT {
            client.round.input.set(&key, true);
        }
    }
}

#[wasm_bindgen]
pub fn key_up(key: &str) {
    let key = input::normalize_key(key);
    if !input::is_movement_key(&key) {
        return;
    }
    unsafe {
        if let Some(ref mut client) = CLIENT {
            client.round.input.set(&key, false);
        }
    }
}

#[wasm_bindgen]
pub fn start_round() -> Result<(), JsValue> {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            if client.round.start() {
                log::info!("round started");
            } else {
                log::warn!("start ignored in phase {:?}", client.round.phase);
            }
            Ok(())
        } else {
            Err(JsValue::from_str("Client not initialized"))
        }
    }
}

#[wasm_bindgen]
pub fn restart_round() -> Result<(), JsValue> {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            if client.round.restart() {
                log::info!("round restarted");
            } else {
                log::warn!("restart ignored in phase {:?}", client.round.phase);
            }
            Ok(())
        } else {
            Err(JsValue::from_str("Client not initialized"))
        }
    }
}

#[wasm_bindgen]
pub fn reset_to_menu() -> Result<(), JsValue> {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            if !client.round.reset() {
                log::warn!("reset ignored in phase {:?}", client.round.phase);
            }
            Ok(())
        } else {
            Err(JsValue::from_str("Client not initialized"))
        }
    }
}

/// One tick: advance the simulation, draw the frame, report whether the
/// host should schedule another one.
#[wasm_bindgen]
pub fn frame(now_ms: f64) -> Result<bool, JsValue> {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            let playing = client.round.tick();
            if let Some(outcome) = client.round.events.round_over {
                log::info!("round over: {outcome:?}, score {}", client.round.score.value);
            }
            client.renderer.render(&client.round, now_ms)?;
            Ok(playing)
        } else {
            Err(JsValue::from_str("Client not initialized"))
        }
    }
}

#[wasm_bindgen]
pub fn score() -> u32 {
    unsafe {
        CLIENT
            .as_ref()
            .map(|client| client.round.score.value)
            .unwrap_or(0)
    }
}

#[wasm_bindgen]
pub fn phase() -> String {
    unsafe {
        match CLIENT.as_ref().map(|client| client.round.phase) {
            Some(RoundPhase::Menu) | None => "menu".to_string(),
            Some(RoundPhase::Playing) => "playing".to_string(),
            Some(RoundPhase::GameOver) => "gameOver".to_string(),
            Some(RoundPhase::Won) => "won".to_string(),
        }
    }
}
