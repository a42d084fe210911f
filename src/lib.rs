#[macro_use]
pub mod browser;
pub mod engine;
pub mod game;
pub mod sprite;

use engine::GameLoop;
use game::GemCrossing;
use wasm_bindgen::prelude::*;

/// Main entry for the Webassembly module
/// - sets up panic reporting
/// - hands the game to the loop on the local executor
#[wasm_bindgen]
pub fn main_js() -> Result<(), JsValue> {
    // setup better panic messages for debugging
    console_error_panic_hook::set_once();

    // spawns a new asynchronous task on the local thread, for the web
    // assembly environment, using wasm_bindgen_futures
    browser::spawn_local(async move {
        GameLoop::start(GemCrossing::new())
            .await
            .expect("Could not start game loop");
    });

    Ok(())
}
