//! Kana Shiritori core crate.
//!
//! Single-player word-chain game over a catalog of species names in katakana,
//! compiled to WASM and rendered straight into the host page's DOM. The chain
//! rules and game state live in pure modules (`chain`, `game`, `catalog`) so
//! they can be tested natively; `app` holds the browser glue.

use wasm_bindgen::prelude::*;

mod app;
pub mod catalog;
pub mod chain;
pub mod game;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Entry point called from the host page. Kicks off the catalog fetch; the
/// game UI appears once the catalog has loaded.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    app::start()
}
