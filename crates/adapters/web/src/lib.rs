//! # folio-adapter-web
//!
//! Browser adapter: implements the folio ports over the live DOM with
//! `web-sys`, drives a [`folio_app::site::Site`] from DOM events and logs
//! to the developer console through `tracing`.
//!
//! ## Modules
//!
//! - [`dom`] — `WebDocument`, every page surface
//! - [`storage`] — `LocalStorage`, the persisted theme preference
//! - [`logging`] — `tracing` subscriber writing to `console.*`
//! - [`runtime`] — readiness signals, listeners and animation timers
//!
//! Built for `wasm32-unknown-unknown` and excluded from the native workspace.

use wasm_bindgen::prelude::wasm_bindgen;

pub mod dom;
pub mod logging;
pub mod runtime;
pub mod storage;

/// Module entry point, run once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    if let Err(err) = runtime::start() {
        leptos::logging::error!("folio failed to start: {err}");
    }
}
