//! # TaskFlow web frontend
//!
//! Leptos CSR entry point. Everything interesting lives in the
//! application core (`taskflow-app`); this crate renders it and wires the
//! browser transports in.

use wasm_bindgen::prelude::*;

mod app;
mod components;
mod context;
mod format;
mod route;

use app::App;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("TaskFlow client initializing...");

    leptos::mount::mount_to_body(App);

    log::info!("TaskFlow client mounted");
}
