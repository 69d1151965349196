#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod clipboard;
pub mod contact;
pub mod expansion;
pub mod metrics;
pub mod nav;
pub mod notify;
pub mod portfolio;
pub mod reveal;
pub mod settings;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (e.g. hot reload) only fails because a logger is already set
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
