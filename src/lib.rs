#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod chat;
pub mod clock;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod long_press;
pub mod navigation;
pub mod profile;
#[cfg(feature = "ssr")]
pub mod relay;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second call only happens on hot reload, nothing to do then
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
