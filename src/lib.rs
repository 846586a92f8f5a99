#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod clock;
pub mod content;
pub mod style;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (e.g. hot reload) keeps the existing logger
    _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating portfolio");
    leptos::mount::hydrate_body(App);
}
