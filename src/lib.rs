//! Portfolio site compiled to WebAssembly.
//!
//! Page logic lives in target-independent modules so it can be tested on
//! the host; the browser glue under `wasm` only exists on wasm32.

pub mod config;
pub mod error;
pub mod gallery;
pub mod markup;
pub mod page;
pub mod particles;
pub mod typed;
pub mod works;

#[cfg(target_arch = "wasm32")]
pub use wasm::render::start as start_background;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    use crate::config::SiteConfig;

    mod detail;
    mod dom;
    mod fetch;
    mod listing;
    pub mod render;
    mod ux;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let config = SiteConfig::default();

        ux::install(&window, &document, &config);
        if !render::start(&window, &document, &config)? {
            log::debug!("particle background disabled");
        }

        spawn_local(listing::run(document.clone(), config.clone()));
        spawn_local(detail::run(window, document, config));
        Ok(())
    }
}
