//! Browser-extension surface: popup flow, tab-URL relay, and the in-page
//! launcher preview content script.
//!
//! ARCHITECTURE
//! ============
//! Browser APIs never appear directly in flow logic. The popup, relay,
//! and content script are written against the `capabilities` traits and
//! tested with fakes; `browser` and `dom` hold the only code that touches
//! the extension sandbox and the page, gated behind the `web` feature.

pub mod capabilities;
pub mod content;
pub mod messages;
pub mod net;
pub mod popup;
pub mod popup_app;
pub mod relay;

#[cfg(feature = "web")]
pub mod browser;
#[cfg(feature = "web")]
pub mod dom;

/// WASM entry point for the popup page.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_popup() {
    use leptos::prelude::*;

    use crate::popup_app::PopupApp;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let tabs: std::rc::Rc<dyn capabilities::TabQuery> = std::rc::Rc::new(browser::BrowserTabs);
    leptos::mount::mount_to_body(move || view! { <PopupApp tabs=tabs/> });
}

/// WASM entry point for the content script.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_content_script() {
    console_error_panic_hook::set_once();
    browser::run_content_script();
}

/// WASM entry point for the background service worker.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_background() {
    console_error_panic_hook::set_once();
    browser::run_background();
}
