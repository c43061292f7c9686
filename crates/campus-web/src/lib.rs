/// Campus Web Dashboard Shell
///
/// Leptos navigation shell for the school administration UI: collapsible
/// sidebar, topbar, active-route highlighting and the mobile drawer.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod nav;
pub mod pages;
pub mod types;
pub mod utils;

#[cfg(all(test, feature = "ssr"))]
mod test_utils;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::config::ShellConfig;
    use leptos::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // Same settings the server rendered with, so routes and redirects agree
    let config = ShellConfig::load_from_document();
    mount_to_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}
