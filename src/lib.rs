//! # scribepoint-web
//!
//! Leptos + WASM frontend for the ScribePoint academic-writing storefront:
//! marketing pages, service catalog, blog, reviews, authentication
//! (credentials and Google OAuth), order placement, and the PayPal capture
//! return page, all over a separate backend REST API.
//!
//! The crate owns no durable state beyond the persisted token pair. `net`
//! handles credential attachment and token refresh, `state` drives the
//! per-tab session machine, and `pages`/`components` render on top.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
