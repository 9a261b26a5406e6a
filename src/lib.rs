//! Client-side interactivity engine for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the page's interactive behavior: the randomized non-overlapping card
//! layout, scroll-linked parallax on cards and decorative blobs, the
//! drag-to-reposition gesture with tap detection, the project info panel,
//! and the full-screen lightbox. All state and geometry live in a
//! browser-independent engine core; the host layer only translates DOM
//! events in and applies the resulting [`engine::Action`]s back out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level per-region engine and testable [`engine::EngineCore`] |
//! | [`card`] | Card model and the ordered card store |
//! | [`layout`] | Placement engine: banded and scatter modes |
//! | [`parallax`] | Scroll zones, progress mapping, drift and blob effects |
//! | [`drag`] | Single-session drag state machine |
//! | [`panel`] | Info panel selection state |
//! | [`lightbox`] | Wrapping lightbox navigation and keys |
//! | [`geom`] | Points, rectangles, padded overlap |
//! | [`app`] | Host layer: DOM discovery, event wiring, action application |
//! | [`widgets`] | Mobile menu, smooth scroll, hero blob |
//! | [`dom`] | Logged-failure DOM write helpers |
//! | [`consts`] | Shared numeric constants (sizes, thresholds, margins) |

pub mod app;
pub mod card;
pub mod consts;
pub mod dom;
pub mod drag;
pub mod engine;
pub mod geom;
pub mod layout;
pub mod lightbox;
pub mod panel;
pub mod parallax;
pub mod widgets;

use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point: install logging and wire the whole page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    if let Err(err) = app::init() {
        log::error!("initialization failed: {err:?}");
    }
}
