//! Interactive behaviors for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and attaches to server-rendered
//! markup: it never builds DOM of its own. Each behavior finds its elements
//! by selector and quietly does nothing when they are missing.
//!
//! Behavior modules keep a browser-free core (state machine or pure
//! computation) next to a `hydrate`-only installer, so the cores are tested
//! natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Mobile menu toggle and body scroll lock |
//! | [`anchor`] | Smooth scrolling for `#fragment` links |
//! | [`skills`] | Skill bar width, filled once on first view |
//! | [`cards`] | Staggered fade-in for content cards |
//! | [`reveal`] | Reveal-once tracker shared by skills and cards |
//! | [`project`] | Project detail expand/collapse |
//! | [`theme`] | Theme store, persistence and change subscribers |
//! | [`navbar`] | Scroll-dependent navbar background |
//! | [`config`] | Defaults plus optional embedded JSON overrides |
//! | [`consts`] | Selectors, markers and thresholds |
//! | [`error`] | Crate error type |

pub mod anchor;
pub mod cards;
pub mod config;
pub mod consts;
pub mod error;
pub mod nav;
pub mod navbar;
pub mod project;
pub mod reveal;
pub mod skills;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point, run by the generated JS glue when the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Another logger is already installed; keep using it.
        log::debug!("folio: console logger already set");
    }
    if let Err(err) = controller::start() {
        log::warn!("folio: not started, {err}");
    }
}
