//! Shared Dioxus components and D3.js bridge for the irrigation dashboard.
//!
//! This crate provides:
//! - `nav`: the navigation model (sections, sub-topics, branch resolution)
//! - `state`: reactive AppState with Dioxus Signals
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `components`: reusable RSX components (sidebar, selectors, expanders, embeds)

pub mod nav;
pub mod state;
pub mod js_bridge;
pub mod components;
