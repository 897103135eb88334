//! Shared Dioxus components and Chart.js bridge for the NUAM pages.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js glue via `js_sys::eval()`
//! - `api`: `fetch()` transport for the indicator endpoint
//! - `config`: runtime configuration read from localStorage and cookies
//! - `state`: reactive AppState with Dioxus Signals
//! - `loader`: spawns indicator loads against AppState
//! - `components`: reusable RSX components (pills, status line, login form, sidebar)

pub mod api;
pub mod components;
pub mod config;
pub mod js_bridge;
pub mod loader;
pub mod state;
