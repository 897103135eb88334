//! Core logic for the NUAM indicator pages.
//!
//! Nothing in this crate touches the DOM. The Dioxus apps drive it:
//! - `catalog`: static country/indicator catalog embedded at compile time
//! - `selection`: selection state and the pill groups derived from it
//! - `payload` / `loader`: series decoding, the load state machine and request sequencing
//! - `status`: status line messages
//! - `chart`: Chart.js configuration and the create-once chart controller
//! - `form_guard` / `sidebar`: login form rules and sidebar visibility
//! - `config`: loader endpoint configuration

pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod form_guard;
pub mod loader;
pub mod payload;
pub mod selection;
pub mod sidebar;
pub mod status;
