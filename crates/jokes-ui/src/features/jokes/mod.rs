//! Joke feature surface: state, logic, actions, and views.
//!
//! # Design
//! - Keep list state and filtering DOM-free so they run in native tests.
//! - Restrict API calls to this feature layer.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
