//! Core, DOM-free primitives for the jokes page.
pub mod config;
pub mod error;
pub mod persist;
pub mod response;
