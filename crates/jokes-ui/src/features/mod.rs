//! Feature slices for the jokes page.

pub mod jokes;
