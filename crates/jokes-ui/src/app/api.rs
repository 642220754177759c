//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Fall back to the public endpoint when no provider is mounted.

use crate::core::config::JokeApiConfig;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub(crate) client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context for the given endpoint configuration.
    pub(crate) fn new(config: JokeApiConfig) -> Self {
        Self {
            client: Rc::new(ApiClient::new(config)),
        }
    }
}

impl Default for ApiCtx {
    fn default() -> Self {
        Self::new(JokeApiConfig::default())
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
