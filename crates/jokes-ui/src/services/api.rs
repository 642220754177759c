//! HTTP client helpers (REST).

use crate::core::config::JokeApiConfig;
use crate::core::error::ApiError;
use crate::core::response::classify_response;
use gloo_net::http::Request;
use jokes_api_models::Joke;
use web_sys::AbortSignal;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: JokeApiConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: JokeApiConfig) -> Self {
        Self { config }
    }

    pub(crate) async fn fetch_jokes(
        &self,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<Joke>, ApiError> {
        let url = self.config.jokes_url();
        let response = Request::get(&url).abort_signal(signal).send().await?;
        let body = response.text().await?;
        classify_response(response.ok(), response.status(), &url, &body)
    }
}
