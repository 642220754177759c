//! Classification of joke endpoint responses.
//!
//! # Design
//! - Transport stays in the browser client; this module only sees status and body text.
//! - A failure document wins over the bare status so the API's own message reaches the user.

use crate::core::error::ApiError;
use jokes_api_models::{ApiFailure, Joke, JokeResponse};

/// Turn a settled response into jokes or a typed failure.
///
/// # Errors
/// - [`ApiError::Rejected`] when the body is the API failure document (any status).
/// - [`ApiError::Status`] for non-success statuses without a failure document.
/// - [`ApiError::Decode`] for success statuses whose body is not a joke payload.
pub fn classify_response(
    ok: bool,
    status: u16,
    url: &str,
    body: &str,
) -> Result<Vec<Joke>, ApiError> {
    if !ok {
        return Err(serde_json::from_str::<ApiFailure>(body).map_or_else(
            |_| ApiError::Status {
                status,
                url: url.to_string(),
            },
            ApiError::from,
        ));
    }
    let response: JokeResponse = serde_json::from_str(body)?;
    response.into_jokes().map_err(ApiError::from)
}
