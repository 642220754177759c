//! Error types surfaced by the fetch and storage layers.
//!
//! # Design
//! - Keep variants string-backed so they can be stored in UI state and compared in tests.
//! - Browser-specific error values are rendered to text at the boundary.

use jokes_api_models::ApiFailure;
use thiserror::Error;

/// Failure fetching or decoding the joke batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, abort).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status code.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },
    /// The body was not a joke payload.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The API answered with its own failure document.
    #[error("jokes API rejected the request: {message}")]
    Rejected {
        /// Summary reported by the API.
        message: String,
    },
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<ApiFailure> for ApiError {
    fn from(failure: ApiFailure) -> Self {
        Self::Rejected {
            message: failure.summary(),
        }
    }
}

/// Failure reading or writing persisted values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Storage could not be accessed at all (disabled, sandboxed frame).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A write was refused (quota exceeded, private mode).
    #[error("failed to write `{key}`: {detail}")]
    Write {
        /// Key being written.
        key: String,
        /// Browser-provided detail.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use jokes_api_models::ApiFailure;

    #[test]
    fn api_failure_maps_to_rejected_summary() {
        let failure = ApiFailure {
            error: true,
            code: Some(106),
            message: "No matching joke found".to_string(),
            additional_info: None,
            caused_by: Vec::new(),
        };
        let err = ApiError::from(failure);
        assert_eq!(
            err.to_string(),
            "jokes API rejected the request: No matching joke found"
        );
    }

    #[test]
    fn decode_errors_keep_serde_detail() {
        let parse = serde_json::from_str::<u32>("\"nope\"").expect_err("string is not u32");
        let err = ApiError::from(parse);
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("unexpected response body:"));
    }

    #[test]
    fn status_message_names_url() {
        let err = ApiError::Status {
            status: 503,
            url: "https://v2.jokeapi.dev/joke/Any".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "https://v2.jokeapi.dev/joke/Any returned HTTP 503"
        );
    }
}
