#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the public jokes API.
//!
//! Only the fields the UI renders are modelled; anything else the API sends
//! (`flags`, `safe`, `lang`, ...) is ignored on decode.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a joke by the API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct JokeId(pub u64);

impl fmt::Display for JokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single joke record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Joke {
    /// Identifier used for keyed rendering and removal.
    pub id: JokeId,
    /// Category name (`Programming`, `Pun`, `Dark`, ...).
    pub category: String,
    /// Joke type; the UI requests `single` jokes only.
    #[serde(rename = "type")]
    pub kind: String,
    /// Joke text.
    pub joke: String,
}

/// Successful multi-joke response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JokeBatch {
    /// Number of jokes the API reports returning.
    #[serde(default)]
    pub amount: Option<u32>,
    /// Returned jokes in API order.
    pub jokes: Vec<Joke>,
}

/// Failure document returned with `"error": true`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiFailure {
    /// Always `true` for failure documents.
    pub error: bool,
    /// API-specific error code.
    #[serde(default)]
    pub code: Option<u16>,
    /// Short description of the failure.
    pub message: String,
    /// Longer explanation when provided.
    #[serde(default)]
    pub additional_info: Option<String>,
    /// Reasons the API lists for the failure.
    #[serde(default)]
    pub caused_by: Vec<String>,
}

impl ApiFailure {
    /// Human-readable summary combining the message and additional info.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.additional_info.as_deref().map(str::trim) {
            Some(info) if !info.is_empty() => format!("{}: {info}", self.message),
            _ => self.message.clone(),
        }
    }
}

/// Any body the joke endpoint may answer with.
///
/// `amount=1` requests come back as a bare joke instead of a batch.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum JokeResponse {
    /// `{ "jokes": [...] }`
    Batch(JokeBatch),
    /// `{ "error": true, "message": ... }`
    Failure(ApiFailure),
    /// A bare joke object.
    Single(Joke),
}

impl JokeResponse {
    /// Flatten the response into the joke sequence, or the failure document.
    ///
    /// # Errors
    /// Returns the [`ApiFailure`] when the API reported an error.
    pub fn into_jokes(self) -> Result<Vec<Joke>, ApiFailure> {
        match self {
            Self::Batch(batch) => Ok(batch.jokes),
            Self::Single(joke) => Ok(vec![joke]),
            Self::Failure(failure) => Err(failure),
        }
    }
}
