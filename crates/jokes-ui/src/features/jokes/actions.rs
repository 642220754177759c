//! Joke list actions.
//!
//! # Design
//! - Capture state transitions separate from rendering.
//! - Actions are plain data; the HTTP call lives in the feature API layer.

use crate::core::error::ApiError;
use crate::features::jokes::state::FetchTicket;
use jokes_api_models::{Joke, JokeId};

/// State transitions driven by the fetch lifecycle and user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JokesAction {
    /// A fetch was issued with this ticket.
    FetchStarted(FetchTicket),
    /// A fetch settled.
    FetchFinished {
        /// Ticket the request was issued with.
        ticket: FetchTicket,
        /// Decoded jokes or the failure.
        result: Result<Vec<Joke>, ApiError>,
    },
    /// The consumer lost interest (unmount) before the fetch settled.
    FetchAbandoned(FetchTicket),
    /// The user dismissed a joke.
    Remove(JokeId),
}
