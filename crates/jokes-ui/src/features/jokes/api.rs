//! Fetch wiring for the joke batch.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Each request owns an abort controller so an unmounted page never applies a late result.

use crate::features::jokes::actions::JokesAction;
use crate::features::jokes::state::{FetchTicket, JokesState};
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;
use web_sys::{AbortController, AbortSignal};
use yew::functional::UseReducerDispatcher;

/// Handle to an in-flight joke request.
pub(crate) struct FetchHandle {
    ticket: FetchTicket,
    controller: Option<AbortController>,
}

impl FetchHandle {
    /// Abort the request and release the ticket.
    pub(crate) fn cancel(&self, dispatcher: &UseReducerDispatcher<JokesState>) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
        dispatcher.dispatch(JokesAction::FetchAbandoned(self.ticket));
    }
}

/// Issue the batch request under `ticket` and dispatch its outcome.
pub(crate) fn spawn_fetch(
    client: Rc<ApiClient>,
    ticket: FetchTicket,
    dispatcher: UseReducerDispatcher<JokesState>,
) -> FetchHandle {
    let controller = match AbortController::new() {
        Ok(controller) => Some(controller),
        Err(err) => {
            console::error!("abort controller unavailable", err);
            None
        }
    };
    let signal = controller.as_ref().map(AbortController::signal);
    dispatcher.dispatch(JokesAction::FetchStarted(ticket));
    yew::platform::spawn_local(async move {
        let result = client.fetch_jokes(signal.as_ref()).await;
        if signal.as_ref().is_some_and(AbortSignal::aborted) {
            return;
        }
        match &result {
            Ok(jokes) => console::log!(format!("fetched {} jokes", jokes.len())),
            Err(err) => console::error!("joke fetch failed", err.to_string()),
        }
        dispatcher.dispatch(JokesAction::FetchFinished { ticket, result });
    });
    FetchHandle { ticket, controller }
}
