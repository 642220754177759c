//! Joke collection state owned by the page controller.
//!
//! # Design
//! - The collection is replaced wholesale, never edited in place.
//! - A fetch result is applied at most once, and only for the outstanding ticket.
//! - The filtered view is derived at render time and never stored here.

use crate::features::jokes::actions::JokesAction;
use crate::features::jokes::logic::without_id;
use jokes_api_models::Joke;
use std::rc::Rc;
use yew::functional::Reducible;

/// Token identifying one fetch request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// Raw ticket number.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Lifecycle of the joke batch request.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Jokes received.
    Loaded,
    /// Request failed; message is shown to the user.
    Failed(String),
}

/// Joke collection plus fetch bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct JokesState {
    /// Current collection in API order.
    pub jokes: Rc<Vec<Joke>>,
    /// Fetch lifecycle for loading/error rendering.
    pub status: FetchStatus,
    pending: Option<FetchTicket>,
    issued: u64,
}

impl JokesState {
    /// Ticket to use for the next request.
    #[must_use]
    pub const fn next_ticket(&self) -> FetchTicket {
        FetchTicket(self.issued + 1)
    }

    /// Ticket of the request still awaiting a result, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<FetchTicket> {
        self.pending
    }

    /// Apply an action, returning whether anything changed.
    pub fn apply(&mut self, action: JokesAction) -> bool {
        match action {
            JokesAction::FetchStarted(ticket) => {
                if ticket.0 <= self.issued {
                    return false;
                }
                self.issued = ticket.0;
                self.pending = Some(ticket);
                self.status = FetchStatus::Loading;
                true
            }
            JokesAction::FetchFinished { ticket, result } => {
                if self.pending != Some(ticket) {
                    return false;
                }
                self.pending = None;
                match result {
                    Ok(jokes) => {
                        self.jokes = Rc::new(jokes);
                        self.status = FetchStatus::Loaded;
                    }
                    Err(err) => {
                        self.status = FetchStatus::Failed(err.to_string());
                    }
                }
                true
            }
            JokesAction::FetchAbandoned(ticket) => {
                if self.pending != Some(ticket) {
                    return false;
                }
                self.pending = None;
                self.status = FetchStatus::Idle;
                true
            }
            JokesAction::Remove(id) => {
                if !self.jokes.iter().any(|joke| joke.id == id) {
                    return false;
                }
                self.jokes = Rc::new(without_id(&self.jokes, id));
                true
            }
        }
    }
}

impl Reducible for JokesState {
    type Action = JokesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::features::jokes::logic::filter_by_category;
    use crate::features::jokes::logic::tests::joke;
    use jokes_api_models::JokeId;

    fn loaded(jokes: Vec<Joke>) -> JokesState {
        let mut state = JokesState::default();
        let ticket = state.next_ticket();
        assert!(state.apply(JokesAction::FetchStarted(ticket)));
        assert!(state.apply(JokesAction::FetchFinished {
            ticket,
            result: Ok(jokes),
        }));
        state
    }

    #[test]
    fn initial_state_is_empty_and_idle() {
        let state = JokesState::default();
        assert!(state.jokes.is_empty());
        assert_eq!(state.status, FetchStatus::Idle);
        assert_eq!(state.pending(), None);
        assert_eq!(state.next_ticket().value(), 1);
    }

    #[test]
    fn ten_joke_fetch_populates_collection() {
        let batch: Vec<Joke> = (1..=10).map(|id| joke(id, "Misc", "text")).collect();
        let state = loaded(batch);
        assert_eq!(state.jokes.len(), 10);
        assert_eq!(state.status, FetchStatus::Loaded);
        assert_eq!(state.pending(), None);
        assert_eq!(filter_by_category(&state.jokes, "").len(), 10);
    }

    #[test]
    fn remove_scenario_keeps_remaining_order() {
        let mut state = loaded(vec![
            joke(1, "Pun", "J1"),
            joke(2, "Dark", "J2"),
            joke(3, "Pun", "J3"),
        ]);
        assert!(state.apply(JokesAction::Remove(JokeId(1))));
        let ids: Vec<u64> = state.jokes.iter().map(|joke| joke.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(!state.apply(JokesAction::Remove(JokeId(1))));
        assert_eq!(state.jokes.len(), 2);
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let mut state = loaded(vec![joke(1, "Pun", "J1")]);
        let stale = FetchTicket(1);
        assert!(!state.apply(JokesAction::FetchFinished {
            ticket: stale,
            result: Ok(Vec::new()),
        }));
        assert_eq!(state.jokes.len(), 1);
    }

    #[test]
    fn abandoned_fetch_drops_late_result() {
        let mut state = JokesState::default();
        let ticket = state.next_ticket();
        state.apply(JokesAction::FetchStarted(ticket));
        assert!(state.apply(JokesAction::FetchAbandoned(ticket)));
        assert!(!state.apply(JokesAction::FetchFinished {
            ticket,
            result: Ok(vec![joke(1, "Pun", "J1")]),
        }));
        assert!(state.jokes.is_empty());
        assert_eq!(state.status, FetchStatus::Idle);
    }

    #[test]
    fn newer_ticket_supersedes_older_one() {
        let mut state = JokesState::default();
        let first = state.next_ticket();
        state.apply(JokesAction::FetchStarted(first));
        let second = state.next_ticket();
        assert!(second > first);
        state.apply(JokesAction::FetchStarted(second));
        assert!(!state.apply(JokesAction::FetchStarted(first)));
        assert!(!state.apply(JokesAction::FetchFinished {
            ticket: first,
            result: Ok(vec![joke(9, "Dark", "old")]),
        }));
        assert!(state.apply(JokesAction::FetchFinished {
            ticket: second,
            result: Ok(vec![joke(1, "Pun", "new")]),
        }));
        assert_eq!(state.jokes[0].joke, "new");
    }

    #[test]
    fn failure_is_surfaced_as_message() {
        let mut state = JokesState::default();
        let ticket = state.next_ticket();
        state.apply(JokesAction::FetchStarted(ticket));
        state.apply(JokesAction::FetchFinished {
            ticket,
            result: Err(ApiError::Transport("offline".to_string())),
        });
        assert_eq!(
            state.status,
            FetchStatus::Failed("request failed: offline".to_string())
        );
        assert!(state.jokes.is_empty());
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let state = Rc::new(JokesState::default());
        let next = Rc::clone(&state).reduce(JokesAction::Remove(JokeId(4)));
        assert!(Rc::ptr_eq(&state, &next));
        let started = next.reduce(JokesAction::FetchStarted(FetchTicket(1)));
        assert_eq!(started.status, FetchStatus::Loading);
    }
}
