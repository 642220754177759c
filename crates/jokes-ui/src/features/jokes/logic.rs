//! Pure filtering helpers for the joke list.
//!
//! # Design
//! - Never mutate the input slice; callers replace collections wholesale.
//! - Preserve API order in every derived sequence.

use jokes_api_models::{Joke, JokeId};

/// Whether the joke's category contains `needle`, which must already be lower-cased.
fn category_contains(joke: &Joke, needle: &str) -> bool {
    needle.is_empty() || joke.category.to_lowercase().contains(needle)
}

/// Whether a joke matches the search term (case-insensitive category substring).
#[must_use]
pub fn matches_search(joke: &Joke, term: &str) -> bool {
    category_contains(joke, &term.to_lowercase())
}

/// Jokes whose category matches `term`, in collection order.
#[must_use]
pub fn filter_by_category(jokes: &[Joke], term: &str) -> Vec<Joke> {
    let needle = term.to_lowercase();
    jokes
        .iter()
        .filter(|joke| category_contains(joke, &needle))
        .cloned()
        .collect()
}

/// Copy of the collection without entries carrying `id`.
#[must_use]
pub fn without_id(jokes: &[Joke], id: JokeId) -> Vec<Joke> {
    jokes.iter().filter(|joke| joke.id != id).cloned().collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn joke(id: u64, category: &str, text: &str) -> Joke {
        Joke {
            id: JokeId(id),
            category: category.to_string(),
            kind: "single".to_string(),
            joke: text.to_string(),
        }
    }

    fn sample() -> Vec<Joke> {
        vec![
            joke(1, "Pun", "J1"),
            joke(2, "Dark", "J2"),
            joke(3, "Programming", "J3"),
            joke(4, "Spooky", "J4"),
            joke(5, "Misc", "J5"),
        ]
    }

    fn ids(jokes: &[Joke]) -> Vec<u64> {
        jokes.iter().map(|joke| joke.id.0).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let jokes = sample();
        assert_eq!(ids(&filter_by_category(&jokes, "pun")), vec![1]);
        assert_eq!(ids(&filter_by_category(&jokes, "PROG")), vec![3]);
        assert_eq!(ids(&filter_by_category(&jokes, "k")), vec![2, 4]);
        assert!(filter_by_category(&jokes, "christmas").is_empty());
    }

    #[test]
    fn filter_keeps_exactly_matching_entries_in_order() {
        let jokes = sample();
        for term in ["", "p", "o", "ARK", "isc", "zz"] {
            let filtered = filter_by_category(&jokes, term);
            let expected: Vec<u64> = jokes
                .iter()
                .filter(|joke| joke.category.to_lowercase().contains(&term.to_lowercase()))
                .map(|joke| joke.id.0)
                .collect();
            assert_eq!(ids(&filtered), expected, "term {term:?}");
            assert!(filtered.iter().all(|joke| matches_search(joke, term)));
        }
    }

    #[test]
    fn empty_search_matches_everything() {
        let jokes = sample();
        assert_eq!(filter_by_category(&jokes, ""), jokes);
        assert!(filter_by_category(&[], "").is_empty());
    }

    #[test]
    fn removing_present_id_drops_one_entry() {
        let jokes = sample();
        let remaining = without_id(&jokes, JokeId(3));
        assert_eq!(ids(&remaining), vec![1, 2, 4, 5]);
    }

    #[test]
    fn removing_absent_id_is_a_no_op() {
        let jokes = sample();
        assert_eq!(without_id(&jokes, JokeId(99)), jokes);
    }

    #[test]
    fn pun_and_dark_scenario() {
        let jokes = vec![joke(1, "Pun", "J1"), joke(2, "Dark", "J2")];
        assert_eq!(filter_by_category(&jokes, "pun"), vec![joke(1, "Pun", "J1")]);
        assert_eq!(without_id(&jokes, JokeId(1)), vec![joke(2, "Dark", "J2")]);
    }
}
