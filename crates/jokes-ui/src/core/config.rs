//! Static configuration for the jokes page.

/// Local storage key holding the raw search term.
pub const SEARCH_KEY: &str = "search";
/// Page heading.
pub const PAGE_TITLE: &str = "French Jokes";
/// Public jokes API host.
pub const DEFAULT_API_BASE: &str = "https://v2.jokeapi.dev";
/// Largest batch the API serves per request.
pub const MAX_AMOUNT: u8 = 10;

/// Endpoint parameters for the joke batch request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JokeApiConfig {
    /// Scheme and host, without trailing path.
    pub base_url: String,
    /// Category path segment (`Any`, `Programming`, `Pun`, ...).
    pub category: String,
    /// Joke type filter (`single` or `twopart`).
    pub joke_type: String,
    /// Number of jokes requested; clamped to `1..=MAX_AMOUNT`.
    pub amount: u8,
}

impl Default for JokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            category: "Any".to_string(),
            joke_type: "single".to_string(),
            amount: MAX_AMOUNT,
        }
    }
}

impl JokeApiConfig {
    /// Override the API host (mirrors, local fixtures).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the requested batch size.
    #[must_use]
    pub const fn with_amount(mut self, amount: u8) -> Self {
        self.amount = amount;
        self
    }

    /// Batch size actually sent to the API.
    #[must_use]
    pub fn effective_amount(&self) -> u8 {
        self.amount.clamp(1, MAX_AMOUNT)
    }

    /// Full request URL for the configured batch.
    #[must_use]
    pub fn jokes_url(&self) -> String {
        format!(
            "{}/joke/{}?type={}&amount={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(self.category.trim()),
            urlencoding::encode(self.joke_type.trim()),
            self.effective_amount()
        )
    }
}
