use thiserror::Error;

/// User-facing text shown for every failed lookup, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recipes. Please try again later.";
/// User-facing text shown when the search box is empty.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", EMPTY_QUERY_MESSAGE)]
    EmptyQuery,
}

/// Failure of a single request to the recipe provider.
///
/// Cloneable so it can travel inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("provider answered with HTTP {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// The detail is only for logs; users always see the same text.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required setting {0} (set it in the environment or in .env)")]
    Missing(&'static str),
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}
