use thiserror::Error;

/// Errors that can occur while fetching and parsing a recipe
///
/// None of these escape the batch API; they only classify per-attempt
/// outcomes during the reduction into a [`FetchResult`](crate::FetchResult).
#[derive(Error, Debug)]
pub enum FetchError {
    /// The configured endpoint is not a well-formed URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// The request or the body read failed at the transport level
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an empty body
    #[error("Empty response body")]
    EmptyBody,

    /// The response body is not valid JSON
    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The response carries no `meals` array, or the array is empty
    #[error("Response contains no meals")]
    NoMeals,

    /// A required meal field is absent or not a string
    #[error("Missing or invalid field: {0}")]
    MissingField(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FetchError {
    /// Whether this failure means the endpoint could not be reached
    ///
    /// Transport-class failures flip the batch reachability flag; everything
    /// else means the server answered but the payload was unusable, which
    /// leaves reachability untouched.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidEndpoint(_) | FetchError::Transport(_) | FetchError::EmptyBody
        )
    }
}
