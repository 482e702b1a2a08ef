use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Routing service unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Routing service error: {status} - {message}")]
    Service { status: String, message: String },

    #[error("Unresolvable address ({status}): {origin} -> {destination}")]
    UnresolvableAddress {
        status: String,
        origin: String,
        destination: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid departure time: {0}")]
    InvalidDeparture(#[from] jiff::Error),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::MalformedResponse(err.to_string())
    }
}
