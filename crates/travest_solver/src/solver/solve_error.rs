use thiserror::Error;
use travest_directions::provider_error::ProviderError;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Invalid solver params: {0}")]
    InvalidParams(String),

    #[error("Departure candidate out of range: {0}")]
    TimeArithmetic(#[from] jiff::Error),
}
