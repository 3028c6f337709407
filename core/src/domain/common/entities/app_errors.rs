use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every supplied ingredient name failed catalog resolution.
    #[error("None of the supplied ingredients exist in the catalog")]
    NoMatchingIngredients,

    #[error("Not found")]
    NotFound,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Internal server error")]
    InternalServerError,
}
