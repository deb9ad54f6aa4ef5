use thiserror::Error;

// Blank input, caught before any analysis starts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Please enter a URL")]
pub struct ValidationError;

// Anything that goes wrong inside an analysis service
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("analysis service unavailable: {0}")]
    Unavailable(String),
    #[error("analysis service returned an invalid result: {0}")]
    InvalidResult(String),
    #[error("analysis did not complete")]
    Aborted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Analysis already in progress")]
    InFlight,
}
