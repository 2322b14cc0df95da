use thiserror::Error;

/// Errors produced by the match-management core and its command surface.
///
/// Every error here is a deterministic function of current state and input;
/// nothing is transient or retryable.
#[derive(Error, Debug)]
pub enum MatchError {
    /// Malformed input, rejected before any state changes.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation not valid for the current lifecycle state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// No match or player for the given reference.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Free-text team reference with no candidate above the fuzzy threshold.
    #[error("No team matches \"{query}\"")]
    NoSuchTeam { query: String },
}

pub type Result<T> = std::result::Result<T, MatchError>;
