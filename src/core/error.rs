use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuelError {
    #[error("invalid launch parameters: {0}")]
    InvalidParameters(String),
    #[error("the match is already decided")]
    MatchOver,
}
