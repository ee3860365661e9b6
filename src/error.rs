use thiserror::Error;

/// Failures that end a session. Invalid input and rejected moves are
/// handled inside the turn controller and never show up here.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input stream closed")]
    InputClosed,
}
