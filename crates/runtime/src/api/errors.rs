//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and rejected player commands so
//! clients can bubble them up with consistent context.
use crawler_core::{ErrorSeverity, GameError, GameStateError};
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a game before building")]
    MissingGame,

    #[error("player command rejected: {0}")]
    Command(#[from] GameStateError),
}

impl RuntimeError {
    /// True for rejected commands the game recovers from by itself.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Command(err) => matches!(
                err.severity(),
                ErrorSeverity::Recoverable | ErrorSeverity::Validation
            ),
            _ => false,
        }
    }
}
