//! Error types for the duel runner.

use thiserror::Error;

/// Result type for duel operations.
pub type DuelResult<T> = Result<T, DuelError>;

/// Errors that can occur while driving a duel.
#[derive(Debug, Error)]
pub enum DuelError {
    /// A turn was requested after the battle concluded.
    #[error("the duel has already concluded")]
    Concluded,
}
