//! Error types for the traversal engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Ways a stimulus can be rejected.
///
/// A rejected stimulus leaves the session exactly as it was. In-story
/// failures such as a missing scene are not errors here: they move the
/// session into [`GameState::Error`](crate::GameState::Error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No choice exists at this zero-based index.
    #[error("invalid choice: there is no option {}", .0 + 1)]
    InvalidChoice(usize),

    /// The action does not fit what the current scene offers.
    #[error("{0}")]
    UnexpectedAction(&'static str),

    /// The session already reached an ending or an error.
    #[error("the story is over; restart to play again")]
    SessionOver,

    /// The stimulus answers a presentation that has since been replaced.
    #[error("stale action for turn {got}, current turn is {current}")]
    StaleTurn {
        /// Turn the stimulus was meant for.
        got: u64,
        /// Turn currently on screen.
        current: u64,
    },

    /// Another stimulus is still being processed.
    #[error("another action is still being processed")]
    Busy,
}
