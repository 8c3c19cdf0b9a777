//! Error types for the engine.

use al_story::StoryError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can end a session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The current scene id does not name a scene in the story.
    #[error("scene '{0}' not found in story")]
    SceneNotFound(String),

    /// The presenter returned an index outside the offered choices.
    #[error("invalid choice {index}: only {available} available")]
    InvalidSelection {
        /// Index returned by the presenter.
        index: usize,
        /// Number of choices that were offered.
        available: usize,
    },

    /// The player aborted input.
    #[error("input interrupted")]
    Interrupted,

    /// Corrupt story data.
    #[error(transparent)]
    Story(#[from] StoryError),
}

impl EngineError {
    /// Whether the error means the story data is broken.
    pub fn is_integrity(&self) -> bool {
        match self {
            EngineError::SceneNotFound(_) => true,
            EngineError::Story(err) => err.is_integrity(),
            EngineError::InvalidSelection { .. } | EngineError::Interrupted => false,
        }
    }
}
