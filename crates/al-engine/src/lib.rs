//! Interactive fiction engine for Adventure Lite.
//!
//! Drives a [`StoryDocument`](al_story::StoryDocument) turn by turn: the
//! [`Session`] resolves the current scene, filters its choices through the
//! condition evaluator, hands them to a [`Presenter`], applies the chosen
//! choice's effects, and moves on until the story ends or the player is
//! stuck.

/// Session configuration.
pub mod config;
/// Condition evaluation.
pub mod condition;
/// Effect application.
pub mod effect;
/// Error types for the engine.
pub mod error;
/// The presentation boundary.
pub mod presenter;
/// Interactive fiction session and turn loop.
pub mod session;
/// Player state.
pub mod state;

pub use condition::{all_hold, evaluate};
pub use config::SessionConfig;
pub use effect::{apply, apply_all};
pub use error::{EngineError, EngineResult};
pub use presenter::Presenter;
pub use session::{Outcome, Session, SessionStatus};
pub use state::PlayerState;
