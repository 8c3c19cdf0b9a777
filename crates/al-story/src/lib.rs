//! Story documents for Adventure Lite.
//!
//! This crate defines the read-only data model a story compiles into: scenes,
//! choices, and the fixed condition/effect vocabulary. It also owns the YAML
//! loader, which turns the loose on-disk records into the typed model and
//! rejects structurally broken stories before any session starts.

/// Conditions that gate a choice.
pub mod condition;
/// Effects applied when a choice is taken.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// Story discovery and loading from a stories directory.
pub mod loader;
/// On-disk record shapes, before tag checking.
pub mod record;
/// The story document: metadata, scenes, and choices.
pub mod story;

/// Re-export the condition vocabulary.
pub use condition::Condition;
/// Re-export the effect vocabulary.
pub use effect::Effect;
/// Re-export error types.
pub use error::{StoryError, StoryResult, TagError, ValidationIssue};
/// Re-export loader entry points.
pub use loader::{DEFAULT_STORIES_DIR, STORY_FILE_NAME, discover_stories, load_story, load_story_file};
/// Re-export story model types.
pub use story::{Choice, InitialState, Scene, SceneId, StoryDocument};
