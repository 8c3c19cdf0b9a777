use std::fmt;
use std::path::PathBuf;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while loading a story.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// No story with this name exists in the stories directory.
    #[error("story '{0}' not found")]
    NotFound(String),

    /// The story file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The story file is empty.
    #[error("story file is empty")]
    Empty,

    /// The YAML is malformed or does not have the expected shape.
    #[error("error parsing story YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A condition record does not carry exactly one recognized kind.
    #[error("malformed condition in scene '{scene}', choice {choice}, condition {index}: {source}")]
    MalformedCondition {
        /// Scene that declares the choice.
        scene: String,
        /// Zero-based choice index within the scene.
        choice: usize,
        /// Zero-based condition index within the choice.
        index: usize,
        /// What was wrong with the record.
        source: TagError,
    },

    /// An effect record does not carry exactly one recognized kind.
    #[error("malformed effect in scene '{scene}', choice {choice}, effect {index}: {source}")]
    MalformedEffect {
        /// Scene that declares the choice.
        scene: String,
        /// Zero-based choice index within the scene.
        choice: usize,
        /// Zero-based effect index within the choice.
        index: usize,
        /// What was wrong with the record.
        source: TagError,
    },

    /// The story parsed but failed structural validation.
    #[error("story has validation errors:\n{}", format_issues(.0))]
    Validation(Vec<ValidationIssue>),
}

impl StoryError {
    /// Whether this error means the story data itself is corrupt, as opposed
    /// to a missing file or an I/O failure.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            StoryError::MalformedCondition { .. }
                | StoryError::MalformedEffect { .. }
                | StoryError::Validation(_)
        )
    }
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Why a condition or effect record could not be turned into a single kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// The record names no kind at all.
    #[error("no kind given")]
    Missing,

    /// The record names more than one kind.
    #[error("more than one kind given: {}", .0.join(", "))]
    Ambiguous(Vec<String>),

    /// The record uses keys outside the vocabulary.
    #[error("unrecognized kind: {}", .0.join(", "))]
    Unrecognized(Vec<String>),
}

/// A single structural problem found while validating a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The story declares no scenes.
    NoScenes,
    /// The start scene id does not name a scene.
    MissingStartScene(String),
    /// A choice leads to a scene that does not exist.
    DanglingChoice {
        /// Scene that declares the choice.
        scene: String,
        /// Zero-based choice index within the scene.
        choice: usize,
        /// The unknown target scene id.
        target: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::NoScenes => write!(f, "story has no scenes"),
            ValidationIssue::MissingStartScene(id) => {
                write!(f, "start_scene_id: scene '{id}' does not exist")
            }
            ValidationIssue::DanglingChoice {
                scene,
                choice,
                target,
            } => write!(
                f,
                "scenes.{scene}.choices.{choice}.next_scene_id: scene '{target}' does not exist"
            ),
        }
    }
}
