//! Configuration for a play session.

/// Message shown when no choice in the current scene is available.
pub const DEFAULT_STUCK_MESSAGE: &str =
    "You are stuck and can't find a way to proceed. Your adventure ends here.";

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Closing text when every choice of a scene is filtered out.
    pub stuck_message: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stuck_message: DEFAULT_STUCK_MESSAGE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Set the stuck message.
    pub fn with_stuck_message(mut self, message: impl Into<String>) -> Self {
        self.stuck_message = message.into();
        self
    }
}
