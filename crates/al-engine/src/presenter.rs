//! The presentation boundary between the turn loop and a front end.

use al_story::Choice;

use crate::error::EngineResult;

/// Everything the session needs from a user interface.
///
/// Implementations own input validation: [`present_choices`] should keep
/// asking until it has an index in `0..choices.len()`, and report an aborted
/// input as [`EngineError::Interrupted`](crate::EngineError::Interrupted).
///
/// [`present_choices`]: Presenter::present_choices
pub trait Presenter {
    /// Show a scene's text under the story title.
    fn present_scene(&mut self, description: &str, title: &str);

    /// Offer the available choices and block until one is picked.
    fn present_choices(&mut self, choices: &[&Choice]) -> EngineResult<usize>;

    /// Show a closing message: the final scene's text, or the stuck message.
    fn present_ending(&mut self, message: &str);

    /// Report a fatal error.
    fn present_error(&mut self, message: &str);
}
