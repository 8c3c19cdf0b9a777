//! Interactive fiction session and the scene-transition loop.

use al_story::{Choice, Scene, StoryDocument};
use tracing::{debug, info, warn};

use crate::condition::all_hold;
use crate::config::SessionConfig;
use crate::effect::apply_all;
use crate::error::{EngineError, EngineResult};
use crate::presenter::Presenter;
use crate::state::PlayerState;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A terminal scene was reached.
    Completed,
    /// Every choice of the current scene was filtered out.
    Stuck,
    /// The story data turned out to be broken, or the presenter misbehaved.
    Failed,
    /// The player aborted input.
    Aborted,
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Turns are still being played.
    Playing,
    /// The session is over; no further scenes are resolved.
    Ended(Outcome),
}

/// A single playthrough of a story.
///
/// The session borrows the story read-only and owns the only mutable
/// [`PlayerState`].
pub struct Session<'a> {
    story: &'a StoryDocument,
    config: SessionConfig,
    state: PlayerState,
    status: SessionStatus,
    turns: u32,
    error: Option<EngineError>,
}

impl<'a> Session<'a> {
    /// Start a session at the story's start scene.
    pub fn new(story: &'a StoryDocument) -> Self {
        Self::with_config(story, SessionConfig::default())
    }

    /// Start a session with a custom configuration.
    pub fn with_config(story: &'a StoryDocument, config: SessionConfig) -> Self {
        info!(title = %story.title, start = %story.start_scene_id, "starting session");
        Self {
            story,
            config,
            state: PlayerState::new(&story.initial_state, story.start_scene_id.clone()),
            status: SessionStatus::Playing,
            turns: 0,
            error: None,
        }
    }

    /// The story being played.
    pub fn story(&self) -> &'a StoryDocument {
        self.story
    }

    /// The player's current state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Current lifecycle status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Number of choices taken so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The error that ended the session, if it failed.
    pub fn error(&self) -> Option<&EngineError> {
        self.error.as_ref()
    }

    /// Resolve the current scene.
    pub fn current_scene(&self) -> EngineResult<&'a Scene> {
        let id = self.state.current_scene();
        self.story
            .scene(id)
            .ok_or_else(|| EngineError::SceneNotFound(id.to_string()))
    }

    /// Choices of the current scene whose conditions all hold, in
    /// declaration order.
    pub fn available_choices(&self) -> EngineResult<Vec<&'a Choice>> {
        let scene = self.current_scene()?;
        Ok(scene
            .choices
            .iter()
            .filter(|choice| all_hold(&self.state, &choice.conditions))
            .collect())
    }

    /// Take the available choice at `index`: apply its effects in order,
    /// then move to its next scene.
    pub fn choose(&mut self, index: usize) -> EngineResult<()> {
        let available = self.available_choices()?;
        let choice = available
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidSelection {
                index,
                available: available.len(),
            })?;

        apply_all(&mut self.state, &choice.effects);

        debug!(
            from = %self.state.current_scene(),
            to = %choice.next_scene_id,
            turn = self.turns + 1,
            "taking choice"
        );
        self.state.set_current_scene(choice.next_scene_id.clone());
        self.turns += 1;
        Ok(())
    }

    /// Play one turn. Does nothing once the session has ended.
    ///
    /// Errors never escape: a fatal error is reported through
    /// [`Presenter::present_error`] and ends the session as
    /// [`Outcome::Failed`]; an interruption ends it as [`Outcome::Aborted`].
    pub fn step(&mut self, presenter: &mut dyn Presenter) -> SessionStatus {
        if self.status != SessionStatus::Playing {
            return self.status;
        }

        match self.turn(presenter) {
            Ok(Some(outcome)) => self.end(outcome),
            Ok(None) => {}
            Err(EngineError::Interrupted) => {
                info!(turns = self.turns, "session interrupted");
                self.end(Outcome::Aborted);
            }
            Err(err) => {
                warn!(error = %err, scene = %self.state.current_scene(), "session failed");
                presenter.present_error(&err.to_string());
                self.error = Some(err);
                self.end(Outcome::Failed);
            }
        }
        self.status
    }

    /// Play turns until the session ends.
    pub fn run(&mut self, presenter: &mut dyn Presenter) -> Outcome {
        loop {
            if let SessionStatus::Ended(outcome) = self.step(presenter) {
                return outcome;
            }
        }
    }

    /// Throw away all progress and start again from the story's template.
    pub fn restart(&mut self) {
        info!(title = %self.story.title, "restarting session");
        self.state = PlayerState::new(
            &self.story.initial_state,
            self.story.start_scene_id.clone(),
        );
        self.status = SessionStatus::Playing;
        self.turns = 0;
        self.error = None;
    }

    fn turn(&mut self, presenter: &mut dyn Presenter) -> EngineResult<Option<Outcome>> {
        let scene = self.current_scene()?;
        presenter.present_scene(&scene.description, &self.story.title);

        if scene.is_terminal() {
            presenter.present_ending(&scene.description);
            return Ok(Some(Outcome::Completed));
        }

        let available = self.available_choices()?;
        if available.is_empty() {
            info!(scene = %self.state.current_scene(), "no available choices");
            presenter.present_ending(&self.config.stuck_message);
            return Ok(Some(Outcome::Stuck));
        }

        let index = presenter.present_choices(&available)?;
        self.choose(index)?;
        Ok(None)
    }

    fn end(&mut self, outcome: Outcome) {
        info!(?outcome, turns = self.turns, "session ended");
        self.status = SessionStatus::Ended(outcome);
    }
}
