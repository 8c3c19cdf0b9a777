use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::condition::Condition;
use crate::effect::Effect;
use crate::error::{StoryError, StoryResult, ValidationIssue};
use crate::record::{ChoiceRecord, InitialStateRecord, SceneRecord, StoryRecord};

/// Identifier of a scene within a story.
pub type SceneId = String;

/// A complete, validated story.
///
/// Built once at load time and never mutated by play. Sessions clone the
/// [`InitialState`] template instead of borrowing it mutably.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryDocument {
    /// Story title, shown above every scene.
    pub title: String,
    /// Story author.
    pub author: String,
    /// Story version string.
    pub version: String,
    /// Id of the first scene.
    pub start_scene_id: SceneId,
    /// Template for the player's starting state.
    pub initial_state: InitialState,
    /// All scenes keyed by id.
    pub scenes: BTreeMap<SceneId, Scene>,
}

/// Starting values for a new session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialState {
    /// Starting stats.
    pub stats: HashMap<String, i64>,
    /// Starting items.
    pub inventory: HashSet<String>,
    /// Starting flags.
    pub flags: HashMap<String, bool>,
}

impl InitialState {
    /// Set a starting stat.
    pub fn with_stat(mut self, name: impl Into<String>, value: i64) -> Self {
        self.stats.insert(name.into(), value);
        self
    }

    /// Add a starting item.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.inventory.insert(item.into());
        self
    }

    /// Set a starting flag.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }
}

/// A single scene: text plus the choices leading out of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Scene text; may contain light Markdown.
    pub description: String,
    /// Choices in declaration order.
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with the given description and no choices.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            choices: Vec::new(),
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// A scene without choices ends the story.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }
}

/// A choice the player may take from a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Label shown to the player.
    pub text: String,
    /// Scene reached when this choice is taken.
    pub next_scene_id: SceneId,
    /// Conditions that must all hold for the choice to be offered.
    pub conditions: Vec<Condition>,
    /// Effects applied in order when the choice is taken.
    pub effects: Vec<Effect>,
}

impl Choice {
    /// Create an unconditional choice with no effects.
    pub fn new(text: impl Into<String>, next_scene_id: impl Into<SceneId>) -> Self {
        Self {
            text: text.into(),
            next_scene_id: next_scene_id.into(),
            conditions: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Add a condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

impl StoryDocument {
    /// Create an empty story starting at `start_scene_id`.
    pub fn new(title: impl Into<String>, start_scene_id: impl Into<SceneId>) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            version: String::new(),
            start_scene_id: start_scene_id.into(),
            initial_state: InitialState::default(),
            scenes: BTreeMap::new(),
        }
    }

    /// Set the initial state template.
    pub fn with_initial_state(mut self, initial_state: InitialState) -> Self {
        self.initial_state = initial_state;
        self
    }

    /// Add (or replace) a scene.
    pub fn with_scene(mut self, id: impl Into<SceneId>, scene: Scene) -> Self {
        self.scenes.insert(id.into(), scene);
        self
    }

    /// Parse, convert, and validate a story from YAML text.
    pub fn from_yaml_str(source: &str) -> StoryResult<Self> {
        if source.trim().is_empty() {
            return Err(StoryError::Empty);
        }
        let value: serde_yaml::Value = serde_yaml::from_str(source)?;
        if value.is_null() {
            return Err(StoryError::Empty);
        }
        let record: StoryRecord = serde_yaml::from_value(value)?;
        let story = Self::from_record(record)?;

        let issues = story.validate();
        if !issues.is_empty() {
            return Err(StoryError::Validation(issues));
        }
        Ok(story)
    }

    /// Convert raw records into the typed model, checking every condition
    /// and effect carries exactly one kind. Does not validate scene links.
    pub fn from_record(record: StoryRecord) -> StoryResult<Self> {
        let scenes = record
            .scenes
            .into_iter()
            .map(|(id, scene)| {
                let scene = convert_scene(&id, scene)?;
                Ok((id, scene))
            })
            .collect::<StoryResult<BTreeMap<_, _>>>()?;

        Ok(Self {
            title: record.title,
            author: record.author,
            version: record.version,
            start_scene_id: record.start_scene_id,
            initial_state: convert_initial_state(record.initial_state),
            scenes,
        })
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Check scene references. Returns every issue found; empty means valid.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.scenes.is_empty() {
            issues.push(ValidationIssue::NoScenes);
        }
        if !self.scenes.contains_key(&self.start_scene_id) {
            issues.push(ValidationIssue::MissingStartScene(
                self.start_scene_id.clone(),
            ));
        }

        for (id, scene) in &self.scenes {
            for (index, choice) in scene.choices.iter().enumerate() {
                if !self.scenes.contains_key(&choice.next_scene_id) {
                    issues.push(ValidationIssue::DanglingChoice {
                        scene: id.clone(),
                        choice: index,
                        target: choice.next_scene_id.clone(),
                    });
                }
            }
        }

        issues
    }

    /// Scenes that no chain of choices from the start scene can reach.
    ///
    /// Conditions are ignored, so a scene listed here is unreachable in
    /// every playthrough.
    pub fn unreachable_scenes(&self) -> Vec<&str> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        if self.scenes.contains_key(&self.start_scene_id) {
            queue.push_back(&self.start_scene_id);
        }
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(scene) = self.scenes.get(id) {
                for choice in &scene.choices {
                    if self.scenes.contains_key(&choice.next_scene_id) {
                        queue.push_back(&choice.next_scene_id);
                    }
                }
            }
        }

        self.scenes
            .keys()
            .map(String::as_str)
            .filter(|id| !seen.contains(id))
            .collect()
    }

    /// Ids of scenes without choices.
    pub fn terminal_scenes(&self) -> Vec<&str> {
        self.scenes
            .iter()
            .filter(|(_, scene)| scene.is_terminal())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Total number of choices across all scenes.
    pub fn choice_count(&self) -> usize {
        self.scenes.values().map(|s| s.choices.len()).sum()
    }
}

fn convert_initial_state(record: InitialStateRecord) -> InitialState {
    InitialState {
        stats: record.stats.into_iter().collect(),
        inventory: record.inventory.into_iter().collect(),
        flags: record.flags.into_iter().collect(),
    }
}

fn convert_scene(id: &str, record: SceneRecord) -> StoryResult<Scene> {
    let choices = record
        .choices
        .into_iter()
        .enumerate()
        .map(|(index, choice)| convert_choice(id, index, choice))
        .collect::<StoryResult<Vec<_>>>()?;

    Ok(Scene {
        description: record.description,
        choices,
    })
}

fn convert_choice(scene: &str, choice: usize, record: ChoiceRecord) -> StoryResult<Choice> {
    let conditions = record
        .conditions
        .into_iter()
        .enumerate()
        .map(|(index, cond)| {
            Condition::try_from(cond).map_err(|source| StoryError::MalformedCondition {
                scene: scene.to_string(),
                choice,
                index,
                source,
            })
        })
        .collect::<StoryResult<Vec<_>>>()?;

    let effects = record
        .effects
        .into_iter()
        .enumerate()
        .map(|(index, effect)| {
            Effect::try_from(effect).map_err(|source| StoryError::MalformedEffect {
                scene: scene.to_string(),
                choice,
                index,
                source,
            })
        })
        .collect::<StoryResult<Vec<_>>>()?;

    Ok(Choice {
        text: record.text,
        next_scene_id: record.next_scene_id,
        conditions,
        effects,
    })
}
