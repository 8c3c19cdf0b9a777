//! Record shapes exactly as authors write them in `story.yml`.
//!
//! A condition or effect is written as a single-key mapping such as
//! `{ has_item: key }` or `{ stat_gte: [strength, 10] }`. These records accept
//! any combination of keys so that the loader can report a precise
//! [`TagError`](crate::TagError) instead of a generic parse failure.

use std::collections::BTreeMap;

use serde::Deserialize;

/// The top-level story file.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryRecord {
    /// Story title.
    pub title: String,
    /// Story author.
    #[serde(default)]
    pub author: String,
    /// Story version string.
    #[serde(default)]
    pub version: String,
    /// Id of the first scene.
    pub start_scene_id: String,
    /// Initial player state.
    #[serde(default)]
    pub initial_state: InitialStateRecord,
    /// Scenes keyed by id.
    pub scenes: BTreeMap<String, SceneRecord>,
}

/// Initial player state as written in the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitialStateRecord {
    /// Starting stats.
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
    /// Starting items; duplicates collapse when loaded.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// Starting flags.
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
}

/// A scene as written in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneRecord {
    /// Scene text.
    #[serde(default)]
    pub description: String,
    /// Choices offered from this scene.
    #[serde(default)]
    pub choices: Vec<ChoiceRecord>,
}

/// A choice as written in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceRecord {
    /// Label shown to the player.
    pub text: String,
    /// Scene reached when the choice is taken.
    pub next_scene_id: String,
    /// Conditions that must all hold.
    #[serde(default)]
    pub conditions: Vec<ConditionRecord>,
    /// Effects applied in order.
    #[serde(default)]
    pub effects: Vec<EffectRecord>,
}

/// A condition with every kind optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionRecord {
    /// `has_item: <item>`
    pub has_item: Option<String>,
    /// `lacks_item: <item>`
    pub lacks_item: Option<String>,
    /// `flag_is: [<name>, <bool>]`
    pub flag_is: Option<(String, bool)>,
    /// `stat_equals: [<name>, <int>]`
    pub stat_equals: Option<(String, i64)>,
    /// `stat_gte: [<name>, <int>]`
    pub stat_gte: Option<(String, i64)>,
    /// `stat_lte: [<name>, <int>]`
    pub stat_lte: Option<(String, i64)>,
    /// Keys outside the vocabulary.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_yaml::Value>,
}

/// An effect with every kind optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EffectRecord {
    /// `add_item: <item>`
    pub add_item: Option<String>,
    /// `remove_item: <item>`
    pub remove_item: Option<String>,
    /// `set_flag: [<name>, <bool>]`
    pub set_flag: Option<(String, bool)>,
    /// `set_stat: [<name>, <int>]`
    pub set_stat: Option<(String, i64)>,
    /// `add_to_stat: [<name>, <int>]`
    pub add_to_stat: Option<(String, i64)>,
    /// Keys outside the vocabulary.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_yaml::Value>,
}
