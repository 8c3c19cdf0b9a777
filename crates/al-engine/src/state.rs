//! Player state management.

use std::collections::{HashMap, HashSet};

use al_story::{InitialState, SceneId};

/// The player's state in a session.
///
/// Readers see defaults for anything never set: stats read as 0, flags as
/// `false`. Only the effect applier changes stats, inventory, and flags; only
/// the session moves the scene pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    stats: HashMap<String, i64>,
    inventory: HashSet<String>,
    flags: HashMap<String, bool>,
    current_scene: SceneId,
}

impl PlayerState {
    /// Create a state from a story's template, positioned at `start`.
    ///
    /// The template is cloned, so play never writes back into the story.
    pub fn new(initial: &InitialState, start: impl Into<SceneId>) -> Self {
        Self {
            stats: initial.stats.clone(),
            inventory: initial.inventory.clone(),
            flags: initial.flags.clone(),
            current_scene: start.into(),
        }
    }

    /// Current value of a stat (0 if never set).
    pub fn stat(&self, name: &str) -> i64 {
        self.stats.get(name).copied().unwrap_or(0)
    }

    /// Current value of a flag (`false` if never set).
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    /// All stats that have been set.
    pub fn stats(&self) -> &HashMap<String, i64> {
        &self.stats
    }

    /// Items currently carried.
    pub fn inventory(&self) -> &HashSet<String> {
        &self.inventory
    }

    /// All flags that have been set.
    pub fn flags(&self) -> &HashMap<String, bool> {
        &self.flags
    }

    /// Id of the scene the player is in.
    pub fn current_scene(&self) -> &str {
        &self.current_scene
    }

    pub(crate) fn set_current_scene(&mut self, scene: impl Into<SceneId>) {
        self.current_scene = scene.into();
    }

    pub(crate) fn insert_item(&mut self, item: &str) -> bool {
        self.inventory.insert(item.to_string())
    }

    pub(crate) fn take_item(&mut self, item: &str) -> bool {
        self.inventory.remove(item)
    }

    pub(crate) fn set_flag(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }

    pub(crate) fn set_stat(&mut self, name: &str, value: i64) {
        self.stats.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_read_as_defaults() {
        let state = PlayerState::new(&InitialState::default(), "start");
        assert_eq!(state.stat("gold"), 0);
        assert!(!state.flag("door_open"));
        assert!(!state.has_item("sword"));
        assert_eq!(state.current_scene(), "start");
    }

    #[test]
    fn starts_from_template() {
        let initial = InitialState::default()
            .with_stat("strength", 5)
            .with_item("torch")
            .with_flag("awake", true);
        let state = PlayerState::new(&initial, "start");
        assert_eq!(state.stat("strength"), 5);
        assert!(state.has_item("torch"));
        assert!(state.flag("awake"));
    }

    #[test]
    fn mutation_does_not_touch_template() {
        let initial = InitialState::default()
            .with_stat("strength", 5)
            .with_item("torch");
        let snapshot = initial.clone();

        let mut state = PlayerState::new(&initial, "start");
        state.set_stat("strength", 1);
        state.take_item("torch");
        state.set_flag("burned", true);

        assert_eq!(initial, snapshot);
        assert_eq!(state.stat("strength"), 1);
        assert!(!state.has_item("torch"));
    }

    #[test]
    fn inventory_is_a_set() {
        let mut state = PlayerState::new(&InitialState::default(), "start");
        assert!(state.insert_item("rope"));
        assert!(!state.insert_item("rope"));
        assert_eq!(state.inventory().len(), 1);
        assert!(state.take_item("rope"));
        assert!(!state.take_item("rope"));
    }
}
