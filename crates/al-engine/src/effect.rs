//! Effect application. The only code path that changes stats, inventory,
//! or flags.

use al_story::Effect;
use tracing::trace;

use crate::state::PlayerState;

/// Apply a single effect in place.
pub fn apply(state: &mut PlayerState, effect: &Effect) {
    trace!(%effect, "applying effect");
    match effect {
        Effect::AddItem(item) => {
            state.insert_item(item);
        }
        Effect::RemoveItem(item) => {
            state.take_item(item);
        }
        Effect::SetFlag(name, value) => state.set_flag(name, *value),
        Effect::SetStat(name, value) => state.set_stat(name, *value),
        Effect::AddToStat(name, delta) => {
            let current = state.stat(name);
            state.set_stat(name, current.saturating_add(*delta));
        }
    }
}

/// Apply effects strictly in order; each sees the results of the previous.
pub fn apply_all(state: &mut PlayerState, effects: &[Effect]) {
    for effect in effects {
        apply(state, effect);
    }
}

#[cfg(test)]
mod tests {
    use al_story::{Condition, InitialState};
    use proptest::prelude::*;

    use super::*;
    use crate::condition::evaluate;

    fn fresh() -> PlayerState {
        PlayerState::new(&InitialState::default(), "start")
    }

    #[test]
    fn add_and_remove_item() {
        let mut state = fresh();
        apply(&mut state, &Effect::AddItem("sword".to_string()));
        assert!(state.has_item("sword"));

        apply(&mut state, &Effect::RemoveItem("sword".to_string()));
        assert!(!state.has_item("sword"));

        // removing again is a no-op
        apply(&mut state, &Effect::RemoveItem("sword".to_string()));
        assert!(state.inventory().is_empty());
    }

    #[test]
    fn set_flag_then_check() {
        let mut state = fresh();
        apply(&mut state, &Effect::SetFlag("door_open".to_string(), true));
        assert!(evaluate(
            &state,
            &Condition::FlagIs("door_open".to_string(), true)
        ));

        apply(&mut state, &Effect::SetFlag("door_open".to_string(), false));
        assert!(!state.flag("door_open"));
        assert_eq!(state.flags().get("door_open"), Some(&false));
    }

    #[test]
    fn set_and_add_to_stat() {
        let mut state = fresh();
        apply(&mut state, &Effect::AddToStat("gold".to_string(), 7));
        assert_eq!(state.stat("gold"), 7);

        apply(&mut state, &Effect::AddToStat("gold".to_string(), -10));
        assert_eq!(state.stat("gold"), -3);

        apply(&mut state, &Effect::SetStat("gold".to_string(), 100));
        assert_eq!(state.stat("gold"), 100);
    }

    #[test]
    fn add_to_stat_saturates() {
        let mut state = fresh();
        apply(&mut state, &Effect::SetStat("luck".to_string(), i64::MAX));
        apply(&mut state, &Effect::AddToStat("luck".to_string(), 1));
        assert_eq!(state.stat("luck"), i64::MAX);
    }

    #[test]
    fn later_effects_see_earlier_ones() {
        let mut state = fresh();
        apply_all(
            &mut state,
            &[
                Effect::SetStat("hp".to_string(), 10),
                Effect::AddToStat("hp".to_string(), -4),
                Effect::AddItem("bandage".to_string()),
                Effect::RemoveItem("bandage".to_string()),
            ],
        );
        assert_eq!(state.stat("hp"), 6);
        assert!(!state.has_item("bandage"));
    }

    proptest! {
        #[test]
        fn add_item_is_idempotent(item in "[a-z]{1,6}", start in prop::collection::hash_set("[a-z]{1,6}", 0..4)) {
            let initial = InitialState { inventory: start, ..Default::default() };
            let mut once = PlayerState::new(&initial, "start");
            apply(&mut once, &Effect::AddItem(item.clone()));
            let mut twice = once.clone();
            apply(&mut twice, &Effect::AddItem(item));
            prop_assert_eq!(once.inventory(), twice.inventory());
        }

        #[test]
        fn remove_after_add_restores_membership(item in "[a-z]{1,6}", present in any::<bool>()) {
            let mut initial = InitialState::default();
            if present {
                initial.inventory.insert(item.clone());
            }
            let mut state = PlayerState::new(&initial, "start");
            apply(&mut state, &Effect::AddItem(item.clone()));
            apply(&mut state, &Effect::RemoveItem(item.clone()));
            prop_assert!(!state.has_item(&item));
            if !present {
                prop_assert_eq!(state.inventory(), &initial.inventory);
            }
        }

        #[test]
        fn repeated_add_to_stat_sums(start in -1000i64..1000, a in -1000i64..1000, b in -1000i64..1000) {
            let initial = InitialState::default().with_stat("gold", start);
            let mut state = PlayerState::new(&initial, "start");
            apply(&mut state, &Effect::AddToStat("gold".to_string(), a));
            apply(&mut state, &Effect::AddToStat("gold".to_string(), b));
            prop_assert_eq!(state.stat("gold"), start + a + b);
        }
    }
}
