//! Condition evaluation against player state.

use al_story::Condition;

use crate::state::PlayerState;

/// Evaluate a single condition. Pure: never touches `state`.
pub fn evaluate(state: &PlayerState, condition: &Condition) -> bool {
    match condition {
        Condition::HasItem(item) => state.has_item(item),
        Condition::LacksItem(item) => !state.has_item(item),
        Condition::FlagIs(name, value) => state.flag(name) == *value,
        Condition::StatEquals(name, value) => state.stat(name) == *value,
        Condition::StatGte(name, value) => state.stat(name) >= *value,
        Condition::StatLte(name, value) => state.stat(name) <= *value,
    }
}

/// Whether every condition holds. An empty list always holds.
pub fn all_hold(state: &PlayerState, conditions: &[Condition]) -> bool {
    conditions.iter().all(|c| evaluate(state, c))
}

#[cfg(test)]
mod tests {
    use al_story::InitialState;
    use proptest::prelude::*;

    use super::*;

    fn state_with(initial: InitialState) -> PlayerState {
        PlayerState::new(&initial, "start")
    }

    #[test]
    fn has_and_lacks_item() {
        let state = state_with(InitialState::default().with_item("key"));
        assert!(evaluate(&state, &Condition::HasItem("key".to_string())));
        assert!(!evaluate(&state, &Condition::LacksItem("key".to_string())));
        assert!(!evaluate(&state, &Condition::HasItem("lamp".to_string())));
        assert!(evaluate(&state, &Condition::LacksItem("lamp".to_string())));
    }

    #[test]
    fn flag_defaults_to_false() {
        let state = state_with(InitialState::default());
        assert!(evaluate(
            &state,
            &Condition::FlagIs("door_open".to_string(), false)
        ));
        assert!(!evaluate(
            &state,
            &Condition::FlagIs("door_open".to_string(), true)
        ));
    }

    #[test]
    fn stat_comparisons() {
        let state = state_with(InitialState::default().with_stat("strength", 5));
        let s = "strength".to_string();
        assert!(evaluate(&state, &Condition::StatEquals(s.clone(), 5)));
        assert!(!evaluate(&state, &Condition::StatEquals(s.clone(), 4)));
        assert!(evaluate(&state, &Condition::StatGte(s.clone(), 5)));
        assert!(!evaluate(&state, &Condition::StatGte(s.clone(), 6)));
        assert!(evaluate(&state, &Condition::StatLte(s.clone(), 5)));
        assert!(!evaluate(&state, &Condition::StatLte(s, 4)));
    }

    #[test]
    fn absent_stat_reads_as_zero() {
        let state = state_with(InitialState::default());
        assert!(!evaluate(&state, &Condition::StatGte("gold".to_string(), 10)));
        assert!(evaluate(&state, &Condition::StatEquals("gold".to_string(), 0)));
        assert!(evaluate(&state, &Condition::StatLte("gold".to_string(), 0)));
    }

    #[test]
    fn all_hold_is_conjunction() {
        let state = state_with(
            InitialState::default()
                .with_item("key")
                .with_stat("strength", 5),
        );
        assert!(all_hold(&state, &[]));
        assert!(all_hold(
            &state,
            &[
                Condition::HasItem("key".to_string()),
                Condition::StatGte("strength".to_string(), 5),
            ]
        ));
        assert!(!all_hold(
            &state,
            &[
                Condition::HasItem("key".to_string()),
                Condition::StatGte("strength".to_string(), 6),
            ]
        ));
    }

    fn arb_state() -> impl Strategy<Value = PlayerState> {
        (
            prop::collection::hash_map("[a-c]", -20i64..20, 0..3),
            prop::collection::hash_set("[a-c]", 0..3),
            prop::collection::hash_map("[a-c]", any::<bool>(), 0..3),
        )
            .prop_map(|(stats, inventory, flags)| {
                let initial = InitialState {
                    stats,
                    inventory,
                    flags,
                };
                PlayerState::new(&initial, "start")
            })
    }

    fn arb_condition() -> impl Strategy<Value = Condition> {
        prop_oneof![
            "[a-c]".prop_map(Condition::HasItem),
            "[a-c]".prop_map(Condition::LacksItem),
            ("[a-c]", any::<bool>()).prop_map(|(n, v)| Condition::FlagIs(n, v)),
            ("[a-c]", -20i64..20).prop_map(|(n, v)| Condition::StatEquals(n, v)),
            ("[a-c]", -20i64..20).prop_map(|(n, v)| Condition::StatGte(n, v)),
            ("[a-c]", -20i64..20).prop_map(|(n, v)| Condition::StatLte(n, v)),
        ]
    }

    proptest! {
        #[test]
        fn evaluation_is_deterministic_and_pure(state in arb_state(), cond in arb_condition()) {
            let before = state.clone();
            let first = evaluate(&state, &cond);
            let second = evaluate(&state, &cond);
            prop_assert_eq!(first, second);
            prop_assert_eq!(state, before);
        }

        #[test]
        fn lacks_item_negates_has_item(state in arb_state(), item in "[a-d]") {
            prop_assert_eq!(
                evaluate(&state, &Condition::LacksItem(item.clone())),
                !evaluate(&state, &Condition::HasItem(item))
            );
        }

        #[test]
        fn empty_condition_list_always_holds(state in arb_state()) {
            prop_assert!(all_hold(&state, &[]));
        }

        #[test]
        fn all_hold_ignores_order(
            state in arb_state(),
            mut conds in prop::collection::vec(arb_condition(), 0..5),
        ) {
            let forward = all_hold(&state, &conds);
            conds.reverse();
            prop_assert_eq!(forward, all_hold(&state, &conds));
        }
    }
}
