// Property-based tests for the instruction applier and continuity laws
use proptest::prelude::*;
use tallgrass_battle::types::default_side_conditions;
use tallgrass_battle::{
    BattleState, Combatant, Instruction, ResetMode, SideCondition, SideId, Stat, Weather, apply,
    resolve,
};

const ALL_STATS: [Stat; 7] = [
    Stat::Atk,
    Stat::Def,
    Stat::Spa,
    Stat::Spd,
    Stat::Spe,
    Stat::Accuracy,
    Stat::Evasion,
];

fn side_id() -> impl Strategy<Value = SideId> {
    prop_oneof![Just(SideId::User), Just(SideId::Opponent)]
}

fn stat() -> impl Strategy<Value = Stat> {
    prop::sample::select(ALL_STATS.to_vec())
}

fn battle_state() -> impl Strategy<Value = BattleState> {
    (
        1u32..400,
        0u32..400,
        1u32..400,
        0u32..400,
        -6i8..=6,
        0u8..=3,
        any::<bool>(),
        prop::option::of(prop::sample::select(vec![
            Weather::Sun,
            Weather::Rain,
            Weather::Sand,
        ])),
    )
        .prop_map(
            |(user_max, user_hp, opp_max, opp_hp, atk, spikes, trick_room, weather)| {
                let mut user = Combatant::new("pikachu", 50, user_max);
                user.hp = user_hp.min(user_max);
                user.boosts.atk = atk;

                let mut opponent = Combatant::new("geodude", 45, opp_max);
                opponent.hp = opp_hp.min(opp_max);

                let mut state = BattleState::new(user, opponent);
                state.opponent.add_condition(SideCondition::Spikes, spikes);
                state.field.trick_room = trick_room;
                state.field.weather = weather;
                state
            },
        )
}

fn instruction() -> impl Strategy<Value = Instruction> {
    prop_oneof![
        (side_id(), -100i32..500).prop_map(|(side, amount)| Instruction::Damage { side, amount }),
        (side_id(), -100i32..500).prop_map(|(side, amount)| Instruction::Heal { side, amount }),
        (side_id(), stat(), -12i8..=12)
            .prop_map(|(side, stat, amount)| Instruction::Boost { side, stat, amount }),
        (side_id(), 0u8..4).prop_map(|(side, amount)| Instruction::SideStart {
            side,
            condition: "spikes".to_string(),
            amount,
        }),
        Just(Instruction::ToggleTrickRoom),
    ]
}

proptest! {
    #[test]
    fn proptest_empty_instructions_are_identity(state in battle_state()) {
        prop_assert_eq!(apply(&state, &[]), state);
    }

    #[test]
    fn proptest_continue_without_instructions_is_identity(state in battle_state()) {
        let resolved = resolve(
            Some(&state),
            ResetMode::Continue,
            Combatant::new("pikachu", 50, 1),
            Combatant::new("onix", 40, 1),
            &default_side_conditions(),
        );
        prop_assert_eq!(apply(&resolved, &[]), state);
    }

    #[test]
    fn proptest_full_reset_always_clears(state in battle_state()) {
        let resolved = resolve(
            Some(&state),
            ResetMode::Full,
            Combatant::new("pikachu", 50, 100),
            Combatant::new("onix", 40, 100),
            &default_side_conditions(),
        );
        prop_assert_eq!(&resolved.user.conditions, &default_side_conditions());
        prop_assert_eq!(&resolved.opponent.conditions, &default_side_conditions());
        prop_assert!(!resolved.user.wish.is_active());
        prop_assert!(!resolved.opponent.future_sight.is_active());
        prop_assert!(!resolved.field.has_any_condition());
    }

    #[test]
    fn proptest_hp_and_boosts_stay_in_bounds(
        state in battle_state(),
        instructions in prop::collection::vec(instruction(), 0..30),
    ) {
        let next = apply(&state, &instructions);

        for side in [SideId::User, SideId::Opponent] {
            let mon = next.active(side);
            prop_assert!(mon.hp <= mon.max_hp);
            for stat in ALL_STATS {
                let stage = mon.boosts.get(stat);
                prop_assert!((-6..=6).contains(&stage));
            }
            prop_assert!(next.side(side).condition_count(SideCondition::Spikes) <= 3);
        }
    }

    #[test]
    fn proptest_apply_never_mutates_input(
        state in battle_state(),
        instructions in prop::collection::vec(instruction(), 0..30),
    ) {
        let before = state.clone();
        let _ = apply(&state, &instructions);
        prop_assert_eq!(state, before);
    }
}
