//! Applying a branch's instructions to a battle state

use tallgrass_protocol::{Instruction, to_id};

use crate::error::TurnError;
use crate::state::BattleState;
use crate::types::{
    Countdown, FUTURE_SIGHT_TURNS, SideCondition, Status, Terrain, Volatile, WISH_TURNS, Weather,
};

/// Apply `instructions` in order to a copy of `state`.
///
/// `state` itself is left untouched. Instructions that cannot be applied are
/// logged and skipped; the rest still run.
pub fn apply(state: &BattleState, instructions: &[Instruction]) -> BattleState {
    let mut next = state.clone();

    for (index, instruction) in instructions.iter().enumerate() {
        if let Err(e) = apply_instruction(&mut next, instruction) {
            tracing::warn!(index, instruction = %instruction, error = %e, "Skipping instruction");
        }
    }

    next
}

/// Apply one instruction in place
pub fn apply_instruction(
    state: &mut BattleState,
    instruction: &Instruction,
) -> Result<(), TurnError> {
    match instruction {
        // === HP ===
        // Negative amounts flip direction: a negative heal is an hp cost
        Instruction::Damage { side, amount } => {
            let target = state.active_mut(*side);
            if *amount >= 0 {
                target.take_damage(amount.unsigned_abs());
            } else {
                target.heal(amount.unsigned_abs());
            }
        }

        Instruction::Heal { side, amount } => {
            let target = state.active_mut(*side);
            if *amount >= 0 {
                target.heal(amount.unsigned_abs());
            } else {
                target.take_damage(amount.unsigned_abs());
            }
        }

        // === Status ===
        Instruction::ApplyStatus { side, status } => {
            let parsed = Status::from_protocol(status).ok_or_else(|| unrecognized(instruction))?;
            state.active_mut(*side).status = Some(parsed);
        }

        Instruction::RemoveStatus { side, status: _ } => {
            state.active_mut(*side).status = None;
        }

        // === Boosts ===
        Instruction::Boost { side, stat, amount } => {
            state.active_mut(*side).boosts.boost(*stat, *amount);
        }

        // === Volatiles ===
        Instruction::ApplyVolatileStatus { side, volatile } => {
            state
                .active_mut(*side)
                .add_volatile(Volatile::from_protocol(volatile));
        }

        Instruction::RemoveVolatileStatus { side, volatile } => {
            state
                .active_mut(*side)
                .remove_volatile(&Volatile::from_protocol(volatile));
        }

        // === Side conditions ===
        Instruction::SideStart {
            side,
            condition,
            amount,
        } => {
            let cond =
                SideCondition::from_protocol(condition).ok_or_else(|| unrecognized(instruction))?;
            state.side_mut(*side).add_condition(cond, *amount);
        }

        Instruction::SideEnd {
            side,
            condition,
            amount,
        } => {
            let cond =
                SideCondition::from_protocol(condition).ok_or_else(|| unrecognized(instruction))?;
            state.side_mut(*side).remove_condition(cond, *amount);
        }

        // === Field ===
        Instruction::WeatherStart { weather, .. } => {
            state.field.weather = if is_none(weather) {
                None
            } else {
                Some(Weather::from_protocol(weather).ok_or_else(|| unrecognized(instruction))?)
            };
        }

        Instruction::FieldStart { field, .. } => {
            state.field.terrain = if is_none(field) {
                None
            } else {
                Some(Terrain::from_protocol(field).ok_or_else(|| unrecognized(instruction))?)
            };
        }

        Instruction::FieldEnd { field } => {
            if !is_none(field) {
                Terrain::from_protocol(field).ok_or_else(|| unrecognized(instruction))?;
            }
            state.field.terrain = None;
        }

        Instruction::ToggleTrickRoom => {
            state.field.trick_room = !state.field.trick_room;
        }

        // === Delayed effects ===
        Instruction::WishStart { side, amount } => {
            state.side_mut(*side).wish = Countdown::new(WISH_TURNS, *amount);
        }

        Instruction::WishDecrement { side } => {
            state.side_mut(*side).wish.tick();
        }

        Instruction::FutureSightStart { side, amount } => {
            state.side_mut(*side).future_sight = Countdown::new(FUTURE_SIGHT_TURNS, *amount);
        }

        Instruction::FutureSightDecrement { side } => {
            state.side_mut(*side).future_sight.tick();
        }

        Instruction::Other { tag, .. } => {
            return Err(TurnError::UnrecognizedInstruction { tag: tag.clone() });
        }
    }

    Ok(())
}

fn is_none(name: &str) -> bool {
    to_id(name) == "none"
}

fn unrecognized(instruction: &Instruction) -> TurnError {
    TurnError::UnrecognizedInstruction {
        tag: instruction.to_wire_format(),
    }
}
