//! State continuity between turns
//!
//! Every turn starts from a state built by one of three policies. Which
//! policy applies is decided by the caller from what happened last turn
//! (see [`BattleSession`](crate::BattleSession)); it is never stored in the
//! state itself.

use crate::state::BattleState;
use crate::types::{Combatant, FieldState, SideConditions, SideState};

/// How much of the prior state a turn keeps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResetMode {
    /// Start over: fresh sides, default conditions, clear field
    #[default]
    Full,
    /// Keep the user side and the field, bring in a fresh opponent
    CarryUser,
    /// Keep everything
    Continue,
}

impl ResetMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetMode::Full => "full",
            ResetMode::CarryUser => "carry_user",
            ResetMode::Continue => "continue",
        }
    }
}

impl std::fmt::Display for ResetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the state a turn starts from.
///
/// A missing prior always yields a full reset, whatever `mode` asks for.
pub fn resolve(
    prior: Option<&BattleState>,
    mode: ResetMode,
    fresh_user: Combatant,
    fresh_opponent: Combatant,
    default_conditions: &SideConditions,
) -> BattleState {
    let fresh_side = |active| SideState::with_conditions(active, default_conditions.clone());

    match (prior, mode) {
        (Some(prior), ResetMode::Continue) => prior.clone(),
        (Some(prior), ResetMode::CarryUser) => BattleState {
            user: prior.user.clone(),
            opponent: fresh_side(fresh_opponent),
            field: prior.field.clone(),
        },
        (None, ResetMode::CarryUser | ResetMode::Continue) => {
            tracing::debug!(requested = %mode, "No prior battle state, starting fresh");
            full(fresh_side(fresh_user), fresh_side(fresh_opponent))
        }
        (_, ResetMode::Full) => full(fresh_side(fresh_user), fresh_side(fresh_opponent)),
    }
}

fn full(user: SideState, opponent: SideState) -> BattleState {
    BattleState {
        user,
        opponent,
        field: FieldState::new(),
    }
}
