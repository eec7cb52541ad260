//! Observable turn deltas: hp changes and missed moves
//!
//! Miss detection is a heuristic. A side's move counts as missed when the
//! chosen branch deals no damage to its target while some branch of the
//! same turn does. A move that could never deal damage this turn (a pure
//! status move) is therefore never a miss. Moves whose only damage is
//! incidental, such as recoil-only branches, can be misclassified.
//!
//! Flags are keyed by the attacker: `user_missed` means the user's move
//! failed to damage the opponent, `opponent_missed` the reverse.

use tallgrass_protocol::{OutcomeBranch, SideId};

use crate::state::BattleState;

/// What changed for each side during one turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnDelta {
    /// HP the user lost (negative when healed)
    pub user_hp_delta: i64,
    /// HP the opponent lost (negative when healed)
    pub opponent_hp_delta: i64,
    pub user_missed: bool,
    pub opponent_missed: bool,
}

pub fn extract(
    pre: &BattleState,
    post: &BattleState,
    all_branches: &[OutcomeBranch],
    chosen: &OutcomeBranch,
) -> TurnDelta {
    TurnDelta {
        user_hp_delta: hp_delta(pre, post, SideId::User),
        opponent_hp_delta: hp_delta(pre, post, SideId::Opponent),
        user_missed: missed(all_branches, chosen, SideId::User),
        opponent_missed: missed(all_branches, chosen, SideId::Opponent),
    }
}

fn hp_delta(pre: &BattleState, post: &BattleState, side: SideId) -> i64 {
    pre.active(side).hp as i64 - post.active(side).hp as i64
}

/// Whether `attacker`'s move missed: its target is the other side
fn missed(all_branches: &[OutcomeBranch], chosen: &OutcomeBranch, attacker: SideId) -> bool {
    let target = attacker.opposite();
    let could_hit = all_branches.iter().any(|b| b.deals_damage_to(target));
    could_hit && !chosen.deals_damage_to(target)
}
