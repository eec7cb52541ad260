//! BattleState - the full state handed to the oracle each turn

use tallgrass_protocol::SideId;

use crate::types::{Combatant, FieldState, SideState};

/// Both sides of a single battle plus the shared field
///
/// Value type: a turn never mutates the state it was given, it produces a
/// new one. Between turns exactly one of these is checked in with the
/// caller's [`BattleSession`](crate::BattleSession).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub user: SideState,
    pub opponent: SideState,
    pub field: FieldState,
}

impl BattleState {
    /// A fresh battle between two combatants: default conditions, clear field
    pub fn new(user: Combatant, opponent: Combatant) -> Self {
        Self {
            user: SideState::new(user),
            opponent: SideState::new(opponent),
            field: FieldState::new(),
        }
    }

    /// Get a side by id
    pub fn side(&self, side: SideId) -> &SideState {
        match side {
            SideId::User => &self.user,
            SideId::Opponent => &self.opponent,
        }
    }

    /// Get a side mutably by id
    pub fn side_mut(&mut self, side: SideId) -> &mut SideState {
        match side {
            SideId::User => &mut self.user,
            SideId::Opponent => &mut self.opponent,
        }
    }

    /// The active combatant of a side
    pub fn active(&self, side: SideId) -> &Combatant {
        &self.side(side).active
    }

    /// The active combatant of a side, mutably
    pub fn active_mut(&mut self, side: SideId) -> &mut Combatant {
        &mut self.side_mut(side).active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_battle() {
        let battle = BattleState::new(
            Combatant::new("pikachu", 50, 110),
            Combatant::new("eevee", 48, 120),
        );

        assert_eq!(battle.active(SideId::User).identity.species, "pikachu");
        assert_eq!(battle.active(SideId::Opponent).identity.species, "eevee");
        assert!(!battle.field.has_any_condition());
    }

    #[test]
    fn test_side_mut_targets_the_right_side() {
        let mut battle = BattleState::new(
            Combatant::new("pikachu", 50, 110),
            Combatant::new("eevee", 48, 120),
        );

        battle.active_mut(SideId::Opponent).take_damage(20);
        assert_eq!(battle.opponent.active.hp, 100);
        assert_eq!(battle.user.active.hp, 110);
    }
}
