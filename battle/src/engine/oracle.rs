//! The outcome oracle boundary
//!
//! An oracle is any rules engine that, given both combatants, their moves
//! and the surrounding battle, enumerates every way the turn can play out
//! together with its probability. The engine never evaluates combat rules
//! itself.

use tallgrass_protocol::{OutcomeBranch, parse_branches_json};

use crate::error::OracleError;
use crate::state::BattleState;
use crate::types::{Combatant, FieldState, SideState};

/// Everything around the two active combatants that the oracle may consult
#[derive(Debug, Clone, Copy)]
pub struct Environment<'a> {
    pub field: &'a FieldState,
    pub user_side: &'a SideState,
    pub opponent_side: &'a SideState,
}

impl<'a> Environment<'a> {
    pub fn of(state: &'a BattleState) -> Self {
        Self {
            field: &state.field,
            user_side: &state.user,
            opponent_side: &state.opponent,
        }
    }
}

/// A rules engine enumerating probability-weighted outcome branches
pub trait Oracle {
    fn enumerate(
        &self,
        user: &Combatant,
        opponent: &Combatant,
        user_move: &str,
        opponent_move: &str,
        environment: &Environment<'_>,
    ) -> Result<Vec<OutcomeBranch>, OracleError>;
}

impl<O: Oracle + ?Sized> Oracle for &O {
    fn enumerate(
        &self,
        user: &Combatant,
        opponent: &Combatant,
        user_move: &str,
        opponent_move: &str,
        environment: &Environment<'_>,
    ) -> Result<Vec<OutcomeBranch>, OracleError> {
        (**self).enumerate(user, opponent, user_move, opponent_move, environment)
    }
}

impl<O: Oracle + ?Sized> Oracle for Box<O> {
    fn enumerate(
        &self,
        user: &Combatant,
        opponent: &Combatant,
        user_move: &str,
        opponent_move: &str,
        environment: &Environment<'_>,
    ) -> Result<Vec<OutcomeBranch>, OracleError> {
        (**self).enumerate(user, opponent, user_move, opponent_move, environment)
    }
}

/// Ask the oracle for branches, substituting a single no-op branch when it
/// fails or returns nothing. The error, if any, is handed back for logging.
pub fn enumerate_or_noop<O: Oracle + ?Sized>(
    oracle: &O,
    user: &Combatant,
    opponent: &Combatant,
    user_move: &str,
    opponent_move: &str,
    environment: &Environment<'_>,
) -> (Vec<OutcomeBranch>, Option<OracleError>) {
    match oracle.enumerate(user, opponent, user_move, opponent_move, environment) {
        Ok(branches) if !branches.is_empty() => (branches, None),
        Ok(_) => {
            tracing::warn!(user_move, opponent_move, "Oracle returned no branches, using no-op");
            (
                vec![OutcomeBranch::noop()],
                Some(OracleError::Malformed("no outcome branches".to_string())),
            )
        }
        Err(e) => {
            tracing::warn!(user_move, opponent_move, error = %e, "Oracle failed, using no-op");
            (vec![OutcomeBranch::noop()], Some(e))
        }
    }
}

/// An oracle that answers every call with the same recorded branches
///
/// Useful for replaying a captured oracle response or for driving turns in
/// tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedOracle {
    branches: Vec<OutcomeBranch>,
}

impl FixedOracle {
    pub fn new(branches: Vec<OutcomeBranch>) -> Self {
        Self { branches }
    }

    /// Load branches from the oracle's JSON encoding
    pub fn from_json(input: &str) -> Result<Self, OracleError> {
        parse_branches_json(input)
            .map(Self::new)
            .map_err(|e| OracleError::Malformed(format!("{:#}", e)))
    }

    pub fn branches(&self) -> &[OutcomeBranch] {
        &self.branches
    }
}

impl Oracle for FixedOracle {
    fn enumerate(
        &self,
        _user: &Combatant,
        _opponent: &Combatant,
        _user_move: &str,
        _opponent_move: &str,
        _environment: &Environment<'_>,
    ) -> Result<Vec<OutcomeBranch>, OracleError> {
        Ok(self.branches.clone())
    }
}

#[cfg(test)]
mod tests {
    use tallgrass_protocol::{Instruction, SideId};

    use super::*;

    struct Broken;

    impl Oracle for Broken {
        fn enumerate(
            &self,
            _user: &Combatant,
            _opponent: &Combatant,
            user_move: &str,
            _opponent_move: &str,
            _environment: &Environment<'_>,
        ) -> Result<Vec<OutcomeBranch>, OracleError> {
            Err(OracleError::UnknownMove(user_move.to_string()))
        }
    }

    fn call<O: Oracle + ?Sized>(oracle: &O) -> (Vec<OutcomeBranch>, Option<OracleError>) {
        let state = BattleState::default();
        enumerate_or_noop(
            oracle,
            &state.user.active,
            &state.opponent.active,
            "tackle",
            "growl",
            &Environment::of(&state),
        )
    }

    #[test]
    fn test_failure_falls_back_to_noop() {
        let (branches, error) = call(&Broken);
        assert_eq!(branches, vec![OutcomeBranch::noop()]);
        assert_eq!(error, Some(OracleError::UnknownMove("tackle".to_string())));
    }

    #[test]
    fn test_empty_result_falls_back_to_noop() {
        let (branches, error) = call(&FixedOracle::default());
        assert_eq!(branches, vec![OutcomeBranch::noop()]);
        assert!(matches!(error, Some(OracleError::Malformed(_))));
    }

    #[test]
    fn test_fixed_oracle_from_json() {
        let oracle = FixedOracle::from_json(
            r#"[{"percentage": 100.0, "instructions": [["damage", "user", 7]]}]"#,
        )
        .unwrap();

        let (branches, error) = call(&oracle);
        assert!(error.is_none());
        assert_eq!(
            branches[0].instructions,
            vec![Instruction::Damage {
                side: SideId::User,
                amount: 7
            }]
        );
    }

    #[test]
    fn test_fixed_oracle_rejects_bad_json() {
        assert!(matches!(
            FixedOracle::from_json("{"),
            Err(OracleError::Malformed(_))
        ));
    }

    #[test]
    fn test_boxed_oracle() {
        let oracle: Box<dyn Oracle> = Box::new(Broken);
        let (branches, error) = call(&oracle);
        assert_eq!(branches.len(), 1);
        assert!(error.is_some());
    }
}
