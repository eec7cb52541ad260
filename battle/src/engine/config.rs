//! Tunables for turns and sessions

use crate::types::{EvSpread, Nature, SideConditions, default_side_conditions};

/// Defaults filled in for combatant records that leave them unset
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapshotDefaults {
    pub nature: Nature,
    pub evs: EvSpread,
}

impl Default for SnapshotDefaults {
    fn default() -> Self {
        Self {
            nature: Nature::Serious,
            evs: EvSpread::uniform(85),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TurnConfig {
    pub snapshot: SnapshotDefaults,

    /// Condition counters a freshly built side starts with
    pub default_conditions: SideConditions,

    /// Used when a combatant knows no moves
    pub fallback_move: String,

    /// Used by both sides once the opponent has already fainted
    pub idle_move: String,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            snapshot: SnapshotDefaults::default(),
            default_conditions: default_side_conditions(),
            fallback_move: "struggle".to_string(),
            idle_move: "splash".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Reviews between two turns
    pub cards_per_round: u32,
    pub turn: TurnConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cards_per_round: 2,
            turn: TurnConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.cards_per_round, 2);
        assert_eq!(config.turn.fallback_move, "struggle");
        assert_eq!(config.turn.idle_move, "splash");
        assert_eq!(config.turn.snapshot.nature, Nature::Serious);
        assert_eq!(config.turn.snapshot.evs, EvSpread::uniform(85));
        assert_eq!(config.turn.default_conditions.len(), 8);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"cards_per_round": 5}"#).unwrap();
        assert_eq!(config.cards_per_round, 5);
        assert_eq!(config.turn, TurnConfig::default());
    }
}
