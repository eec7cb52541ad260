use tallgrass_protocol::SideId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TurnError>;

/// Failures inside one turn
///
/// Only [`TurnError::MissingCombatantData`] aborts a turn; the others are
/// recovered from and logged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TurnError {
    #[error("Missing {field} for {} combatant", side_label(.side))]
    MissingCombatantData {
        side: Option<SideId>,
        field: &'static str,
    },

    #[error("Oracle enumeration failed: {0}")]
    OracleEnumerationFailure(#[from] OracleError),

    #[error("Unrecognized instruction: {tag}")]
    UnrecognizedInstruction { tag: String },

    #[error("Degenerate branch probabilities: {0}")]
    DegenerateProbabilities(String),
}

impl TurnError {
    /// Attach the side a snapshot failure belongs to
    pub fn for_side(self, side: SideId) -> Self {
        match self {
            TurnError::MissingCombatantData { field, .. } => TurnError::MissingCombatantData {
                side: Some(side),
                field,
            },
            other => other,
        }
    }
}

fn side_label(side: &Option<SideId>) -> &'static str {
    side.map_or("unknown", |s| s.as_str())
}

/// Failures reported by an [`Oracle`](crate::engine::Oracle) implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Malformed oracle output: {0}")]
    Malformed(String),

    #[error("Oracle unavailable: {0}")]
    Unavailable(String),
}
