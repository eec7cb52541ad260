//! Outcome branches returned by the oracle

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::instruction::{Instruction, SideId};

/// One mutually exclusive way a turn can play out
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeBranch {
    /// Likelihood of this branch in percent (all branches of a turn sum to ~100)
    pub percentage: f64,
    /// Mutations realizing this branch, in application order
    pub instructions: Vec<Instruction>,
}

impl OutcomeBranch {
    pub fn new(percentage: f64, instructions: Vec<Instruction>) -> Self {
        Self {
            percentage,
            instructions,
        }
    }

    /// A certain branch that changes nothing
    pub fn noop() -> Self {
        Self::new(100.0, Vec::new())
    }

    /// Whether any instruction in this branch removes hp from `target`
    pub fn deals_damage_to(&self, target: SideId) -> bool {
        self.instructions.iter().any(|i| i.damages(target))
    }
}

#[derive(Deserialize)]
struct RawBranch {
    percentage: f64,
    #[serde(default)]
    instructions: Vec<Value>,
}

/// Parse a JSON array of `{"percentage": .., "instructions": [[tag, ..], ..]}` objects
pub fn parse_branches_json(input: &str) -> Result<Vec<OutcomeBranch>> {
    let raw: Vec<RawBranch> =
        serde_json::from_str(input).context("Failed to decode outcome branches")?;

    raw.into_iter()
        .enumerate()
        .map(|(index, branch)| {
            let instructions = branch
                .instructions
                .iter()
                .map(Instruction::from_json)
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("Invalid instruction in branch {}", index))?;
            Ok(OutcomeBranch::new(branch.percentage, instructions))
        })
        .collect()
}
