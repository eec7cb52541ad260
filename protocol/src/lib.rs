use thiserror::Error;

pub mod branch;
pub mod instruction;
pub mod names;

pub use branch::{OutcomeBranch, parse_branches_json};
pub use instruction::{Instruction, SideId, Stat, parse_instruction, parse_instruction_parts};
pub use names::{display_name, to_id};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid instruction format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown side: {0}")]
    UnknownSide(String),

    #[error("Empty instruction")]
    EmptyInstruction,
}
