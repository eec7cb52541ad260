//! The turn engine
//!
//! One turn flows continuity -> snapshot -> oracle -> sampler -> applier ->
//! delta -> transcript. [`on_turn`] runs the whole pipeline; the stages are
//! public on their own for callers that need only part of it.

pub mod applier;
pub mod config;
pub mod continuity;
pub mod delta;
pub mod oracle;
pub mod sampler;
pub mod snapshot;
pub mod transcript;
pub mod turn;

pub use applier::{apply, apply_instruction};
pub use config::{SessionConfig, SnapshotDefaults, TurnConfig};
pub use continuity::{ResetMode, resolve};
pub use delta::{TurnDelta, extract};
pub use oracle::{Environment, FixedOracle, Oracle, enumerate_or_noop};
pub use sampler::{sample, sample_index};
pub use snapshot::{CombatantRecord, to_oracle_format};
pub use transcript::{BattleHeader, Catalog, Localizer, render, render_failure};
pub use turn::{TurnRequest, TurnResult, choose_move, guard_identity, on_turn};
