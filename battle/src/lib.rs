//! Review-driven battle resolution.
//!
//! Every review event can drive one turn of a two-combatant battle. This
//! crate owns the battle state between turns and resolves each turn against
//! an external rules oracle.
//!
//! # Overview
//!
//! `tallgrass-battle` sits between `tallgrass-protocol` (the oracle's wire
//! contract) and whatever application counts reviews:
//!
//! ```text
//! tallgrass-protocol (instructions, outcome branches)
//!        │
//!        ▼
//! tallgrass-battle (domain types + turn engine) ← THIS CRATE
//!        │
//!        └─> application (review hooks, combatant records, UI)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Combatant`] - One active combatant as the oracle sees it
//! - [`SideState`] - One participant's side (active, conditions, wish, future sight)
//! - [`FieldState`] - Weather, terrain and trick room
//! - [`BattleState`] - Both sides plus the field
//! - [`Status`], [`Volatile`], [`StatStages`], [`Weather`], [`Terrain`], [`SideCondition`]
//!
//! ## Turn Engine
//! - [`ResetMode`] / [`resolve`] - How much state a turn keeps
//! - [`to_oracle_format`] - Stored record to oracle-ready combatant
//! - [`Oracle`] - The rules engine boundary
//! - [`sample`] - Weighted choice of one outcome branch
//! - [`apply`] - Instructions to a new state
//! - [`extract`] - HP deltas and missed moves
//! - [`render`] / [`Catalog`] - Localized transcript lines
//! - [`on_turn`] - All of the above in one call
//! - [`BattleSession`] - Owns the state between turns
//!
//! # Example Usage
//!
//! ```ignore
//! use tallgrass_battle::{BattleSession, CombatantRecord, SessionConfig};
//!
//! let mut session = BattleSession::new(my_oracle, SessionConfig::default());
//!
//! // Called from the review hook
//! if let Some(turn) = session.on_review(&main_record, &wild_record) {
//!     for line in &turn.transcript {
//!         println!("{}", line);
//!     }
//!     if turn.opponent_fainted() {
//!         // caller picks a new opponent; the session already
//!         // scheduled a carry-user reset
//!     }
//! }
//! ```

pub mod engine;
pub mod error;
pub mod session;
pub mod state;
pub mod types;

pub use engine::{
    BattleHeader, Catalog, CombatantRecord, Environment, FixedOracle, Localizer, Oracle, ResetMode,
    SessionConfig, SnapshotDefaults, TurnConfig, TurnDelta, TurnRequest, TurnResult, apply,
    extract, on_turn, render, resolve, sample, to_oracle_format,
};
pub use error::{OracleError, Result, TurnError};
pub use session::BattleSession;
pub use state::BattleState;
pub use types::{
    BaseStats, Combatant, CombatantIdentity, Countdown, EvSpread, FieldState, Nature,
    SideCondition, SideConditions, SideState, StatStages, Status, Terrain, Type, Volatile, Weather,
};

// Re-export commonly used protocol types
pub use tallgrass_protocol::{Instruction, OutcomeBranch, SideId, Stat};
