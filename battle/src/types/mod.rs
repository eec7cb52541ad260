//! Domain types for battle state

mod combatant;
mod conditions;
mod field;
mod nature;
mod side;
mod stats;
mod status;
mod typing;

pub use combatant::{Combatant, CombatantIdentity, MAX_MOVES};
pub use conditions::{SideCondition, SideConditions, Terrain, Weather, default_side_conditions};
pub use field::FieldState;
pub use nature::Nature;
pub use side::{Countdown, FUTURE_SIGHT_TURNS, SideState, WISH_TURNS};
pub use stats::{BaseStats, EvSpread, StatStages};
pub use status::{Status, Volatile};
pub use typing::Type;
