//! Side (participant) state

use std::collections::HashMap;

use super::combatant::Combatant;
use super::conditions::{SideCondition, SideConditions, default_side_conditions};

/// Turns a wish waits before it heals
pub const WISH_TURNS: u8 = 2;

/// Turns a future sight waits before it hits
pub const FUTURE_SIGHT_TURNS: u8 = 3;

/// A delayed effect counting down to resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Countdown {
    pub turns_remaining: u8,
    pub amount: u32,
}

impl Countdown {
    pub fn new(turns_remaining: u8, amount: u32) -> Self {
        Self {
            turns_remaining,
            amount,
        }
    }

    /// Check if the effect is still pending
    pub fn is_active(&self) -> bool {
        self.turns_remaining > 0
    }

    /// Advance by one turn
    pub fn tick(&mut self) {
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
    }
}

/// One participant's side of the battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideState {
    /// The combatant currently fighting
    pub active: Combatant,

    /// Bench combatants keyed by species id (unused by single battles)
    pub reserve: HashMap<String, Combatant>,

    /// Side condition counters (hazard layers, screen turns, ...)
    pub conditions: SideConditions,

    pub wish: Countdown,
    pub future_sight: Countdown,
}

impl SideState {
    /// Create a fresh side: given active, empty reserve, default condition counters
    pub fn new(active: Combatant) -> Self {
        Self::with_conditions(active, default_side_conditions())
    }

    /// Create a fresh side with an explicit condition map
    pub fn with_conditions(active: Combatant, conditions: SideConditions) -> Self {
        Self {
            active,
            reserve: HashMap::new(),
            conditions,
            wish: Countdown::default(),
            future_sight: Countdown::default(),
        }
    }

    /// Counter for a condition (0 if not present)
    pub fn condition_count(&self, cond: SideCondition) -> u8 {
        self.conditions.get(&cond).copied().unwrap_or(0)
    }

    /// Increment a condition counter, respecting its layer cap.
    /// Returns the counter after the change.
    pub fn add_condition(&mut self, cond: SideCondition, amount: u8) -> u8 {
        let counter = self.conditions.entry(cond).or_insert(0);
        let mut next = counter.saturating_add(amount);
        if let Some(max) = cond.max_count() {
            next = next.min(max.max(*counter));
        }
        *counter = next;
        next
    }

    /// Decrement a condition counter, flooring at 0.
    /// Returns the counter after the change.
    pub fn remove_condition(&mut self, cond: SideCondition, amount: u8) -> u8 {
        let counter = self.conditions.entry(cond).or_insert(0);
        *counter = counter.saturating_sub(amount);
        *counter
    }
}

impl Default for SideState {
    fn default() -> Self {
        Self::new(Combatant::default())
    }
}
