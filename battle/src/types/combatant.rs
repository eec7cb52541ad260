//! Combatant state types

use std::collections::HashSet;

use super::nature::Nature;
use super::stats::{BaseStats, EvSpread, StatStages};
use super::status::{Status, Volatile};
use super::typing::Type;

/// Most moves a combatant can know at once
pub const MAX_MOVES: usize = 4;

/// Core combatant identity (doesn't change during battle)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantIdentity {
    /// Species id (including forme, e.g., "pikachualola")
    pub species: String,

    /// Nickname (if different from species)
    pub nickname: Option<String>,

    /// Level (1-100)
    pub level: u8,
}

impl CombatantIdentity {
    /// Create a new combatant identity
    pub fn new(species: impl Into<String>, level: u8) -> Self {
        Self {
            species: species.into(),
            nickname: None,
            level,
        }
    }

    /// Get the display name (nickname if set, otherwise species)
    pub fn name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.species)
    }
}

impl Default for CombatantIdentity {
    fn default() -> Self {
        Self::new("Unknown", 100)
    }
}

/// One active combatant as the oracle sees it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Core identity
    pub identity: CombatantIdentity,

    /// Current types (one or two)
    pub types: Vec<Type>,

    // === HP ===
    pub hp: u32,
    pub max_hp: u32,

    pub ability: String,
    pub item: Option<String>,

    // === Stat inputs ===
    pub stats: BaseStats,
    pub nature: Nature,
    pub evs: EvSpread,

    // === Status ===
    /// Non-volatile status condition
    pub status: Option<Status>,

    /// Active volatile conditions
    pub volatiles: HashSet<Volatile>,

    /// Stat stage modifiers
    pub boosts: StatStages,

    /// Known move ids, at most [`MAX_MOVES`]
    pub moves: Vec<String>,

    /// Whether currently terastallized
    pub terastallized: bool,
}

impl Combatant {
    /// Create a combatant at full hp with neutral stat inputs
    pub fn new(species: impl Into<String>, level: u8, max_hp: u32) -> Self {
        Self {
            identity: CombatantIdentity::new(species, level),
            hp: max_hp,
            max_hp,
            ..Self::default()
        }
    }

    /// Get display name (nickname or species)
    pub fn name(&self) -> &str {
        self.identity.name()
    }

    /// Remove hp, flooring at 0. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount);
        before - self.hp
    }

    /// Restore hp, capping at max_hp. Returns the hp actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp.max(before));
        self.hp - before
    }

    /// Check if the combatant has fainted
    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Check for a volatile condition
    pub fn has_volatile(&self, v: &Volatile) -> bool {
        self.volatiles.contains(v)
    }

    /// Add a volatile condition
    pub fn add_volatile(&mut self, v: Volatile) {
        self.volatiles.insert(v);
    }

    /// Remove a volatile condition
    pub fn remove_volatile(&mut self, v: &Volatile) -> bool {
        self.volatiles.remove(v)
    }

}

impl Default for Combatant {
    fn default() -> Self {
        Self {
            identity: CombatantIdentity::default(),
            types: Vec::new(),
            hp: 0,
            max_hp: 0,
            ability: String::new(),
            item: None,
            stats: BaseStats::default(),
            nature: Nature::default(),
            evs: EvSpread::default(),
            status: None,
            volatiles: HashSet::new(),
            boosts: StatStages::new(),
            moves: Vec::new(),
            terastallized: false,
        }
    }
}
