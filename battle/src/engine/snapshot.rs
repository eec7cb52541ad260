//! Projecting stored combatant records into oracle-ready combatants

use std::collections::HashSet;

use tallgrass_protocol::to_id;

use super::config::SnapshotDefaults;
use crate::error::{Result, TurnError};
use crate::types::{
    BaseStats, Combatant, CombatantIdentity, EvSpread, MAX_MOVES, Nature, StatStages, Status, Type,
    Volatile,
};

/// A combatant as the caller stores it between battles
///
/// Everything except species and level may be left unset; the snapshot
/// builder fills in the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatantRecord {
    pub species: Option<String>,
    pub nickname: Option<String>,
    pub level: Option<u8>,
    pub types: Vec<String>,
    /// Current hp; unset means full
    pub hp: Option<u32>,
    /// Unset means the base hp stat
    pub max_hp: Option<u32>,
    pub ability: Option<String>,
    pub item: Option<String>,
    pub stats: BaseStats,
    pub nature: Option<String>,
    pub evs: Option<EvSpread>,
    pub status: Option<String>,
    pub volatiles: Vec<String>,
    pub moves: Vec<String>,
    pub terastallized: bool,
}

impl CombatantRecord {
    pub fn new(species: impl Into<String>, level: u8) -> Self {
        Self {
            species: Some(species.into()),
            level: Some(level),
            ..Self::default()
        }
    }
}

/// Build the combatant handed to the oracle. Never touches `record`.
///
/// Fails only when species or level is missing. Unparseable optional fields
/// are dropped with a warning.
pub fn to_oracle_format(
    record: &CombatantRecord,
    defaults: &SnapshotDefaults,
) -> Result<Combatant> {
    let species = record
        .species
        .as_deref()
        .map(to_id)
        .filter(|id| !id.is_empty())
        .ok_or(TurnError::MissingCombatantData {
            side: None,
            field: "species",
        })?;

    let level = record.level.filter(|l| *l > 0).ok_or(TurnError::MissingCombatantData {
        side: None,
        field: "level",
    })?;

    let max_hp = record.max_hp.unwrap_or(record.stats.hp);
    let hp = record.hp.unwrap_or(max_hp).min(max_hp);

    let mut types: Vec<Type> = record
        .types
        .iter()
        .filter_map(|t| {
            let parsed = Type::from_protocol(t);
            if parsed.is_none() {
                tracing::warn!(species = %species, kind = %t, "Dropping unknown type");
            }
            parsed
        })
        .collect();
    types.dedup();
    if types.is_empty() {
        types.push(Type::Typeless);
    }

    let nature = match record.nature.as_deref() {
        Some(raw) => Nature::from_protocol(raw).unwrap_or_else(|| {
            tracing::warn!(species = %species, nature = %raw, "Unknown nature, using default");
            defaults.nature
        }),
        None => defaults.nature,
    };

    let status = record.status.as_deref().and_then(|raw| {
        let parsed = Status::from_protocol(raw);
        if parsed.is_none() && !raw.trim().is_empty() {
            tracing::warn!(species = %species, status = %raw, "Dropping unknown status");
        }
        parsed
    });

    let volatiles: HashSet<Volatile> = record
        .volatiles
        .iter()
        .map(|v| Volatile::from_protocol(v))
        .collect();

    let mut moves: Vec<String> = Vec::with_capacity(MAX_MOVES);
    for id in record.moves.iter().map(|m| to_id(m)).filter(|m| !m.is_empty()) {
        if !moves.contains(&id) {
            moves.push(id);
        }
    }
    if moves.len() > MAX_MOVES {
        tracing::warn!(
            species = %species,
            known = moves.len(),
            "Too many moves, keeping the first four"
        );
        moves.truncate(MAX_MOVES);
    }

    Ok(Combatant {
        identity: CombatantIdentity {
            species,
            nickname: record.nickname.clone().filter(|n| !n.trim().is_empty()),
            level: level.min(100),
        },
        types,
        hp,
        max_hp,
        ability: record.ability.as_deref().map(to_id).unwrap_or_default(),
        item: record.item.as_deref().map(to_id).filter(|i| !i.is_empty()),
        stats: record.stats.clone(),
        nature,
        evs: record.evs.unwrap_or(defaults.evs),
        status,
        volatiles,
        boosts: StatStages::new(),
        moves,
        terastallized: record.terastallized,
    })
}
