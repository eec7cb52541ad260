//! Status conditions (volatile and non-volatile)

use tallgrass_protocol::to_id;

/// Non-volatile status conditions (persist through switching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // Toxic
    Sleep,
}

impl Status {
    /// Parse from oracle id ("brn", "frz", "par", "psn", "tox", "slp") or full name
    pub fn from_protocol(s: &str) -> Option<Self> {
        match to_id(s).as_str() {
            "brn" | "burn" => Some(Status::Burn),
            "frz" | "freeze" => Some(Status::Freeze),
            "par" | "paralysis" => Some(Status::Paralysis),
            "psn" | "poison" => Some(Status::Poison),
            "tox" | "toxic" | "badpoison" => Some(Status::BadPoison),
            "slp" | "sleep" => Some(Status::Sleep),
            _ => None,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Freeze => "Freeze",
            Status::Paralysis => "Paralysis",
            Status::Poison => "Poison",
            Status::BadPoison => "Toxic",
            Status::Sleep => "Sleep",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Volatile status conditions (cleared on switching)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Volatile {
    Confusion,
    Taunt,
    Encore,
    Disable,
    Torment,
    Infatuation,
    FocusEnergy,
    LeechSeed,
    Curse,
    Nightmare,
    PerishSong,
    Protect,
    Endure,
    Substitute,
    Flinch,
    Yawn,
    MustRecharge,
    TwoTurnMove,
    LockedMove,
    PartiallyTrapped,
    MagnetRise,
    Ingrain,
    AquaRing,
    Roost,
    DestinyBond,
    SaltCure,
    TarShot,
    SlowStart,
    HealBlock,
    Charge,

    /// Any volatile the oracle names that is not modelled here
    Other(String),
}

impl Volatile {
    /// Parse from oracle id; unknown ids are kept verbatim as [`Volatile::Other`]
    pub fn from_protocol(s: &str) -> Self {
        let clean = s
            .strip_prefix("move: ")
            .or_else(|| s.strip_prefix("ability: "))
            .unwrap_or(s);

        match to_id(clean).as_str() {
            "confusion" | "confused" => Volatile::Confusion,
            "taunt" => Volatile::Taunt,
            "encore" => Volatile::Encore,
            "disable" | "disabled" => Volatile::Disable,
            "torment" => Volatile::Torment,
            "attract" | "infatuation" => Volatile::Infatuation,
            "focusenergy" => Volatile::FocusEnergy,
            "leechseed" => Volatile::LeechSeed,
            "curse" => Volatile::Curse,
            "nightmare" => Volatile::Nightmare,
            "perishsong" | "perish3" | "perish2" | "perish1" => Volatile::PerishSong,
            "protect" | "detect" | "kingsshield" | "spikyshield" | "banefulbunker"
            | "silktrap" | "burningbulwark" => Volatile::Protect,
            "endure" => Volatile::Endure,
            "substitute" => Volatile::Substitute,
            "flinch" => Volatile::Flinch,
            "yawn" => Volatile::Yawn,
            "mustrecharge" | "recharging" => Volatile::MustRecharge,
            "twoturnmove" | "charging" => Volatile::TwoTurnMove,
            "lockedmove" | "outrage" | "thrash" | "petaldance" => Volatile::LockedMove,
            "partiallytrapped" | "partialtrap" | "bind" | "wrap" | "firespin" | "whirlpool"
            | "sandtomb" | "infestation" => Volatile::PartiallyTrapped,
            "magnetrise" => Volatile::MagnetRise,
            "ingrain" => Volatile::Ingrain,
            "aquaring" => Volatile::AquaRing,
            "roost" => Volatile::Roost,
            "destinybond" => Volatile::DestinyBond,
            "saltcure" => Volatile::SaltCure,
            "tarshot" => Volatile::TarShot,
            "slowstart" => Volatile::SlowStart,
            "healblock" => Volatile::HealBlock,
            "charge" => Volatile::Charge,
            _ => Volatile::Other(clean.to_string()),
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &str {
        match self {
            Volatile::Confusion => "Confusion",
            Volatile::Taunt => "Taunt",
            Volatile::Encore => "Encore",
            Volatile::Disable => "Disable",
            Volatile::Torment => "Torment",
            Volatile::Infatuation => "Infatuation",
            Volatile::FocusEnergy => "Focus Energy",
            Volatile::LeechSeed => "Leech Seed",
            Volatile::Curse => "Curse",
            Volatile::Nightmare => "Nightmare",
            Volatile::PerishSong => "Perish Song",
            Volatile::Protect => "Protect",
            Volatile::Endure => "Endure",
            Volatile::Substitute => "Substitute",
            Volatile::Flinch => "Flinch",
            Volatile::Yawn => "Yawn",
            Volatile::MustRecharge => "Recharging",
            Volatile::TwoTurnMove => "Charging",
            Volatile::LockedMove => "Locked Move",
            Volatile::PartiallyTrapped => "Partially Trapped",
            Volatile::MagnetRise => "Magnet Rise",
            Volatile::Ingrain => "Ingrain",
            Volatile::AquaRing => "Aqua Ring",
            Volatile::Roost => "Roost",
            Volatile::DestinyBond => "Destiny Bond",
            Volatile::SaltCure => "Salt Cure",
            Volatile::TarShot => "Tar Shot",
            Volatile::SlowStart => "Slow Start",
            Volatile::HealBlock => "Heal Block",
            Volatile::Charge => "Charge",
            Volatile::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Volatile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_protocol() {
        assert_eq!(Status::from_protocol("brn"), Some(Status::Burn));
        assert_eq!(Status::from_protocol("frz"), Some(Status::Freeze));
        assert_eq!(Status::from_protocol("par"), Some(Status::Paralysis));
        assert_eq!(Status::from_protocol("psn"), Some(Status::Poison));
        assert_eq!(Status::from_protocol("tox"), Some(Status::BadPoison));
        assert_eq!(Status::from_protocol("slp"), Some(Status::Sleep));
        assert_eq!(Status::from_protocol("Sleep"), Some(Status::Sleep));
        assert_eq!(Status::from_protocol("fnt"), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Burn.to_string(), "Burn");
        assert_eq!(Status::BadPoison.to_string(), "Toxic");
    }

    #[test]
    fn test_volatile_from_protocol() {
        assert_eq!(Volatile::from_protocol("confusion"), Volatile::Confusion);
        assert_eq!(Volatile::from_protocol("Leech Seed"), Volatile::LeechSeed);
        assert_eq!(Volatile::from_protocol("move: Taunt"), Volatile::Taunt);
        assert_eq!(Volatile::from_protocol("King's Shield"), Volatile::Protect);
        assert_eq!(Volatile::from_protocol("partiallytrapped"), Volatile::PartiallyTrapped);
    }

    #[test]
    fn test_volatile_unknown_is_kept() {
        let v = Volatile::from_protocol("sparklingaria");
        assert_eq!(v, Volatile::Other("sparklingaria".to_string()));
        assert_eq!(v.as_str(), "sparklingaria");
    }
}
