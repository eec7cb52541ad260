//! Natures

use tallgrass_protocol::to_id;

/// The 25 natures. Neutral ones (Serious, Hardy, ...) change no stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    #[default]
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    /// Parse a nature name (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        let id = to_id(s);
        Self::ALL.into_iter().find(|n| n.as_str() == id)
    }

    /// Lowercase id, as written in records
    pub fn as_str(&self) -> &'static str {
        match self {
            Nature::Hardy => "hardy",
            Nature::Lonely => "lonely",
            Nature::Brave => "brave",
            Nature::Adamant => "adamant",
            Nature::Naughty => "naughty",
            Nature::Bold => "bold",
            Nature::Docile => "docile",
            Nature::Relaxed => "relaxed",
            Nature::Impish => "impish",
            Nature::Lax => "lax",
            Nature::Timid => "timid",
            Nature::Hasty => "hasty",
            Nature::Serious => "serious",
            Nature::Jolly => "jolly",
            Nature::Naive => "naive",
            Nature::Modest => "modest",
            Nature::Mild => "mild",
            Nature::Quiet => "quiet",
            Nature::Bashful => "bashful",
            Nature::Rash => "rash",
            Nature::Calm => "calm",
            Nature::Gentle => "gentle",
            Nature::Sassy => "sassy",
            Nature::Careful => "careful",
            Nature::Quirky => "quirky",
        }
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
