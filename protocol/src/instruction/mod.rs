//! Instructions emitted by the outcome oracle
//!
//! The oracle describes every outcome branch as an ordered list of atomic
//! state mutations. On the wire each mutation is a tuple whose first element
//! is a tag, e.g. `damage|opponent|20` or `["boost", "user", "atk", 1]`.
//! Tags this crate does not know are kept as [`Instruction::Other`] so newer
//! oracles never break older consumers.

mod tests;

use anyhow::Result;
use serde_json::Value;

use crate::ParseError;

/// Which participant an instruction targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideId {
    User,
    Opponent,
}

impl SideId {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(SideId::User),
            "opponent" => Some(SideId::Opponent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SideId::User => "user",
            SideId::Opponent => "opponent",
        }
    }

    /// The other participant
    pub fn opposite(&self) -> Self {
        match self {
            SideId::User => SideId::Opponent,
            SideId::Opponent => SideId::User,
        }
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stat abbreviation used by boost instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "atk" | "attack" => Some(Stat::Atk),
            "def" | "defense" => Some(Stat::Def),
            "spa" | "special_attack" => Some(Stat::Spa),
            "spd" | "special_defense" => Some(Stat::Spd),
            "spe" | "speed" => Some(Stat::Spe),
            "accuracy" => Some(Stat::Accuracy),
            "evasion" => Some(Stat::Evasion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasion",
        }
    }

    /// Name shown in battle transcripts
    pub fn display_name(&self) -> &'static str {
        match self {
            Stat::Atk => "attack",
            Stat::Def => "defense",
            Stat::Spa => "special-attack",
            Stat::Spd => "special-defense",
            Stat::Spe => "speed",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasion",
        }
    }
}

/// One atomic state mutation inside an outcome branch
///
/// Payload names (statuses, conditions, weathers) stay as the oracle's ids;
/// the battle crate resolves them into its own domain types.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// `damage|SIDE|AMOUNT` (a negative amount restores hp)
    Damage { side: SideId, amount: i32 },

    /// `heal|SIDE|AMOUNT` (a negative amount is an hp cost, e.g. Belly Drum)
    Heal { side: SideId, amount: i32 },

    /// `apply_status|SIDE|STATUS`
    ApplyStatus { side: SideId, status: String },

    /// `remove_status|SIDE|STATUS`
    RemoveStatus { side: SideId, status: String },

    /// `boost|SIDE|STAT|AMOUNT` (negative amounts lower the stage)
    Boost { side: SideId, stat: Stat, amount: i8 },

    /// `apply_volatile_status|SIDE|VOLATILE`
    ApplyVolatileStatus { side: SideId, volatile: String },

    /// `remove_volatile_status|SIDE|VOLATILE`
    RemoveVolatileStatus { side: SideId, volatile: String },

    /// `side_start|SIDE|CONDITION|AMOUNT`
    SideStart {
        side: SideId,
        condition: String,
        amount: u8,
    },

    /// `side_end|SIDE|CONDITION|AMOUNT`
    SideEnd {
        side: SideId,
        condition: String,
        amount: u8,
    },

    /// `weather_start|WEATHER|PREVIOUS` (WEATHER is `none` when weather ends)
    WeatherStart {
        weather: String,
        previous: Option<String>,
    },

    /// `field_start|FIELD|PREVIOUS`
    FieldStart {
        field: String,
        previous: Option<String>,
    },

    /// `field_end|FIELD`
    FieldEnd { field: String },

    /// `toggle_trickroom`
    ToggleTrickRoom,

    /// `wish_start|SIDE|AMOUNT`
    WishStart { side: SideId, amount: u32 },

    /// `wish_decrement|SIDE`
    WishDecrement { side: SideId },

    /// `futuresight_start|SIDE|AMOUNT`
    FutureSightStart { side: SideId, amount: u32 },

    /// `futuresight_decrement|SIDE`
    FutureSightDecrement { side: SideId },

    /// Any tag this version does not model
    Other { tag: String, args: Vec<String> },
}

impl Instruction {
    /// The wire tag for this instruction
    pub fn tag(&self) -> &str {
        match self {
            Instruction::Damage { .. } => "damage",
            Instruction::Heal { .. } => "heal",
            Instruction::ApplyStatus { .. } => "apply_status",
            Instruction::RemoveStatus { .. } => "remove_status",
            Instruction::Boost { .. } => "boost",
            Instruction::ApplyVolatileStatus { .. } => "apply_volatile_status",
            Instruction::RemoveVolatileStatus { .. } => "remove_volatile_status",
            Instruction::SideStart { .. } => "side_start",
            Instruction::SideEnd { .. } => "side_end",
            Instruction::WeatherStart { .. } => "weather_start",
            Instruction::FieldStart { .. } => "field_start",
            Instruction::FieldEnd { .. } => "field_end",
            Instruction::ToggleTrickRoom => "toggle_trickroom",
            Instruction::WishStart { .. } => "wish_start",
            Instruction::WishDecrement { .. } => "wish_decrement",
            Instruction::FutureSightStart { .. } => "futuresight_start",
            Instruction::FutureSightDecrement { .. } => "futuresight_decrement",
            Instruction::Other { tag, .. } => tag,
        }
    }

    /// Whether this is a damage instruction that actually removes hp from `target`
    pub fn damages(&self, target: SideId) -> bool {
        matches!(self, Instruction::Damage { side, amount } if *side == target && *amount > 0)
    }

    /// Serialize to the pipe-delimited wire format
    pub fn to_wire_format(&self) -> String {
        let fields: Vec<String> = match self {
            Instruction::Damage { side, amount } | Instruction::Heal { side, amount } => {
                vec![side.as_str().to_string(), amount.to_string()]
            }
            Instruction::ApplyStatus { side, status }
            | Instruction::RemoveStatus { side, status } => {
                vec![side.as_str().to_string(), status.clone()]
            }
            Instruction::Boost { side, stat, amount } => vec![
                side.as_str().to_string(),
                stat.as_str().to_string(),
                amount.to_string(),
            ],
            Instruction::ApplyVolatileStatus { side, volatile }
            | Instruction::RemoveVolatileStatus { side, volatile } => {
                vec![side.as_str().to_string(), volatile.clone()]
            }
            Instruction::SideStart {
                side,
                condition,
                amount,
            }
            | Instruction::SideEnd {
                side,
                condition,
                amount,
            } => vec![
                side.as_str().to_string(),
                condition.clone(),
                amount.to_string(),
            ],
            Instruction::WeatherStart { weather, previous } => {
                vec![weather.clone(), previous.clone().unwrap_or_default()]
            }
            Instruction::FieldStart { field, previous } => {
                vec![field.clone(), previous.clone().unwrap_or_default()]
            }
            Instruction::FieldEnd { field } => vec![field.clone()],
            Instruction::ToggleTrickRoom => Vec::new(),
            Instruction::WishStart { side, amount }
            | Instruction::FutureSightStart { side, amount } => {
                vec![side.as_str().to_string(), amount.to_string()]
            }
            Instruction::WishDecrement { side } | Instruction::FutureSightDecrement { side } => {
                vec![side.as_str().to_string()]
            }
            Instruction::Other { args, .. } => args.clone(),
        };

        std::iter::once(self.tag().to_string())
            .chain(fields)
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Parse an instruction from a JSON tuple like `["damage", "opponent", 20]`
    pub fn from_json(value: &Value) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| ParseError::InvalidFormat(format!("expected array, got {}", value)))?;

        let parts: Vec<String> = items.iter().map(json_field).collect();
        let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
        parse_instruction_parts(&parts)
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_wire_format())
    }
}

fn json_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parse a single pipe-delimited instruction line
pub fn parse_instruction(line: &str) -> Result<Instruction> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);

    if line.is_empty() {
        return Err(ParseError::EmptyInstruction.into());
    }

    let parts: Vec<&str> = line.split('|').collect();
    parse_instruction_parts(&parts)
}

/// Parse an instruction from its already-split tuple fields
pub fn parse_instruction_parts(parts: &[&str]) -> Result<Instruction> {
    let tag = match parts.first() {
        Some(tag) if !tag.trim().is_empty() => tag.trim(),
        _ => return Err(ParseError::EmptyInstruction.into()),
    };

    match tag {
        "damage" => Ok(Instruction::Damage {
            side: parse_side(parts, 1)?,
            amount: parse_hp(parts, 2)?,
        }),
        "heal" => Ok(Instruction::Heal {
            side: parse_side(parts, 1)?,
            amount: parse_hp(parts, 2)?,
        }),
        "apply_status" => Ok(Instruction::ApplyStatus {
            side: parse_side(parts, 1)?,
            status: parse_name(parts, 2, "status")?,
        }),
        "remove_status" => Ok(Instruction::RemoveStatus {
            side: parse_side(parts, 1)?,
            status: parse_name(parts, 2, "status")?,
        }),
        "boost" | "unboost" => {
            let side = parse_side(parts, 1)?;
            let stat = parts
                .get(2)
                .and_then(|s| Stat::parse(s.trim()))
                .ok_or_else(|| ParseError::MissingField("stat".to_string()))?;
            let amount = parse_signed(parts, 3)?;
            let amount = if tag == "unboost" { -amount } else { amount };
            Ok(Instruction::Boost { side, stat, amount })
        }
        "apply_volatile_status" => Ok(Instruction::ApplyVolatileStatus {
            side: parse_side(parts, 1)?,
            volatile: parse_name(parts, 2, "volatile status")?,
        }),
        "remove_volatile_status" => Ok(Instruction::RemoveVolatileStatus {
            side: parse_side(parts, 1)?,
            volatile: parse_name(parts, 2, "volatile status")?,
        }),
        "side_start" => Ok(Instruction::SideStart {
            side: parse_side(parts, 1)?,
            condition: parse_name(parts, 2, "side condition")?,
            amount: parse_layers(parts, 3)?,
        }),
        "side_end" => Ok(Instruction::SideEnd {
            side: parse_side(parts, 1)?,
            condition: parse_name(parts, 2, "side condition")?,
            amount: parse_layers(parts, 3)?,
        }),
        "weather_start" => Ok(Instruction::WeatherStart {
            weather: parse_raw(parts, 1, "weather")?,
            previous: optional_name(parts, 2),
        }),
        "field_start" => Ok(Instruction::FieldStart {
            field: parse_raw(parts, 1, "field")?,
            previous: optional_name(parts, 2),
        }),
        "field_end" => Ok(Instruction::FieldEnd {
            field: parse_name(parts, 1, "field")?,
        }),
        "toggle_trickroom" => Ok(Instruction::ToggleTrickRoom),
        "wish_start" => Ok(Instruction::WishStart {
            side: parse_side(parts, 1)?,
            amount: parse_amount(parts, 2)?,
        }),
        "wish_decrement" => Ok(Instruction::WishDecrement {
            side: parse_side(parts, 1)?,
        }),
        "futuresight_start" => Ok(Instruction::FutureSightStart {
            side: parse_side(parts, 1)?,
            amount: parse_amount(parts, 2)?,
        }),
        "futuresight_decrement" => Ok(Instruction::FutureSightDecrement {
            side: parse_side(parts, 1)?,
        }),
        _ => Ok(Instruction::Other {
            tag: tag.to_string(),
            args: parts[1..].iter().map(|s| s.to_string()).collect(),
        }),
    }
}

fn parse_side(parts: &[&str], index: usize) -> Result<SideId> {
    let raw = parts
        .get(index)
        .map(|s| s.trim())
        .ok_or_else(|| ParseError::MissingField("side".to_string()))?;

    SideId::parse(raw).ok_or_else(|| ParseError::UnknownSide(raw.to_string()).into())
}

fn parse_name(parts: &[&str], index: usize, field: &str) -> Result<String> {
    optional_name(parts, index).ok_or_else(|| ParseError::MissingField(field.to_string()).into())
}

/// Like [`parse_name`] but keeps "none", which names a cleared weather or field
fn parse_raw(parts: &[&str], index: usize, field: &str) -> Result<String> {
    parts
        .get(index)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| ParseError::MissingField(field.to_string()).into())
}

fn optional_name(parts: &[&str], index: usize) -> Option<String> {
    parts
        .get(index)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "none" && *s != "null")
        .map(|s| s.to_string())
}

/// Oracles may emit amounts as floats; rounded, must be finite
fn parse_number(parts: &[&str], index: usize) -> Result<f64> {
    let raw = parts
        .get(index)
        .map(|s| s.trim())
        .ok_or_else(|| ParseError::MissingField("amount".to_string()))?;

    let value: f64 = raw
        .parse()
        .map_err(|_| ParseError::InvalidFormat(format!("amount is not a number: {}", raw)))?;

    if !value.is_finite() {
        return Err(ParseError::InvalidFormat(format!("amount is not finite: {}", raw)).into());
    }

    Ok(value.round())
}

/// Signed hp change; the sign is meaningful for damage and heal
fn parse_hp(parts: &[&str], index: usize) -> Result<i32> {
    Ok(parse_number(parts, index)?.clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}

/// Non-negative amount (wish hp, layer counts); negatives become 0
fn parse_amount(parts: &[&str], index: usize) -> Result<u32> {
    Ok(parse_number(parts, index)?.clamp(0.0, u32::MAX as f64) as u32)
}

fn parse_signed(parts: &[&str], index: usize) -> Result<i8> {
    let raw = parts
        .get(index)
        .map(|s| s.trim())
        .ok_or_else(|| ParseError::MissingField("amount".to_string()))?;

    let value: f64 = raw
        .parse()
        .map_err(|_| ParseError::InvalidFormat(format!("boost is not a number: {}", raw)))?;

    Ok(value.round().clamp(i8::MIN as f64, i8::MAX as f64) as i8)
}

/// Layer counts default to 1 when the oracle omits them
fn parse_layers(parts: &[&str], index: usize) -> Result<u8> {
    match parts.get(index).map(|s| s.trim()) {
        None | Some("") => Ok(1),
        Some(_) => Ok(parse_amount(parts, index)?.min(u8::MAX as u32) as u8),
    }
}
