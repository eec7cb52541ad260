//! Turning applied instructions into transcript lines
//!
//! Every line is produced from a template key plus named arguments, looked
//! up through a [`Localizer`]. [`Catalog`] is a ready-made localizer with
//! English templates; callers with their own translation catalogs implement
//! the trait instead.

use std::collections::HashMap;

use tallgrass_protocol::{Instruction, SideId, display_name};

use super::delta::TurnDelta;
use crate::types::{SideCondition, Status, Terrain, Volatile, Weather};

/// Resolve a template key into display text
pub trait Localizer {
    fn translate(&self, key: &str, args: &[(&str, String)]) -> String;
}

/// Template catalog with `{name}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    templates: HashMap<String, String>,
}

const ENGLISH: &[(&str, &str)] = &[
    ("battle_header", "{user_name} (Lv. {user_level}) vs. {opponent_name} (Lv. {opponent_level})"),
    ("user_move", "{user_name} used {move}!"),
    ("opponent_move", "The opposing {opponent_name} used {move}!"),
    ("battle_effects", "Battle Effects"),
    ("damage_taken", "{name} took {damage} damage!"),
    ("heal_effect", "{name} restored {amount} HP!"),
    ("status_apply", "{name} is afflicted with {status}!"),
    ("status_remove", "{name} was cured of {status}!"),
    ("stat_change", "{name}'s {stat} {direction} by {amount}!"),
    ("rose", "rose"),
    ("fell", "fell"),
    ("volatile_status_apply", "{name} is affected by {status}!"),
    ("volatile_status_remove", "{name} is no longer affected by {status}!"),
    ("side_effect", "{condition} took effect on {side}!"),
    ("side_end", "{condition} wore off on {side}."),
    ("your_side", "your side"),
    ("opponent_side", "the opposing side"),
    ("weather_change", "The weather became {weather}!"),
    ("weather_clear", "The weather returned to normal."),
    ("terrain_start", "{terrain} covered the battlefield!"),
    ("terrain_end", "{terrain} faded."),
    ("trick_room_toggle", "The dimensions of the battlefield shifted!"),
    ("wish_start", "{name} made a wish!"),
    ("future_sight_start", "{name} foresaw an attack!"),
    ("user_move_missed", "Your attack missed!"),
    ("opponent_move_missed", "The opposing attack missed!"),
    ("unhandled_instruction", "Unhandled action: {tag}"),
    ("turn_failed", "The turn could not be resolved: {error}"),
];

impl Catalog {
    /// Catalog without any templates; every key renders as itself
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Built-in English templates
    pub fn english() -> Self {
        Self {
            templates: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Load templates from a JSON object of `key -> template`
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        Ok(Self {
            templates: serde_json::from_str(input)?,
        })
    }

    /// Replace or add templates from a JSON object, keeping the rest
    pub fn merge_json(&mut self, input: &str) -> serde_json::Result<()> {
        let overrides: HashMap<String, String> = serde_json::from_str(input)?;
        self.templates.extend(overrides);
        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for Catalog {
    fn translate(&self, key: &str, args: &[(&str, String)]) -> String {
        let Some(template) = self.templates.get(key) else {
            return key.to_string();
        };

        args.iter().fold(template.clone(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}

/// Who fought and with which moves, shown above the effects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleHeader {
    pub user_name: String,
    pub user_level: u8,
    pub user_move: String,
    pub opponent_name: String,
    pub opponent_level: u8,
    pub opponent_move: String,
}

impl BattleHeader {
    fn name(&self, side: SideId) -> String {
        match side {
            SideId::User => display_name(&self.user_name),
            SideId::Opponent => display_name(&self.opponent_name),
        }
    }
}

/// Render a resolved turn: header, moves, separator, effects, then misses
pub fn render(
    header: &BattleHeader,
    applied: &[Instruction],
    delta: &TurnDelta,
    localizer: &dyn Localizer,
) -> Vec<String> {
    let user_name = header.name(SideId::User);
    let opponent_name = header.name(SideId::Opponent);

    let mut lines = vec![
        localizer.translate(
            "battle_header",
            &[
                ("user_name", user_name.clone()),
                ("user_level", header.user_level.to_string()),
                ("opponent_name", opponent_name.clone()),
                ("opponent_level", header.opponent_level.to_string()),
            ],
        ),
        localizer.translate(
            "user_move",
            &[("user_name", user_name), ("move", display_name(&header.user_move))],
        ),
        localizer.translate(
            "opponent_move",
            &[
                ("opponent_name", opponent_name),
                ("move", display_name(&header.opponent_move)),
            ],
        ),
        format!("=== {} ===", localizer.translate("battle_effects", &[])),
    ];

    lines.extend(
        applied
            .iter()
            .filter_map(|instruction| render_instruction(header, instruction, localizer)),
    );

    if delta.user_missed {
        lines.push(localizer.translate("user_move_missed", &[]));
    }
    if delta.opponent_missed {
        lines.push(localizer.translate("opponent_move_missed", &[]));
    }

    lines
}

/// The single line shown when a turn could not be resolved
pub fn render_failure(error: &dyn std::error::Error, localizer: &dyn Localizer) -> Vec<String> {
    vec![localizer.translate("turn_failed", &[("error", error.to_string())])]
}

/// One line for one instruction; `None` for pure bookkeeping and no-op boosts
pub fn render_instruction(
    header: &BattleHeader,
    instruction: &Instruction,
    localizer: &dyn Localizer,
) -> Option<String> {
    let line = match instruction {
        // A negative amount reverses the direction of the hp change
        Instruction::Damage { side, amount } if *amount < 0 => {
            heal_line(header, *side, amount.unsigned_abs(), localizer)
        }
        Instruction::Damage { side, amount } => {
            damage_line(header, *side, amount.unsigned_abs(), localizer)
        }

        Instruction::Heal { side, amount } if *amount < 0 => {
            damage_line(header, *side, amount.unsigned_abs(), localizer)
        }
        Instruction::Heal { side, amount } => {
            heal_line(header, *side, amount.unsigned_abs(), localizer)
        }

        Instruction::ApplyStatus { side, status } => localizer.translate(
            "status_apply",
            &[("name", header.name(*side)), ("status", status_name(status))],
        ),

        Instruction::RemoveStatus { side, status } => localizer.translate(
            "status_remove",
            &[("name", header.name(*side)), ("status", status_name(status))],
        ),

        Instruction::Boost { amount: 0, .. } => return None,

        Instruction::Boost { side, stat, amount } => {
            let direction = if *amount > 0 { "rose" } else { "fell" };
            localizer.translate(
                "stat_change",
                &[
                    ("name", header.name(*side)),
                    ("stat", stat.display_name().to_string()),
                    ("direction", localizer.translate(direction, &[])),
                    ("amount", amount.unsigned_abs().to_string()),
                ],
            )
        }

        Instruction::ApplyVolatileStatus { side, volatile } => localizer.translate(
            "volatile_status_apply",
            &[("name", header.name(*side)), ("status", volatile_name(volatile))],
        ),

        Instruction::RemoveVolatileStatus { side, volatile } => localizer.translate(
            "volatile_status_remove",
            &[("name", header.name(*side)), ("status", volatile_name(volatile))],
        ),

        Instruction::SideStart { side, condition, .. } => localizer.translate(
            "side_effect",
            &[
                ("side", side_label(*side, localizer)),
                ("condition", condition_name(condition)),
            ],
        ),

        Instruction::SideEnd { side, condition, .. } => localizer.translate(
            "side_end",
            &[
                ("side", side_label(*side, localizer)),
                ("condition", condition_name(condition)),
            ],
        ),

        Instruction::WeatherStart { weather, .. } => match Weather::from_protocol(weather) {
            Some(w) => {
                localizer.translate("weather_change", &[("weather", w.as_str().to_string())])
            }
            None if tallgrass_protocol::to_id(weather) == "none" => {
                localizer.translate("weather_clear", &[])
            }
            None => localizer.translate("weather_change", &[("weather", display_name(weather))]),
        },

        Instruction::FieldStart { field, .. } => {
            localizer.translate("terrain_start", &[("terrain", terrain_name(field))])
        }

        Instruction::FieldEnd { field } => {
            localizer.translate("terrain_end", &[("terrain", terrain_name(field))])
        }

        Instruction::ToggleTrickRoom => localizer.translate("trick_room_toggle", &[]),

        Instruction::WishStart { side, .. } => {
            localizer.translate("wish_start", &[("name", header.name(*side))])
        }

        Instruction::FutureSightStart { side, .. } => {
            localizer.translate("future_sight_start", &[("name", header.name(*side))])
        }

        Instruction::WishDecrement { .. } | Instruction::FutureSightDecrement { .. } => {
            return None;
        }

        Instruction::Other { tag, .. } => {
            localizer.translate("unhandled_instruction", &[("tag", tag.clone())])
        }
    };

    Some(line)
}

fn damage_line(
    header: &BattleHeader,
    side: SideId,
    amount: u32,
    localizer: &dyn Localizer,
) -> String {
    localizer.translate(
        "damage_taken",
        &[("name", header.name(side)), ("damage", amount.to_string())],
    )
}

fn heal_line(
    header: &BattleHeader,
    side: SideId,
    amount: u32,
    localizer: &dyn Localizer,
) -> String {
    localizer.translate(
        "heal_effect",
        &[("name", header.name(side)), ("amount", amount.to_string())],
    )
}

fn side_label(side: SideId, localizer: &dyn Localizer) -> String {
    match side {
        SideId::User => localizer.translate("your_side", &[]),
        SideId::Opponent => localizer.translate("opponent_side", &[]),
    }
}

fn status_name(raw: &str) -> String {
    Status::from_protocol(raw).map_or_else(|| display_name(raw), |s| s.as_str().to_string())
}

fn volatile_name(raw: &str) -> String {
    match Volatile::from_protocol(raw) {
        Volatile::Other(name) => display_name(&name),
        known => known.as_str().to_string(),
    }
}

fn condition_name(raw: &str) -> String {
    SideCondition::from_protocol(raw)
        .map_or_else(|| display_name(raw), |c| c.as_str().to_string())
}

fn terrain_name(raw: &str) -> String {
    Terrain::from_protocol(raw).map_or_else(|| display_name(raw), |t| t.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use tallgrass_protocol::Stat;

    use super::*;

    fn header() -> BattleHeader {
        BattleHeader {
            user_name: "pikachu".to_string(),
            user_level: 50,
            user_move: "thunder_shock".to_string(),
            opponent_name: "geodude".to_string(),
            opponent_level: 45,
            opponent_move: "defense-curl".to_string(),
        }
    }

    #[test]
    fn test_translate_substitutes_placeholders() {
        let catalog = Catalog::english();
        let line = catalog.translate(
            "damage_taken",
            &[("name", "Pikachu".to_string()), ("damage", "12".to_string())],
        );
        assert_eq!(line, "Pikachu took 12 damage!");
    }

    #[test]
    fn test_missing_key_renders_key() {
        let catalog = Catalog::empty();
        assert_eq!(catalog.translate("damage_taken", &[]), "damage_taken");
    }

    #[test]
    fn test_merge_json_overrides() {
        let mut catalog = Catalog::english();
        catalog
            .merge_json(r#"{"rose": "went up", "fell": "went down"}"#)
            .unwrap();

        assert_eq!(catalog.get("rose"), Some("went up"));
        assert_eq!(catalog.get("user_move_missed"), Some("Your attack missed!"));
        assert!(catalog.merge_json("[1, 2]").is_err());
    }

    #[test]
    fn test_render_full_turn() {
        let applied = vec![
            Instruction::Damage {
                side: SideId::Opponent,
                amount: 18,
            },
            Instruction::Boost {
                side: SideId::Opponent,
                stat: Stat::Def,
                amount: 1,
            },
            Instruction::Boost {
                side: SideId::User,
                stat: Stat::Spa,
                amount: -2,
            },
            Instruction::SideStart {
                side: SideId::Opponent,
                condition: "stealthrock".to_string(),
                amount: 1,
            },
            Instruction::WishDecrement { side: SideId::User },
        ];
        let delta = TurnDelta {
            opponent_missed: true,
            ..TurnDelta::default()
        };

        let lines = render(&header(), &applied, &delta, &Catalog::english());

        assert_eq!(
            lines,
            vec![
                "Pikachu (Lv. 50) vs. Geodude (Lv. 45)",
                "Pikachu used Thunder Shock!",
                "The opposing Geodude used Defense Curl!",
                "=== Battle Effects ===",
                "Geodude took 18 damage!",
                "Geodude's defense rose by 1!",
                "Pikachu's special-attack fell by 2!",
                "Stealth Rock took effect on the opposing side!",
                "The opposing attack missed!",
            ]
        );
    }

    #[test]
    fn test_render_status_and_weather_names() {
        let catalog = Catalog::english();
        let h = header();

        let line = |i: Instruction| render_instruction(&h, &i, &catalog).unwrap();

        assert_eq!(
            line(Instruction::ApplyStatus {
                side: SideId::User,
                status: "par".to_string()
            }),
            "Pikachu is afflicted with Paralysis!"
        );
        assert_eq!(
            line(Instruction::ApplyVolatileStatus {
                side: SideId::Opponent,
                volatile: "leechseed".to_string()
            }),
            "Geodude is affected by Leech Seed!"
        );
        assert_eq!(
            line(Instruction::ApplyVolatileStatus {
                side: SideId::Opponent,
                volatile: "glaive_rush".to_string()
            }),
            "Geodude is affected by Glaive Rush!"
        );
        assert_eq!(
            line(Instruction::WeatherStart {
                weather: "sandstorm".to_string(),
                previous: None
            }),
            "The weather became Sandstorm!"
        );
        assert_eq!(
            line(Instruction::WeatherStart {
                weather: "none".to_string(),
                previous: Some("sandstorm".to_string())
            }),
            "The weather returned to normal."
        );
    }

    #[test]
    fn test_negative_amounts_flip_hp_lines() {
        let catalog = Catalog::english();
        let h = header();

        assert_eq!(
            render_instruction(
                &h,
                &Instruction::Heal {
                    side: SideId::User,
                    amount: -25
                },
                &catalog
            ),
            Some("Pikachu took 25 damage!".to_string())
        );
        assert_eq!(
            render_instruction(
                &h,
                &Instruction::Damage {
                    side: SideId::Opponent,
                    amount: -10
                },
                &catalog
            ),
            Some("Geodude restored 10 HP!".to_string())
        );
    }

    #[test]
    fn test_zero_boost_renders_nothing() {
        let line = render_instruction(
            &header(),
            &Instruction::Boost {
                side: SideId::User,
                stat: Stat::Atk,
                amount: 0,
            },
            &Catalog::english(),
        );
        assert_eq!(line, None);
    }

    #[test]
    fn test_unknown_instruction_gets_placeholder_line() {
        let lines = render(
            &header(),
            &[Instruction::Other {
                tag: "change_type".to_string(),
                args: Vec::new(),
            }],
            &TurnDelta::default(),
            &Catalog::english(),
        );

        assert_eq!(lines.last().map(String::as_str), Some("Unhandled action: change_type"));
    }

    #[test]
    fn test_render_failure() {
        let err = crate::error::TurnError::MissingCombatantData {
            side: Some(SideId::User),
            field: "species",
        };
        let lines = render_failure(&err, &Catalog::english());
        assert_eq!(
            lines,
            vec!["The turn could not be resolved: Missing species for user combatant"]
        );
    }
}
