#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{Instruction, SideId, Stat, parse_instruction};

    #[test]
    fn test_parse_damage() {
        let instruction = parse_instruction("damage|opponent|20").unwrap();

        assert_eq!(
            instruction,
            Instruction::Damage {
                side: SideId::Opponent,
                amount: 20
            }
        );
    }

    #[test]
    fn test_parse_leading_pipe_and_float_amount() {
        let instruction = parse_instruction("|heal|user|12.6").unwrap();

        assert_eq!(
            instruction,
            Instruction::Heal {
                side: SideId::User,
                amount: 13
            }
        );
    }

    #[test]
    fn test_parse_negative_heal_keeps_sign() {
        assert_eq!(
            parse_instruction("heal|user|-25").unwrap(),
            Instruction::Heal {
                side: SideId::User,
                amount: -25
            }
        );
        assert_eq!(
            Instruction::from_json(&json!(["damage", "opponent", -7.4])).unwrap(),
            Instruction::Damage {
                side: SideId::Opponent,
                amount: -7
            }
        );
        assert_eq!(
            parse_instruction("heal|user|-25").unwrap().to_wire_format(),
            "heal|user|-25"
        );
    }

    #[test]
    fn test_parse_negative_wish_amount_is_zero() {
        assert_eq!(
            parse_instruction("wish_start|user|-5").unwrap(),
            Instruction::WishStart {
                side: SideId::User,
                amount: 0
            }
        );
    }

    #[test]
    fn test_parse_boost_and_unboost() {
        assert_eq!(
            parse_instruction("boost|user|atk|2").unwrap(),
            Instruction::Boost {
                side: SideId::User,
                stat: Stat::Atk,
                amount: 2
            }
        );
        assert_eq!(
            parse_instruction("unboost|opponent|spe|1").unwrap(),
            Instruction::Boost {
                side: SideId::Opponent,
                stat: Stat::Spe,
                amount: -1
            }
        );
    }

    #[test]
    fn test_parse_side_start_defaults_to_one_layer() {
        assert_eq!(
            parse_instruction("side_start|opponent|stealthrock").unwrap(),
            Instruction::SideStart {
                side: SideId::Opponent,
                condition: "stealthrock".to_string(),
                amount: 1
            }
        );
    }

    #[test]
    fn test_parse_weather_start_without_previous() {
        assert_eq!(
            parse_instruction("weather_start|raindance|none").unwrap(),
            Instruction::WeatherStart {
                weather: "raindance".to_string(),
                previous: None
            }
        );
    }

    #[test]
    fn test_parse_weather_ending() {
        assert_eq!(
            parse_instruction("weather_start|none|sunnyday").unwrap(),
            Instruction::WeatherStart {
                weather: "none".to_string(),
                previous: Some("sunnyday".to_string())
            }
        );
        assert!(parse_instruction("weather_start|").is_err());
    }

    #[test]
    fn test_parse_unknown_tag_is_kept() {
        let instruction = parse_instruction("change_type|user|fire").unwrap();

        assert_eq!(
            instruction,
            Instruction::Other {
                tag: "change_type".to_string(),
                args: vec!["user".to_string(), "fire".to_string()]
            }
        );
        assert_eq!(instruction.tag(), "change_type");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_instruction("").is_err());
        assert!(parse_instruction("damage|nobody|10").is_err());
        assert!(parse_instruction("damage|user").is_err());
        assert!(parse_instruction("damage|user|lots").is_err());
        assert!(parse_instruction("boost|user|charm|1").is_err());
    }

    #[test]
    fn test_from_json_tuple() {
        let instruction =
            Instruction::from_json(&json!(["apply_volatile_status", "opponent", "confusion"]))
                .unwrap();

        assert_eq!(
            instruction,
            Instruction::ApplyVolatileStatus {
                side: SideId::Opponent,
                volatile: "confusion".to_string()
            }
        );

        assert!(Instruction::from_json(&json!({"damage": 3})).is_err());
    }

    #[test]
    fn test_wire_format_matches_parser() {
        let line = "side_start|user|spikes|2";
        let instruction = parse_instruction(line).unwrap();

        assert_eq!(instruction.to_wire_format(), line);
        assert_eq!(instruction.to_string(), line);
        assert_eq!(Instruction::ToggleTrickRoom.to_wire_format(), "toggle_trickroom");
    }

    #[test]
    fn test_damages_requires_positive_amount() {
        let hit = Instruction::Damage {
            side: SideId::Opponent,
            amount: 5,
        };
        let graze = Instruction::Damage {
            side: SideId::Opponent,
            amount: 0,
        };
        let drain = Instruction::Damage {
            side: SideId::Opponent,
            amount: -5,
        };

        assert!(hit.damages(SideId::Opponent));
        assert!(!hit.damages(SideId::User));
        assert!(!graze.damages(SideId::Opponent));
        assert!(!drain.damages(SideId::Opponent));
    }

    #[test]
    fn test_side_id_opposite() {
        assert_eq!(SideId::User.opposite(), SideId::Opponent);
        assert_eq!(SideId::parse("opponent"), Some(SideId::Opponent));
        assert_eq!(SideId::parse("p1"), None);
    }
}
