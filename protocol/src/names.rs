//! Name normalization shared by the oracle boundary and transcripts

/// Normalize a display name into an oracle id ("Thunder Punch" -> "thunderpunch")
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Title-case an id or snake/kebab name for display ("stealth_rock" -> "Stealth Rock")
pub fn display_name(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_id() {
        assert_eq!(to_id("Thunder Punch"), "thunderpunch");
        assert_eq!(to_id("U-turn"), "uturn");
        assert_eq!(to_id("King's Shield"), "kingsshield");
        assert_eq!(to_id(""), "");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("stealth_rock"), "Stealth Rock");
        assert_eq!(display_name("thunderbolt"), "Thunderbolt");
        assert_eq!(display_name("mr-MIME"), "Mr Mime");
        assert_eq!(display_name(""), "");
    }
}
