use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr, VariantNames};

/// Ruleset the score was set on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[strum(serialize = "osu")]
    Osu,
    #[strum(serialize = "taiko")]
    Taiko,
    #[strum(serialize = "fruits")]
    Fruits,
    #[strum(serialize = "mania")]
    Mania,
}

impl GameMode {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Get the full ruleset name (for display on the cover).
    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::Osu => "osu!",
            Self::Taiko => "osu!taiko",
            Self::Fruits => "osu!catch",
            Self::Mania => "osu!mania",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_game_mode_from_str() {
        assert_eq!(GameMode::from_str("osu"), Ok(GameMode::Osu));
        assert_eq!(GameMode::from_str("fruits"), Ok(GameMode::Fruits));
        assert!(GameMode::from_str("catch").is_err());
        assert!(GameMode::from_str("std").is_err());
    }

    #[test]
    fn test_expand_name() {
        assert_eq!(GameMode::Osu.expand_name(), "osu!");
        assert_eq!(GameMode::Fruits.expand_name(), "osu!catch");
    }
}
