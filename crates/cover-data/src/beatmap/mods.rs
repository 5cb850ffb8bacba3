use serde::{Deserialize, Serialize};

/// One selectable modifier on the cover's mod strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModToggle {
    pub enabled: bool,
}

/// The fixed set of gameplay modifiers a cover can display, one toggle
/// per mod. A fixed record rather than a map: every key is always
/// present and no other key can exist.
///
/// `dt` and `nc` are mutually exclusive in the game's real rules, but the
/// contract does not enforce that; see the validation boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModSet {
    pub ez: ModToggle,
    pub nf: ModToggle,
    pub ht: ModToggle,
    pub hd: ModToggle,
    pub hr: ModToggle,
    pub dt: ModToggle,
    pub nc: ModToggle,
    pub fl: ModToggle,
    pub sd: ModToggle,
    pub pf: ModToggle,
    pub rx: ModToggle,
    pub ap: ModToggle,
    pub so: ModToggle,
    pub v2: ModToggle,
}

impl ModSet {
    /// Wire keys, in display order.
    pub const KEYS: [&'static str; 14] = [
        "ez", "nf", "ht", "hd", "hr", "dt", "nc", "fl", "sd", "pf", "rx", "ap", "so", "v2",
    ];

    fn entries(&self) -> [(&'static str, ModToggle); 14] {
        [
            ("ez", self.ez),
            ("nf", self.nf),
            ("ht", self.ht),
            ("hd", self.hd),
            ("hr", self.hr),
            ("dt", self.dt),
            ("nc", self.nc),
            ("fl", self.fl),
            ("sd", self.sd),
            ("pf", self.pf),
            ("rx", self.rx),
            ("ap", self.ap),
            ("so", self.so),
            ("v2", self.v2),
        ]
    }

    /// Enabled mod keys, in display order.
    pub fn active(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, toggle)| toggle.enabled)
            .map(|(key, _)| key)
            .collect()
    }

    pub fn is_nomod(&self) -> bool {
        self.entries().into_iter().all(|(_, toggle)| !toggle.enabled)
    }
}

impl std::fmt::Display for ModSet {
    /// Concatenated uppercase acronyms, or "NM" when nothing is enabled.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_nomod() {
            return write!(f, "NM");
        }
        for key in self.active() {
            write!(f, "{}", key.to_uppercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hddt() -> ModSet {
        ModSet {
            hd: ModToggle { enabled: true },
            dt: ModToggle { enabled: true },
            ..ModSet::default()
        }
    }

    #[test]
    fn test_active_preserves_display_order() {
        assert_eq!(hddt().active(), vec!["hd", "dt"]);
        assert!(ModSet::default().active().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(hddt().to_string(), "HDDT");
        assert_eq!(ModSet::default().to_string(), "NM");
    }

    #[test]
    fn test_default_is_nomod() {
        assert!(ModSet::default().is_nomod());
        assert!(!hddt().is_nomod());
    }

    #[test]
    fn test_unknown_mod_key_is_rejected() {
        let mut value = serde_json::to_value(ModSet::default()).unwrap();
        value["touch"] = serde_json::json!({"enabled": true});
        assert!(serde_json::from_value::<ModSet>(value).is_err());
    }
}
