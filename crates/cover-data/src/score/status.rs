use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr, VariantNames};

/// Clear-state badge shown on the cover.
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
pub enum StatusKind {
    /// Perfect accuracy clear.
    #[strum(serialize = "ss")]
    Ss,
    /// Full combo.
    #[strum(serialize = "fc")]
    Fc,
    #[strum(serialize = "fail")]
    Fail,
    #[strum(serialize = "miss")]
    Miss,
    /// Slider break.
    #[strum(serialize = "sb")]
    Sb,
}

impl StatusKind {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Whether the badge marks a completed play.
    pub fn is_clear(&self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Clear-state badge with its associated count.
///
/// The meaning of `value` follows `kind` by producer convention: highest
/// combo for `fc`/`sb`, miss count for `miss`, fail position for `fail`,
/// unused for `ss`. The contract does not constrain the pairing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreStatus {
    #[serde(rename = "type")]
    pub kind: StatusKind,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_status_kind_from_str() {
        assert_eq!(StatusKind::from_str("ss"), Ok(StatusKind::Ss));
        assert_eq!(StatusKind::from_str("fc"), Ok(StatusKind::Fc));
        assert_eq!(StatusKind::from_str("sb"), Ok(StatusKind::Sb));
        assert!(StatusKind::from_str("ranked").is_err());
        assert!(StatusKind::from_str("SS").is_err());
    }

    #[test]
    fn test_status_kind_variants() {
        assert_eq!(StatusKind::VARIANTS, &["ss", "fc", "fail", "miss", "sb"]);
    }

    #[test]
    fn test_status_serializes_with_type_key() {
        let status = ScoreStatus {
            kind: StatusKind::Miss,
            value: 2.0,
        };
        let value = serde_json::to_value(status).unwrap();
        assert_eq!(value, serde_json::json!({"type": "miss", "value": 2.0}));
    }

    #[test]
    fn test_is_clear() {
        assert!(StatusKind::Ss.is_clear());
        assert!(StatusKind::Miss.is_clear());
        assert!(!StatusKind::Fail.is_clear());
    }
}
