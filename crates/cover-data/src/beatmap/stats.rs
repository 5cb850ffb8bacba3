use serde::{Deserialize, Serialize};

/// A chart statistic as it should appear on the cover: either a raw
/// number, or a string the producer already formatted (e.g. `"1:23"`
/// for time, `"180~220"` for a variable BPM).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Numeric(f64),
    Formatted(String),
}

impl StatValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Formatted(_) => None,
        }
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Formatted(s) => write!(f, "{}", s),
        }
    }
}

/// The six chart statistics shown on a cover, as a fixed record: the
/// exact-key-set invariant is structural, not a runtime check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartStats {
    pub time: StatValue,
    pub bpm: StatValue,
    pub ar: StatValue,
    pub cs: StatValue,
    pub od: StatValue,
    pub hp: StatValue,
}

impl ChartStats {
    /// Wire keys, in display order.
    pub const KEYS: [&'static str; 6] = ["time", "bpm", "ar", "cs", "od", "hp"];
}
