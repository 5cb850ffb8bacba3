use serde::{Deserialize, Serialize};

/// Difficulty line shown on the cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DifficultyInfo {
    /// Star rating, finite and non-negative.
    pub star: f64,
    /// Difficulty name (e.g. "Insane"), never empty.
    pub name: String,
}
