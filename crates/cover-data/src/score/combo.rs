use serde::{Deserialize, Serialize};

/// Longest unbroken hit streak of the play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaxCombo {
    pub value: u32,
    /// True when `value` equals the chart's maximum achievable combo.
    /// The contract carries no chart-side maximum, so consumers that need
    /// this invariant must check it against their own chart data.
    pub perfect: bool,
}
