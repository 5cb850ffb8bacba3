use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr, VariantNames};

/// Ranking state of the chart.
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
pub enum RankStatus {
    #[strum(serialize = "ranked")]
    Ranked,
    #[strum(serialize = "approved")]
    Approved,
    #[strum(serialize = "loved")]
    Loved,
    #[strum(serialize = "unranked")]
    Unranked,
}

impl RankStatus {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Whether scores on a chart in this state award pp.
    pub fn awards_pp(&self) -> bool {
        matches!(self, Self::Ranked | Self::Approved)
    }
}

impl std::fmt::Display for RankStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
