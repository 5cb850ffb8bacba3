use serde::{Deserialize, Serialize};

/// The player depicted on the cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct User {
    /// External player identifier, always positive.
    pub id: u32,
    /// Display name, never empty.
    pub user_name: String,
    /// Country/region code (e.g. "US").
    pub code: String,
    /// Global leaderboard rank. 0 means no rank recorded.
    pub global_rank: u32,
    /// Country leaderboard rank. 0 means no rank recorded.
    pub country_rank: u32,
}
