mod difficulty;
mod mode;
mod mods;
mod stats;
mod status;

pub use difficulty::DifficultyInfo;
pub use mode::GameMode;
pub use mods::{ModSet, ModToggle};
pub use stats::{ChartStats, StatValue};
pub use status::RankStatus;

use serde::{Deserialize, Serialize};

/// The chart being depicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Beatmap {
    /// External beatmap identifier, always positive.
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub creator: String,
    /// Determines which mods are semantically meaningful.
    pub mode: GameMode,
    pub status: RankStatus,
    pub stats: ChartStats,
    pub difficulty: DifficultyInfo,
    pub mods: ModSet,
}
