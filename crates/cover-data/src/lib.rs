pub mod beatmap;
pub mod cover;
pub mod error;
pub mod score;
pub mod user;
pub mod validate;

pub use beatmap::{
    Beatmap, ChartStats, DifficultyInfo, GameMode, ModSet, ModToggle, RankStatus, StatValue,
};
pub use cover::CoverRequest;
pub use error::{Result, ValidationError, Violation, ViolationKind};
pub use score::{MaxCombo, Score, ScoreStatus, StatusKind};
pub use user::User;
pub use validate::validate;
