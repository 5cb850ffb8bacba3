use serde::{Deserialize, Serialize};

use crate::beatmap::Beatmap;
use crate::score::Score;
use crate::user::User;

/// Everything a renderer needs to draw one score cover.
///
/// Constructed once by a producer from upstream score and beatmap data,
/// handed to the consumer by value or read-only reference, and discarded
/// after rendering. All four fields are required; the serialized field
/// names are the interop contract and must not change.
///
/// A value obtained through [`crate::validate::validate`] satisfies every
/// contract invariant; consumers may use it without further checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverRequest {
    pub user: User,
    pub score: Score,
    pub beatmap: Beatmap,
    /// Free-text comment shown on the cover; may be empty, no length bound.
    pub comment: String,
}
