mod combo;
mod status;

pub use combo::MaxCombo;
pub use status::{ScoreStatus, StatusKind};

use serde::{Deserialize, Serialize};

/// Performance numbers for the play being depicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Score {
    /// Performance points, finite and non-negative.
    pub pp: f64,
    pub status: ScoreStatus,
    /// Grade/position indicator; semantics are producer convention.
    pub rank: i32,
    /// Accuracy percentage in `0.0..=100.0`.
    pub accuracy: f64,
    pub max_combo: MaxCombo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_max_combo_wire_name() {
        let score = Score {
            pp: 250.5,
            status: ScoreStatus {
                kind: StatusKind::Ss,
                value: 0.0,
            },
            rank: 1,
            accuracy: 100.0,
            max_combo: MaxCombo {
                value: 500,
                perfect: true,
            },
        };
        let value = serde_json::to_value(&score).unwrap();
        assert_eq!(value["maxCombo"], json!({"value": 500, "perfect": true}));
        assert_eq!(value["status"]["type"], json!("ss"));
    }
}
