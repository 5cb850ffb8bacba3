use serde_json::Value;

use super::Checker;
use crate::score::{MaxCombo, Score, ScoreStatus, StatusKind};

pub(super) fn check(checker: &mut Checker, value: &Value) -> Option<Score> {
    let map = checker.object(value, "score")?;
    checker.check_keys(map, "score", &["pp", "status", "rank", "accuracy", "maxCombo"]);

    let pp = checker.non_negative(map, "score", "pp");
    let status = map.get("status").and_then(|v| check_status(checker, v));
    let rank = checker.int(map, "score", "rank");
    let accuracy = checker.percentage(map, "score", "accuracy");
    let max_combo = map.get("maxCombo").and_then(|v| check_max_combo(checker, v));

    Some(Score {
        pp: pp?,
        status: status?,
        rank: rank?,
        accuracy: accuracy?,
        max_combo: max_combo?,
    })
}

fn check_status(checker: &mut Checker, value: &Value) -> Option<ScoreStatus> {
    let map = checker.object(value, "score.status")?;
    checker.check_keys(map, "score.status", &["type", "value"]);

    let kind = checker.enumeration::<StatusKind>(map, "score.status", "type");
    let value = checker.number(map, "score.status", "value");

    Some(ScoreStatus {
        kind: kind?,
        value: value?,
    })
}

fn check_max_combo(checker: &mut Checker, value: &Value) -> Option<MaxCombo> {
    let map = checker.object(value, "score.maxCombo")?;
    checker.check_keys(map, "score.maxCombo", &["value", "perfect"]);

    let combo = checker.uint(map, "score.maxCombo", "value");
    let perfect = checker.boolean(map, "score.maxCombo", "perfect");

    Some(MaxCombo {
        value: combo?,
        perfect: perfect?,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ViolationKind;

    fn valid_score() -> Value {
        json!({
            "pp": 250.5,
            "status": {"type": "fc", "value": 480.0},
            "rank": 3,
            "accuracy": 98.7,
            "maxCombo": {"value": 480, "perfect": false},
        })
    }

    fn run(value: Value) -> (Option<Score>, Vec<crate::error::Violation>) {
        let mut checker = Checker::new();
        let score = check(&mut checker, &value);
        (score, checker.violations)
    }

    #[test]
    fn test_valid_score() {
        let (score, violations) = run(valid_score());
        assert!(violations.is_empty());
        let score = score.unwrap();
        assert_eq!(score.status.kind, StatusKind::Fc);
        assert_eq!(score.max_combo.value, 480);
    }

    #[test]
    fn test_status_type_outside_enumeration() {
        let mut value = valid_score();
        value["status"]["type"] = json!("ranked");
        let (score, violations) = run(value);
        assert!(score.is_none());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "score.status.type");
        match &violations[0].kind {
            ViolationKind::NotInEnumeration { allowed } => {
                assert_eq!(*allowed, &["ss", "fc", "fail", "miss", "sb"]);
            }
            other => panic!("expected NotInEnumeration, got {other:?}"),
        }
    }

    #[test]
    fn test_accuracy_above_100_rejected() {
        let mut value = valid_score();
        value["accuracy"] = json!(100.5);
        let (_, violations) = run(value);
        assert_eq!(violations[0].path, "score.accuracy");
        assert!(matches!(
            violations[0].kind,
            ViolationKind::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_negative_pp_rejected() {
        let mut value = valid_score();
        value["pp"] = json!(-1.0);
        let (_, violations) = run(value);
        assert_eq!(violations[0].path, "score.pp");
    }

    #[test]
    fn test_max_combo_requires_exact_keys() {
        let mut value = valid_score();
        value["maxCombo"] = json!({"value": 480});
        let (score, violations) = run(value);
        assert!(score.is_none());
        assert_eq!(violations[0].path, "score.maxCombo.perfect");
        assert_eq!(violations[0].kind, ViolationKind::MissingField);
    }

    #[test]
    fn test_status_value_wrong_type() {
        let mut value = valid_score();
        value["status"]["value"] = json!("480");
        let (_, violations) = run(value);
        assert_eq!(violations[0].path, "score.status.value");
        assert!(matches!(
            violations[0].kind,
            ViolationKind::TypeMismatch { .. }
        ));
    }
}
