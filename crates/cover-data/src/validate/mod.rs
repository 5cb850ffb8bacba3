//! Boundary validation for loose cover payloads.
//!
//! Producers hand over parsed JSON; consumers must be able to trust the
//! typed value without re-checking anything. [`validate`] walks the
//! untyped input once, collecting every violation instead of stopping at
//! the first, and only constructs the typed [`CoverRequest`] when the
//! whole payload is clean.

mod beatmap;
mod score;
mod user;

use std::str::FromStr;

use serde_json::{Map, Value};
use strum::VariantNames;
use tracing::{debug, warn};

use crate::beatmap::StatValue;
use crate::cover::CoverRequest;
use crate::error::{Result, ValidationError, Violation, ViolationKind};

/// Validate an untyped candidate value against the cover contract.
///
/// Pure function: no side effects beyond log output. On success the
/// returned value is structurally equal to the input; on failure the
/// error lists every violated field path and the reason.
pub fn validate(candidate: &Value) -> Result<CoverRequest> {
    let mut checker = Checker::new();
    let request = check_request(&mut checker, candidate);

    match request {
        Some(request) if !checker.has_violations() => {
            if request.beatmap.mods.dt.enabled && request.beatmap.mods.nc.enabled {
                warn!("dt and nc are both enabled; nc already implies the dt rate change");
            }
            debug!(
                "validated cover request for user {} on beatmap {}",
                request.user.id, request.beatmap.id
            );
            Ok(request)
        }
        _ => {
            let error = checker.into_error();
            debug!(
                "rejected cover request with {} violation(s)",
                error.violations().len()
            );
            Err(error)
        }
    }
}

fn check_request(checker: &mut Checker, candidate: &Value) -> Option<CoverRequest> {
    let map = checker.object(candidate, "$")?;
    checker.check_keys(map, "", &["user", "score", "beatmap", "comment"]);

    let user = map.get("user").and_then(|v| user::check(checker, v));
    let score = map.get("score").and_then(|v| score::check(checker, v));
    let beatmap = map.get("beatmap").and_then(|v| beatmap::check(checker, v));
    let comment = checker.string(map, "", "comment");

    Some(CoverRequest {
        user: user?,
        score: score?,
        beatmap: beatmap?,
        comment: comment?,
    })
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Accumulates violations while typed field accessors walk the payload.
///
/// Accessors return `None` when the field is unusable; the reason is
/// already recorded by then. A key that is absent altogether is reported
/// once by [`Checker::check_keys`], so accessors stay silent about it.
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    fn into_error(self) -> ValidationError {
        ValidationError::new(self.violations)
    }

    fn push(&mut self, path: String, kind: ViolationKind) {
        self.violations.push(Violation { path, kind });
    }

    fn mismatch(&mut self, path: String, expected: &'static str) {
        self.push(path, ViolationKind::TypeMismatch { expected });
    }

    fn out_of_range(&mut self, path: String, constraint: &'static str) {
        self.push(path, ViolationKind::OutOfRange { constraint });
    }

    /// Access a value as an object, recording a mismatch otherwise.
    /// `path` is the full path of the value itself.
    fn object<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a Map<String, Value>> {
        match value.as_object() {
            Some(map) => Some(map),
            None => {
                self.mismatch(path.to_string(), "object");
                None
            }
        }
    }

    /// Enforce an exact key set: every listed key present, nothing else.
    fn check_keys(&mut self, map: &Map<String, Value>, path: &str, keys: &[&str]) {
        for &key in keys {
            if !map.contains_key(key) {
                self.push(join(path, key), ViolationKind::MissingField);
            }
        }
        for key in map.keys() {
            if !keys.contains(&key.as_str()) {
                self.push(join(path, key), ViolationKind::UnexpectedKey);
            }
        }
    }

    fn number(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<f64> {
        let value = map.get(key)?;
        let field = join(path, key);
        match value.as_f64() {
            Some(n) if n.is_finite() => Some(n),
            Some(_) => {
                self.out_of_range(field, "must be finite");
                None
            }
            None => {
                self.mismatch(field, "number");
                None
            }
        }
    }

    fn non_negative(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<f64> {
        let n = self.number(map, path, key)?;
        if n < 0.0 {
            self.out_of_range(join(path, key), "must be non-negative");
            return None;
        }
        Some(n)
    }

    fn percentage(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<f64> {
        let n = self.number(map, path, key)?;
        if !(0.0..=100.0).contains(&n) {
            self.out_of_range(join(path, key), "must be within 0.0..=100.0");
            return None;
        }
        Some(n)
    }

    fn uint(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<u32> {
        let value = map.get(key)?;
        let field = join(path, key);
        if let Some(n) = value.as_u64() {
            return match u32::try_from(n) {
                Ok(v) => Some(v),
                Err(_) => {
                    self.out_of_range(field, "exceeds u32 range");
                    None
                }
            };
        }
        if value.as_i64().is_some() {
            self.out_of_range(field, "must be non-negative");
        } else {
            self.mismatch(field, "non-negative integer");
        }
        None
    }

    /// Non-negative integer that must also be at least 1.
    fn positive_id(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<u32> {
        let v = self.uint(map, path, key)?;
        if v == 0 {
            self.out_of_range(join(path, key), "must be positive");
            return None;
        }
        Some(v)
    }

    fn int(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<i32> {
        let value = map.get(key)?;
        let field = join(path, key);
        let Some(n) = value.as_i64() else {
            self.mismatch(field, "integer");
            return None;
        };
        match i32::try_from(n) {
            Ok(v) => Some(v),
            Err(_) => {
                self.out_of_range(field, "exceeds i32 range");
                None
            }
        }
    }

    fn string(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<String> {
        let value = map.get(key)?;
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.mismatch(join(path, key), "string");
                None
            }
        }
    }

    fn non_empty_string(
        &mut self,
        map: &Map<String, Value>,
        path: &str,
        key: &str,
    ) -> Option<String> {
        let s = self.string(map, path, key)?;
        if s.is_empty() {
            self.out_of_range(join(path, key), "must not be empty");
            return None;
        }
        Some(s)
    }

    fn boolean(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<bool> {
        let value = map.get(key)?;
        match value.as_bool() {
            Some(b) => Some(b),
            None => {
                self.mismatch(join(path, key), "boolean");
                None
            }
        }
    }

    /// Closed string enumeration; anything unparseable is reported with
    /// the full list of allowed spellings.
    fn enumeration<T>(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<T>
    where
        T: FromStr + VariantNames,
    {
        let value = map.get(key)?;
        let field = join(path, key);
        let Some(s) = value.as_str() else {
            self.mismatch(field, "string");
            return None;
        };
        match T::from_str(s) {
            Ok(v) => Some(v),
            Err(_) => {
                self.push(
                    field,
                    ViolationKind::NotInEnumeration {
                        allowed: T::VARIANTS,
                    },
                );
                None
            }
        }
    }

    /// Chart statistic: a finite number or a pre-formatted string.
    fn stat(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<StatValue> {
        let value = map.get(key)?;
        let field = join(path, key);
        match value {
            Value::String(s) => Some(StatValue::Formatted(s.clone())),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => Some(StatValue::Numeric(f)),
                _ => {
                    self.out_of_range(field, "must be finite");
                    None
                }
            },
            _ => {
                self.mismatch(field, "number or string");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_non_object_root_is_reported_at_dollar() {
        let error = validate(&json!(42)).unwrap_err();
        assert_eq!(error.violations().len(), 1);
        let violation = error.find("$").unwrap();
        assert_eq!(
            violation.kind,
            ViolationKind::TypeMismatch { expected: "object" }
        );
    }

    #[test]
    fn test_missing_top_level_fields_all_reported() {
        let error = validate(&json!({})).unwrap_err();
        for path in ["user", "score", "beatmap", "comment"] {
            assert_eq!(
                error.find(path).map(|v| &v.kind),
                Some(&ViolationKind::MissingField),
                "expected missing-field violation at {path}"
            );
        }
    }

    #[test]
    fn test_unexpected_top_level_key() {
        let error = validate(&json!({"renderHints": {}})).unwrap_err();
        assert_eq!(
            error.find("renderHints").map(|v| &v.kind),
            Some(&ViolationKind::UnexpectedKey)
        );
    }
}
