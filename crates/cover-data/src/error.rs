use thiserror::Error;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("missing required field")]
    MissingField,

    #[error("expected {expected}")]
    TypeMismatch { expected: &'static str },

    #[error("not one of: {}", .allowed.join(", "))]
    NotInEnumeration { allowed: &'static [&'static str] },

    #[error("unexpected key")]
    UnexpectedKey,

    #[error("{constraint}")]
    OutOfRange { constraint: &'static str },
}

/// A single rejected field, identified by its dotted path from the
/// request root (e.g. `beatmap.mods.dt`). The root itself is `$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

/// Validation failure carrying every violation found in one pass over
/// the candidate value. Never constructed empty.
#[derive(Debug)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Check whether any violation was recorded at the given field path.
    pub fn contains(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    /// Find the violation recorded at the given field path, if any.
    pub fn find(&self, path: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.path == path)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cover request failed validation: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
