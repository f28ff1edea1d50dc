//! Error types shared by the direct and reflective operation paths

use thiserror::Error;

/// Error type for object operations.
///
/// The two paths fail differently on purpose: direct property access
/// on a wrong-kind target degrades to `Undefined`, while the
/// reflective primitives refuse with `TypeMismatch`. Only failures
/// that actually surface are represented here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    /// A callable's direct invocation slot was overridden to fail.
    /// Carries the override's message verbatim.
    #[error("{0}")]
    Invocation(String),
    /// An operation was attempted against a target of the wrong kind.
    #[error("expected {expected} target, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// A value that is not a callable was applied.
    #[error("{actual} is not callable")]
    NotCallable { actual: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display_is_verbatim() {
        let err = ObjectError::Invocation("Erro no apply no myObject".to_string());
        assert_eq!(err.to_string(), "Erro no apply no myObject");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = ObjectError::TypeMismatch {
            expected: "record",
            actual: "number",
        };
        assert_eq!(err.to_string(), "expected record target, got number");
    }
}
