//! Runtime values held by records and produced by callables

use std::fmt;

use crate::callable::Callable;
use crate::error::ObjectError;
use crate::key::SymbolId;
use crate::record::Record;

/// A runtime value.
///
/// `Undefined` doubles as the silent result of direct property access
/// on a missing key or a wrong-kind target.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Bool(bool),
    Int(i64),
    Str(String),
    Symbol(SymbolId),
    Record(Record),
    Callable(Callable),
}

impl Value {
    /// Convenience constructor for string values.
    pub fn str(s: &str) -> Self {
        Self::Str(s.to_string())
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Truthiness: `Undefined`, `false`, `0`, and `""` are falsy,
    /// everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Str(s) => !s.is_empty(),
            Self::Symbol(_) | Self::Record(_) | Self::Callable(_) => true,
        }
    }

    /// Kind name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "number",
            Self::Str(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Record(_) => "record",
            Self::Callable(_) => "callable",
        }
    }

    /// Borrow the record inside, or fail with `TypeMismatch`.
    pub fn as_record(&self) -> Result<&Record, ObjectError> {
        match self {
            Self::Record(rec) => Ok(rec),
            other => Err(ObjectError::TypeMismatch {
                expected: "record",
                actual: other.type_name(),
            }),
        }
    }

    /// Mutably borrow the record inside, or fail with `TypeMismatch`.
    pub fn as_record_mut(&mut self) -> Result<&mut Record, ObjectError> {
        match self {
            Self::Record(rec) => Ok(rec),
            other => Err(ObjectError::TypeMismatch {
                expected: "record",
                actual: other.type_name(),
            }),
        }
    }

    /// Borrow the callable inside, or fail with `NotCallable`.
    pub fn as_callable(&self) -> Result<&Callable, ObjectError> {
        match self {
            Self::Callable(c) => Ok(c),
            other => Err(ObjectError::NotCallable {
                actual: other.type_name(),
            }),
        }
    }

    /// Extract an integer, or fail with `TypeMismatch`.
    pub fn as_int(&self) -> Result<i64, ObjectError> {
        match self {
            Self::Int(n) => Ok(*n),
            other => Err(ObjectError::TypeMismatch {
                expected: "number",
                actual: other.type_name(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Symbol(id) => write!(f, "Symbol({})", id.0),
            Self::Record(rec) => write!(f, "[record; {} keys]", rec.len()),
            Self::Callable(c) => write!(f, "[callable {}]", c.name()),
        }
    }
}
