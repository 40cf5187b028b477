//! The runtime value domain.
//!
//! Values form a small tagged union. [`NULL`], [`TRUE`] and [`FALSE`] are
//! the canonical instances; boolean results always route through
//! [`Value::native_bool`], so identity comparison and value comparison
//! coincide for booleans and null.

use std::fmt;

/// The canonical null value.
pub const NULL: Value = Value::Null;

/// The canonical `true` boolean.
pub const TRUE: Value = Value::Boolean(true);

/// The canonical `false` boolean.
pub const FALSE: Value = Value::Boolean(false);

/// A runtime value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// The absent value; also the result of every construct the evaluator
    /// does not support.
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A boolean.
    Boolean(bool),
}

/// A value's tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Integer,
    Float,
    Boolean,
}

impl Value {
    /// The canonical boolean for a native `bool`.
    pub fn native_bool(value: bool) -> Value {
        if value {
            TRUE
        } else {
            FALSE
        }
    }

    /// This value's tag.
    pub fn kind(self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Textual rendering: `null`, the decimal integer, the shortest
    /// round-tripping decimal for floats, or lowercase `true`/`false`.
    pub fn inspect(self) -> String {
        self.to_string()
    }

    /// Coercion into the common numeric domain.
    ///
    /// Booleans map to 1 and 0, null to 0. Arithmetic and comparisons run
    /// over `f64` regardless of the operands' tags.
    pub fn as_number(self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Integer(value) => value as f64,
            Value::Float(value) => value,
            Value::Boolean(true) => 1.0,
            Value::Boolean(false) => 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Integer(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
        }
    }
}
