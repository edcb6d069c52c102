//! The generalized equality relation.
//!
//! Membership and search compare a caller-supplied target against stored
//! elements (or mapping keys) with one relation:
//!
//! 1. Values of different kinds are unequal.
//! 2. Primitives compare exactly: null, booleans, numbers, strings, and
//!    functions by identity.
//! 3. Aggregates fall back to [`deep_equal`], which recurses through
//!    sequences, arrays, mappings and structs.
//!
//! There is no tolerance for floats. Integers stored as signed and unsigned
//! compare by value; an integer never equals a float.

use crate::value::Value;

/// Which side of a `(key, element)` pair a comparison looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Compare against the element.
    #[default]
    Value,
    /// Compare against the key (mappings).
    Key,
}

impl Mode {
    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Value => "value",
            Mode::Key => "key",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two primitives.
///
/// Returns `None` when both operands are aggregates of the same kind, where
/// only a structural comparison can decide.
pub fn primitive_equal(a: &Value, b: &Value) -> Option<bool> {
    match (a, b) {
        (Value::Null, Value::Null) => Some(true),
        (Value::Bool(x), Value::Bool(y)) => Some(x == y),
        (Value::Number(x), Value::Number(y)) => Some(x.exact_eq(*y)),
        (Value::String(x), Value::String(y)) => Some(x == y),
        (Value::Func(x), Value::Func(y)) => Some(x.ptr_eq(y)),
        _ if a.kind() == b.kind() && a.kind().is_aggregate() => None,
        _ => Some(false),
    }
}

/// Structural equality.
///
/// Sequences and arrays need equal length and pairwise-equal elements.
/// Mappings need the same key set and equal values under each key,
/// independent of insertion order. Structs need the same name and field
/// set, independent of field order.
///
/// Floats follow IEEE comparison, so `NaN` equals nothing, itself included.
/// The relation is therefore reflexive only for values that hold no `NaN`;
/// an aggregate containing one is unequal to itself.
///
/// # Example
///
/// ```
/// use standout_lookup::{deep_equal, Value};
///
/// let a = Value::map([("x", Value::seq([1, 2])), ("y", Value::Null)]);
/// let b = Value::map([("y", Value::Null), ("x", Value::seq([1, 2]))]);
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &Value::map([("x", Value::seq([1]))])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    if let Some(eq) = primitive_equal(a, b) {
        return eq;
    }
    match (a, b) {
        (Value::Seq(x), Value::Seq(y)) | (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| deep_equal(l, r))
        }
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| deep_equal(v, w)))
        }
        (Value::Struct(x), Value::Struct(y)) => {
            x.name == y.name
                && x.fields.len() == y.fields.len()
                && x.fields
                    .iter()
                    .all(|(name, v)| y.field(name).is_some_and(|w| deep_equal(v, w)))
        }
        _ => false,
    }
}

/// Builds a matcher for `target`.
///
/// The returned closure takes a `(key, element)` pair and compares `target`
/// against the side selected by `mode`, primitives first and structurally
/// when both sides are aggregates.
///
/// # Example
///
/// ```
/// use standout_lookup::{equal, Mode, Value};
///
/// let target = Value::from("y");
/// let by_key = equal(&target, Mode::Key);
/// assert!(by_key(&Value::from("y"), &Value::from(2)));
/// assert!(!by_key(&Value::from("x"), &Value::from("y")));
/// ```
pub fn equal(target: &Value, mode: Mode) -> impl Fn(&Value, &Value) -> bool + '_ {
    move |key, candidate| {
        let actual = match mode {
            Mode::Key => key,
            Mode::Value => candidate,
        };
        primitive_equal(target, actual).unwrap_or_else(|| deep_equal(target, actual))
    }
}
