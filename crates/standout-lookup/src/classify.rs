//! Capability checks for dynamically typed arguments.
//!
//! Every dynamic operation runs these checks before touching any element:
//! the container must be an iteratee and the predicate must be a function
//! with one input and one boolean output. The statically typed operations
//! get the same guarantees from trait bounds instead.

use tracing::debug;

use crate::error::{LookupError, Result};
use crate::func::{Func, Param};
use crate::kind::Kind;
use crate::value::Value;

/// Returns `true` if `value` is a sequence, array, mapping or text.
pub fn is_iteratee(value: &Value) -> bool {
    value.kind().is_iteratee()
}

/// Returns `true` if `value` is a function with the given arities.
///
/// # Example
///
/// ```
/// use standout_lookup::{is_function, Func, Value};
///
/// let pred = Value::Func(Func::predicate(|_| true));
/// assert!(is_function(&pred, 1, 1));
/// assert!(!is_function(&pred, 2, 1));
/// assert!(!is_function(&Value::from(1), 1, 1));
/// ```
pub fn is_function(value: &Value, in_arity: usize, out_arity: usize) -> bool {
    value
        .as_func()
        .is_some_and(|f| f.in_arity() == in_arity && f.out_arity() == out_arity)
}

/// Fails with [`LookupError::NotIterable`] unless `value` is an iteratee.
pub fn require_iteratee(value: &Value) -> Result<()> {
    if is_iteratee(value) {
        Ok(())
    } else {
        debug!(kind = %value.kind(), "rejected non-iterable container");
        Err(LookupError::NotIterable { kind: value.kind() })
    }
}

/// Validates that `value` is a one-input, one-boolean-output function.
///
/// Arity is checked first; the boolean output is a separate check so the
/// error names what is actually wrong.
pub fn require_predicate(value: &Value) -> Result<&Func> {
    let Some(func) = value.as_func() else {
        debug!(kind = %value.kind(), "rejected non-function predicate");
        return Err(LookupError::NotAFunction { kind: value.kind() });
    };
    if !is_function(value, 1, 1) {
        debug!(signature = %func.signature(), "rejected predicate arity");
        return Err(LookupError::ArityMismatch {
            expected_in: 1,
            expected_out: 1,
            actual_in: func.in_arity(),
            actual_out: func.out_arity(),
        });
    }
    let output = func.signature().outputs[0];
    if output != Param::Of(Kind::Bool) {
        debug!(signature = %func.signature(), "rejected non-boolean predicate");
        return Err(LookupError::NonBooleanOutput {
            actual: output.to_string(),
        });
    }
    Ok(func)
}
