//! Error types for the lookup crate.

use thiserror::Error;

use crate::kind::Kind;

/// Errors reported when a dynamically typed call fails validation.
///
/// Every variant is raised before the first element of the container is
/// handed to a predicate, with the exception of [`LookupError::ReturnMismatch`],
/// which reports a function body that broke its own declared signature.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The container argument is not a sequence, array, mapping or text.
    #[error("first argument must be an iteratee, got {kind}")]
    NotIterable { kind: Kind },

    /// The predicate argument is not a function at all.
    #[error("second argument must be a function, got {kind}")]
    NotAFunction { kind: Kind },

    /// The predicate has the wrong number of inputs or outputs.
    #[error(
        "function must take {expected_in} argument(s) and return {expected_out} value(s), \
         it takes {actual_in} and returns {actual_out}"
    )]
    ArityMismatch {
        expected_in: usize,
        expected_out: usize,
        actual_in: usize,
        actual_out: usize,
    },

    /// A function was called with a different number of arguments than it
    /// declares.
    #[error("function declares {declared} input(s), called with {given} argument(s)")]
    ArgumentCount { declared: usize, given: usize },

    /// The predicate's declared output is not a boolean.
    #[error("return argument should be a boolean, got {actual}")]
    NonBooleanOutput { actual: String },

    /// An argument cannot be assigned to the declared parameter.
    #[error("parameter expects {expected}, got {actual}")]
    ParamMismatch { expected: String, actual: Kind },

    /// A function body returned values that contradict its signature.
    #[error("function declared to return {expected}, returned {actual}")]
    ReturnMismatch { expected: String, actual: String },

    /// The container kind is outside the set an operation supports.
    #[error("type {kind} is not supported by {op}, supported types are {supported}")]
    UnsupportedKind {
        op: &'static str,
        kind: Kind,
        supported: &'static str,
    },

    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A serializable value could not be converted.
    #[error("value cannot be converted: {0}")]
    Conversion(#[from] serde_json::Error),
}

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
