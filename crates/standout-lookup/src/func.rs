//! Dynamic callables with a declared signature.
//!
//! A [`Func`] carries its parameter and return kinds next to the body, so
//! a call site can check arity and types before invoking it. This is what
//! the classifier inspects when a predicate arrives as a [`Value`].

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::{LookupError, Result};
use crate::kind::Kind;
use crate::value::Value;

/// Declared type of a parameter or return slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Accepts a value of any kind.
    Any,
    /// Accepts only values of the given kind.
    Of(Kind),
}

impl Param {
    /// Returns `true` if a value of `kind` can be assigned to this slot.
    pub fn accepts(self, kind: Kind) -> bool {
        match self {
            Param::Any => true,
            Param::Of(expected) => expected == kind,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Any => write!(f, "any"),
            Param::Of(kind) => write!(f, "{kind}"),
        }
    }
}

/// Parameter and return slots of a [`Func`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub inputs: Vec<Param>,
    pub outputs: Vec<Param>,
}

impl Signature {
    /// Returns `true` for exactly one input and one `Bool` output.
    pub fn is_predicate(&self) -> bool {
        self.inputs.len() == 1 && self.outputs == [Param::Of(Kind::Bool)]
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) -> ({})", join(&self.inputs), join(&self.outputs))
    }
}

fn join(params: &[Param]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

type Body = dyn Fn(&[Value]) -> Vec<Value> + Send + Sync;

/// Callable value with a declared signature.
///
/// Cloning is cheap and clones share identity: two `Func`s are equal only
/// when they are clones of the same original.
///
/// # Example
///
/// ```
/// use standout_lookup::{Func, Value};
///
/// let is_two = Func::predicate(|v| v.as_number().is_some_and(|n| n == 2u8.into()));
/// assert!(is_two.test(&Value::from(2)).unwrap());
/// assert!(is_two.signature().is_predicate());
/// ```
#[derive(Clone)]
pub struct Func {
    signature: Signature,
    body: Arc<Body>,
}

impl Func {
    /// Creates a function from its signature and body.
    pub fn new<I, O, F>(inputs: I, outputs: O, body: F) -> Self
    where
        I: IntoIterator<Item = Param>,
        O: IntoIterator<Item = Param>,
        F: Fn(&[Value]) -> Vec<Value> + Send + Sync + 'static,
    {
        Func {
            signature: Signature {
                inputs: inputs.into_iter().collect(),
                outputs: outputs.into_iter().collect(),
            },
            body: Arc::new(body),
        }
    }

    /// Creates a one-input predicate accepting any kind.
    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::typed_predicate(Param::Any, test)
    }

    /// Creates a one-input predicate whose input slot is `param`.
    pub fn typed_predicate<F>(param: Param, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Func::new([param], [Param::Of(Kind::Bool)], move |args| {
            vec![Value::Bool(test(&args[0]))]
        })
    }

    /// Creates a string predicate matching a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidPattern`] if `pattern` does not compile.
    pub fn matches(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Self::typed_predicate(Param::Of(Kind::String), move |v| {
            v.as_str().is_some_and(|s| regex.is_match(s))
        }))
    }

    /// Returns the declared signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Number of declared inputs.
    pub fn in_arity(&self) -> usize {
        self.signature.inputs.len()
    }

    /// Number of declared outputs.
    pub fn out_arity(&self) -> usize {
        self.signature.outputs.len()
    }

    /// Returns `true` if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Func) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }

    /// Checks that `args` fit the declared inputs, without calling the body.
    pub fn check_args(&self, args: &[Value]) -> Result<()> {
        if args.len() != self.in_arity() {
            return Err(LookupError::ArgumentCount {
                declared: self.in_arity(),
                given: args.len(),
            });
        }
        for (param, arg) in self.signature.inputs.iter().zip(args) {
            self.check_param(*param, arg.kind())?;
        }
        Ok(())
    }

    /// Checks that a value of `kind` can be passed as input `index`.
    pub(crate) fn check_input(&self, index: usize, kind: Kind) -> Result<()> {
        match self.signature.inputs.get(index) {
            Some(param) => self.check_param(*param, kind),
            None => Ok(()),
        }
    }

    fn check_param(&self, param: Param, kind: Kind) -> Result<()> {
        if param.accepts(kind) {
            Ok(())
        } else {
            Err(LookupError::ParamMismatch {
                expected: param.to_string(),
                actual: kind,
            })
        }
    }

    /// Calls the function, checking arguments and results against the signature.
    pub fn call(&self, args: &[Value]) -> Result<Vec<Value>> {
        self.check_args(args)?;
        let results = (self.body)(args);
        let fits = results.len() == self.out_arity()
            && self
                .signature
                .outputs
                .iter()
                .zip(&results)
                .all(|(param, value)| param.accepts(value.kind()));
        if !fits {
            return Err(LookupError::ReturnMismatch {
                expected: join(&self.signature.outputs),
                actual: results
                    .iter()
                    .map(|v| v.kind().as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        Ok(results)
    }

    /// Calls a predicate on a single argument.
    pub fn test(&self, arg: &Value) -> Result<bool> {
        let results = self.call(std::slice::from_ref(arg))?;
        let first = results.first();
        first.and_then(Value::as_bool).ok_or_else(|| LookupError::ReturnMismatch {
            expected: Kind::Bool.to_string(),
            actual: first.map_or("nothing", |v| v.kind().as_str()).to_string(),
        })
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Func{}", self.signature)
    }
}
