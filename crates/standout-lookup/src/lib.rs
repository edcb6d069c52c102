//! Lookup - Generic membership, search and filter queries.
//!
//! Lookup provides a small set of operations that work the same way over
//! every container shape: sequences, fixed-size arrays, mappings and text.
//!
//! - `filter`: elements a predicate accepts
//! - `find` / `find_key`: first element (and its key) a predicate accepts
//! - `index_of` / `last_index_of`: position of a value or substring
//! - `contains` / `contains_key`: membership of a value, substring or key
//! - `every` / `some`: membership of all / any of several values (by key
//!   with `every_key` / `some_key`)
//!
//! The operations come in two flavours:
//!
//! - **Typed**, as free functions at the crate root. Containers implement
//!   [`Iteratee`], [`Contains`] or [`Position`]; predicates are closures.
//!   Misuse is a compile error.
//! - **Dynamic**, as methods on [`Lookup`] (and free functions in
//!   [`lookup`]). Containers, needles and predicates are [`Value`]s whose
//!   kinds are checked at call time; misuse is a [`LookupError`].
//!
//! # Quick Start
//!
//! ```rust
//! use standout_lookup::{contains, every, filter, find, index_of};
//!
//! let numbers = vec![1, 2, 3, 4];
//! assert_eq!(filter(&numbers, |n| n % 2 == 0), [&2, &4]);
//! assert_eq!(find(&["a", "bb", "ccc"], |w| w.len() > 1), Some(&"bb"));
//! assert_eq!(index_of("hello world", "world"), Some(6));
//! assert!(contains(&numbers, &3));
//! assert!(every(&numbers, &[1, 3]));
//! ```
//!
//! # Dynamic Values
//!
//! ```rust
//! use standout_lookup::{lookup, Func, LookupError, Param, Kind, Value};
//!
//! let scores = Value::map([("ana", 3), ("bo", 5)]);
//!
//! // Mappings are tested by value, or by key with `contains_key`.
//! assert!(lookup::contains(&scores, &Value::from(5)).unwrap());
//! assert!(lookup::contains_key(&scores, &Value::from("bo")).unwrap());
//!
//! // A predicate must take one argument and return a boolean.
//! let not_a_predicate = Value::Func(Func::new([Param::Any], [Param::Of(Kind::Int)], |_| {
//!     vec![Value::from(0)]
//! }));
//! let err = lookup::filter(&scores, &not_a_predicate).unwrap_err();
//! assert!(matches!(err, LookupError::NonBooleanOutput { .. }));
//! ```
//!
//! # Equality
//!
//! Membership and positional queries compare with one relation: values of
//! different kinds are unequal, primitives compare exactly (no float
//! tolerance), and sequences, mappings and structs compare structurally.
//! The typed operations use `PartialEq`, which derived impls make
//! structural in the same way.
//!
//! | Shape | `filter`/`find` keys | `index_of` | `contains` |
//! |-------|----------------------|------------|------------|
//! | Sequence / Array | position | element position | element |
//! | Mapping | map key | not supported | value (key with `contains_key`) |
//! | Text | byte offset of `char` | substring byte offset | substring |

mod classify;
mod equality;
mod error;
mod func;
mod iter;
mod kind;
pub mod lookup;
mod ops;
mod search;
mod value;

// Re-export public API
pub use classify::{is_function, is_iteratee, require_iteratee, require_predicate};
pub use equality::{deep_equal, equal, primitive_equal, Mode};
pub use error::{LookupError, Result};
pub use func::{Func, Param, Signature};
pub use iter::{entries, Entries, Entry, Iteratee, Mapping};
pub use kind::{Kind, Shape};
pub use lookup::{Lookup, Unsupported};
pub use ops::{
    contains, contains_key, every, every_key, filter, filter_cloned, find, find_key, index_of,
    last_index_of, some, some_key,
};
pub use search::{Contains, Position};
pub use value::{Map, Number, Struct, ToValue, Value};
