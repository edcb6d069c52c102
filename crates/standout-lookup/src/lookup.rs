//! Query operations over dynamically typed values.
//!
//! The [`Lookup`] struct carries the configuration shared by all operations
//! and executes them against [`Value`]s. Free functions with the same names
//! run with the default configuration.
//!
//! Every operation validates its arguments before the first element is
//! handed to a predicate. A failed validation is returned as an error; it
//! never produces a partial result.

use tracing::{debug, trace};

use crate::classify::require_predicate;
use crate::equality::{equal, Mode};
use crate::error::{LookupError, Result};
use crate::func::{Func, Param};
use crate::iter::{entries, Entries};
use crate::kind::Shape;
use crate::value::Value;

const POSITIONAL_KINDS: &str = "string, seq, array";
const MEMBERSHIP_KINDS: &str = "string, map, seq, array";

/// What relational queries do with a container kind they do not support.
///
/// Applies uniformly to [`Lookup::contains`], [`Lookup::index_of`] and
/// [`Lookup::last_index_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unsupported {
    /// Return [`LookupError::UnsupportedKind`] naming the kind and the
    /// supported set.
    #[default]
    Fail,
    /// Treat the container as not containing anything.
    NotFound,
}

/// Configured executor for dynamic queries.
///
/// # Example
///
/// ```
/// use standout_lookup::{Func, Lookup, Unsupported, Value};
///
/// let lookup = Lookup::new().on_unsupported(Unsupported::NotFound).build();
///
/// let numbers = Value::seq([1, 2, 3, 4]);
/// let is_even = Value::Func(Func::predicate(|v| {
///     matches!(v.as_number(), Some(n) if n == 2u8.into() || n == 4u8.into())
/// }));
/// assert_eq!(lookup.filter(&numbers, &is_even).unwrap(), Value::seq([2, 4]));
///
/// // A number is not a container; with `NotFound` that is a miss, not an error.
/// assert_eq!(lookup.index_of(&Value::from(7), &Value::from(7)).unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    unsupported: Unsupported,
}

impl Lookup {
    /// Creates an executor with the default configuration.
    pub fn new() -> Self {
        Lookup::default()
    }

    /// Sets the policy for unsupported container kinds.
    pub fn on_unsupported(mut self, policy: Unsupported) -> Self {
        self.unsupported = policy;
        self
    }

    /// Finalizes the configuration.
    pub fn build(self) -> Self {
        self
    }

    /// Returns the policy for unsupported container kinds.
    pub fn unsupported(&self) -> Unsupported {
        self.unsupported
    }

    // ========================================================================
    // Predicate operations
    // ========================================================================

    /// Returns the elements `predicate` accepts.
    ///
    /// Text filters to text; sequences, arrays and mappings filter to a
    /// sequence, in iteration order.
    pub fn filter(&self, container: &Value, predicate: &Value) -> Result<Value> {
        let (walked, func) = self.prepare(container, predicate)?;
        let shape = walked.shape();
        let mut kept = Vec::new();
        for entry in walked {
            if func.test(&entry.elem)? {
                kept.push(entry.elem.into_owned());
            }
        }
        trace!(%shape, kept = kept.len(), "filter done");
        Ok(match shape {
            Shape::Text => Value::String(
                kept.iter()
                    .filter_map(Value::as_str)
                    .collect::<String>(),
            ),
            _ => Value::Seq(kept),
        })
    }

    /// Returns the first element `predicate` accepts.
    pub fn find(&self, container: &Value, predicate: &Value) -> Result<Option<Value>> {
        Ok(self
            .find_key(container, predicate)?
            .map(|(_, elem)| elem))
    }

    /// Returns the first `(key, element)` pair whose element `predicate`
    /// accepts.
    ///
    /// Keys are positions for sequences and arrays, byte offsets for text
    /// and map keys for mappings. Iteration stops at the first match.
    pub fn find_key(
        &self,
        container: &Value,
        predicate: &Value,
    ) -> Result<Option<(Value, Value)>> {
        let (walked, func) = self.prepare(container, predicate)?;
        for entry in walked {
            if func.test(&entry.elem)? {
                trace!(key = ?entry.key, "find matched");
                return Ok(Some((entry.key.into_owned(), entry.elem.into_owned())));
            }
        }
        Ok(None)
    }

    /// Validates a predicate call and returns the stream to walk.
    ///
    /// Checks run in a fixed order: container kind, predicate arity and
    /// output, then the predicate's input slot against every element.
    fn prepare<'a>(
        &self,
        container: &'a Value,
        predicate: &'a Value,
    ) -> Result<(Entries<'a>, &'a Func)> {
        let walked = entries(container)?;
        let func = require_predicate(predicate)?;
        if func.signature().inputs[0] != Param::Any {
            for entry in walked.clone() {
                if let Err(err) = func.check_input(0, entry.elem.kind()) {
                    debug!(%err, "rejected predicate input");
                    return Err(err);
                }
            }
        }
        Ok((walked, func))
    }

    // ========================================================================
    // Positional operations
    // ========================================================================

    /// Position of the first occurrence of `needle`.
    ///
    /// Text is searched for a substring and answers with a byte offset;
    /// sequences and arrays compare elements.
    pub fn index_of(&self, container: &Value, needle: &Value) -> Result<Option<usize>> {
        self.position(container, needle, Direction::First)
    }

    /// Position of the last occurrence of `needle`.
    pub fn last_index_of(&self, container: &Value, needle: &Value) -> Result<Option<usize>> {
        self.position(container, needle, Direction::Last)
    }

    fn position(
        &self,
        container: &Value,
        needle: &Value,
        direction: Direction,
    ) -> Result<Option<usize>> {
        if !container.kind().shape().is_some_and(Shape::is_positional) {
            return self.reject_unsupported(direction.op(), container, POSITIONAL_KINDS, None);
        }
        let matcher = Matcher::new(needle, Mode::Value);
        if let Value::String(text) = container {
            return match (needle, &matcher) {
                (Value::String(sub), _) => Ok(match direction {
                    Direction::First => text.find(sub.as_str()),
                    Direction::Last => text.rfind(sub.as_str()),
                }),
                (_, Matcher::Predicate(_)) => {
                    let mut offsets = text.char_indices();
                    let test = |&(_, c): &(usize, char)| matcher.test_elem(&Value::from(c));
                    let found = match direction {
                        Direction::First => try_find(&mut offsets, test)?,
                        Direction::Last => try_find(&mut offsets.rev(), test)?,
                    };
                    Ok(found.map(|(offset, _)| offset))
                }
                _ => Ok(None),
            };
        }
        let items = container.as_slice().unwrap_or_default();
        let mut indexed = items.iter().enumerate();
        let test = |&(_, item): &(usize, &Value)| matcher.test_elem(item);
        let found = match direction {
            Direction::First => try_find(&mut indexed, test)?,
            Direction::Last => try_find(&mut indexed.rev(), test)?,
        };
        Ok(found.map(|(i, _)| i))
    }

    // ========================================================================
    // Membership operations
    // ========================================================================

    /// Returns `true` if `needle` is present.
    ///
    /// Text tests for a substring, sequences and arrays test their elements
    /// and mappings test their values.
    pub fn contains(&self, container: &Value, needle: &Value) -> Result<bool> {
        self.contains_with(container, needle, Mode::Value)
    }

    /// Returns `true` if `key` is a key of the mapping.
    pub fn contains_key(&self, container: &Value, key: &Value) -> Result<bool> {
        self.contains_with(container, key, Mode::Key)
    }

    /// Membership test with an explicit comparison mode.
    ///
    /// [`Mode::Key`] compares mapping keys (and positions of sequences).
    /// Text has no keys of its own: it is searched for a substring, or a
    /// predicate needle is applied to each character, whatever the mode.
    pub fn contains_with(&self, container: &Value, needle: &Value, mode: Mode) -> Result<bool> {
        let matcher = Matcher::new(needle, mode);
        match container {
            Value::String(text) => match (needle, &matcher) {
                (Value::String(sub), _) => Ok(text.contains(sub.as_str())),
                (_, Matcher::Predicate(_)) => {
                    for c in text.chars() {
                        if matcher.test_elem(&Value::from(c))? {
                            return Ok(true);
                        }
                    }
                    Ok(false)
                }
                _ => Ok(false),
            },
            Value::Seq(_) | Value::Array(_) | Value::Map(_) => {
                for entry in entries(container)? {
                    if matcher.test(&entry.key, &entry.elem)? {
                        trace!(key = ?entry.key, %mode, "contains matched");
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            other => self.reject_unsupported("contains", other, MEMBERSHIP_KINDS, false),
        }
    }

    /// Returns `true` if every needle is present. Vacuously `true` for none.
    ///
    /// The container kind is validated even when there are no needles.
    pub fn every(&self, container: &Value, needles: &[Value]) -> Result<bool> {
        self.every_with(container, needles, Mode::Value)
    }

    /// Returns `true` if at least one needle is present. `false` for none.
    pub fn some(&self, container: &Value, needles: &[Value]) -> Result<bool> {
        self.some_with(container, needles, Mode::Value)
    }

    /// [`Lookup::every`] with an explicit comparison mode.
    ///
    /// # Example
    ///
    /// ```
    /// use standout_lookup::{Lookup, Mode, Value};
    ///
    /// let map = Value::map([("x", 1), ("y", 2)]);
    /// let keys = [Value::from("x"), Value::from("y")];
    /// assert!(Lookup::new().every_with(&map, &keys, Mode::Key).unwrap());
    /// assert!(!Lookup::new().every(&map, &keys).unwrap());
    /// ```
    pub fn every_with(&self, container: &Value, needles: &[Value], mode: Mode) -> Result<bool> {
        if !self.check_membership(container)? {
            return Ok(needles.is_empty());
        }
        for needle in needles {
            if !self.contains_with(container, needle, mode)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// [`Lookup::some`] with an explicit comparison mode.
    pub fn some_with(&self, container: &Value, needles: &[Value], mode: Mode) -> Result<bool> {
        if !self.check_membership(container)? {
            return Ok(false);
        }
        for needle in needles {
            if self.contains_with(container, needle, mode)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns `false` when the container is unsupported and the policy
    /// says to treat it as empty.
    fn check_membership(&self, container: &Value) -> Result<bool> {
        if container.kind().is_iteratee() {
            return Ok(true);
        }
        self.reject_unsupported("contains", container, MEMBERSHIP_KINDS, false)
    }

    fn reject_unsupported<T>(
        &self,
        op: &'static str,
        container: &Value,
        supported: &'static str,
        not_found: T,
    ) -> Result<T> {
        let kind = container.kind();
        debug!(op, %kind, policy = ?self.unsupported, "unsupported container kind");
        match self.unsupported {
            Unsupported::Fail => Err(LookupError::UnsupportedKind {
                op,
                kind,
                supported,
            }),
            Unsupported::NotFound => Ok(not_found),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    First,
    Last,
}

impl Direction {
    fn op(self) -> &'static str {
        match self {
            Direction::First => "index_of",
            Direction::Last => "last_index_of",
        }
    }
}

/// How a needle is tested against `(key, element)` pairs.
///
/// A needle that is itself a one-input boolean function is applied as a
/// predicate; any other needle is compared with the equality relation.
enum Matcher<'n> {
    Equal(Box<dyn Fn(&Value, &Value) -> bool + 'n>),
    Predicate(PredicateNeedle<'n>),
}

struct PredicateNeedle<'n> {
    func: &'n Func,
    mode: Mode,
}

impl<'n> Matcher<'n> {
    fn new(needle: &'n Value, mode: Mode) -> Self {
        match needle.as_func() {
            Some(func) if func.signature().is_predicate() => {
                Matcher::Predicate(PredicateNeedle { func, mode })
            }
            _ => Matcher::Equal(Box::new(equal(needle, mode))),
        }
    }

    fn test(&self, key: &Value, elem: &Value) -> Result<bool> {
        match self {
            Matcher::Equal(eq) => Ok(eq(key, elem)),
            Matcher::Predicate(p) => {
                let actual = match p.mode {
                    Mode::Key => key,
                    Mode::Value => elem,
                };
                // A value the predicate cannot accept is simply not a match.
                if p.func.check_args(std::slice::from_ref(actual)).is_err() {
                    return Ok(false);
                }
                p.func.test(actual)
            }
        }
    }

    /// Tests an element that has no key of its own, such as a character of
    /// text. Both modes see the element.
    fn test_elem(&self, elem: &Value) -> Result<bool> {
        self.test(elem, elem)
    }
}

/// Fallible `Iterator::find`.
fn try_find<I, F>(iter: &mut I, mut test: F) -> Result<Option<I::Item>>
where
    I: Iterator,
    F: FnMut(&I::Item) -> Result<bool>,
{
    for item in iter {
        if test(&item)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

// ============================================================================
// Default-configured shortcuts
// ============================================================================

/// [`Lookup::filter`] with the default configuration.
pub fn filter(container: &Value, predicate: &Value) -> Result<Value> {
    Lookup::default().filter(container, predicate)
}

/// [`Lookup::find`] with the default configuration.
pub fn find(container: &Value, predicate: &Value) -> Result<Option<Value>> {
    Lookup::default().find(container, predicate)
}

/// [`Lookup::find_key`] with the default configuration.
pub fn find_key(container: &Value, predicate: &Value) -> Result<Option<(Value, Value)>> {
    Lookup::default().find_key(container, predicate)
}

/// [`Lookup::index_of`] with the default configuration.
pub fn index_of(container: &Value, needle: &Value) -> Result<Option<usize>> {
    Lookup::default().index_of(container, needle)
}

/// [`Lookup::last_index_of`] with the default configuration.
pub fn last_index_of(container: &Value, needle: &Value) -> Result<Option<usize>> {
    Lookup::default().last_index_of(container, needle)
}

/// [`Lookup::contains`] with the default configuration.
pub fn contains(container: &Value, needle: &Value) -> Result<bool> {
    Lookup::default().contains(container, needle)
}

/// [`Lookup::contains_key`] with the default configuration.
pub fn contains_key(container: &Value, key: &Value) -> Result<bool> {
    Lookup::default().contains_key(container, key)
}

/// [`Lookup::every`] with the default configuration.
pub fn every(container: &Value, needles: &[Value]) -> Result<bool> {
    Lookup::default().every(container, needles)
}

/// [`Lookup::some`] with the default configuration.
pub fn some(container: &Value, needles: &[Value]) -> Result<bool> {
    Lookup::default().some(container, needles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn is_even() -> Value {
        Value::Func(Func::typed_predicate(Param::Of(Kind::Int), |v| {
            matches!(v.as_number(), Some(crate::Number::I64(n)) if n % 2 == 0)
        }))
    }

    fn longer_than_one() -> Value {
        Value::Func(Func::predicate(|v| v.as_str().is_some_and(|s| s.len() > 1)))
    }

    fn counting(calls: Arc<AtomicUsize>, answer: bool) -> Value {
        Value::Func(Func::predicate(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            answer
        }))
    }

    #[test]
    fn filter_sequence() {
        let result = filter(&Value::seq([1, 2, 3, 4]), &is_even()).unwrap();
        assert_eq!(result, Value::seq([2, 4]));
    }

    #[test]
    fn filter_text_returns_text() {
        let vowel = Value::Func(Func::predicate(|v| {
            v.as_str().is_some_and(|s| "aeiou".contains(s))
        }));
        assert_eq!(
            filter(&Value::from("banana"), &vowel).unwrap(),
            Value::from("aaa")
        );
    }

    #[test]
    fn filter_mapping_returns_values() {
        let map = Value::map([("a", 1), ("b", 2)]);
        assert_eq!(filter(&map, &is_even()).unwrap(), Value::seq([2]));
    }

    #[test]
    fn filter_rejects_non_iterable_before_calling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let err = filter(&Value::from(1), &counting(calls.clone(), true)).unwrap_err();
        assert!(matches!(err, LookupError::NotIterable { kind: Kind::Int }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn filter_rejects_non_boolean_predicate_before_calling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let len = Value::Func(Func::new([Param::Any], [Param::Of(Kind::Int)], move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![Value::from(0)]
        }));
        let err = filter(&Value::seq([1, 2]), &len).unwrap_err();
        assert!(matches!(err, LookupError::NonBooleanOutput { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn filter_rejects_mismatched_input_before_calling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let ints_only = Value::Func(Func::typed_predicate(Param::Of(Kind::Int), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }));
        let err = filter(&Value::seq([Value::from(1), Value::from("two")]), &ints_only)
            .unwrap_err();
        assert!(matches!(
            err,
            LookupError::ParamMismatch {
                actual: Kind::String,
                ..
            }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn find_first_match() {
        let words = Value::seq(["a", "bb", "ccc"]);
        assert_eq!(
            find(&words, &longer_than_one()).unwrap(),
            Some(Value::from("bb"))
        );
    }

    #[test]
    fn find_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let found = find(&Value::seq([1, 2, 3]), &counting(calls.clone(), true)).unwrap();
        assert_eq!(found, Some(Value::from(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn find_key_positions_and_map_keys() {
        let words = Value::seq(["a", "bb"]);
        assert_eq!(
            find_key(&words, &longer_than_one()).unwrap(),
            Some((Value::from(1usize), Value::from("bb")))
        );

        let map = Value::map([("x", 1), ("y", 2)]);
        assert_eq!(
            find_key(&map, &is_even()).unwrap(),
            Some((Value::from("y"), Value::from(2)))
        );

        assert_eq!(find_key(&Value::seq([1, 3]), &is_even()).unwrap(), None);
    }

    #[test]
    fn index_of_text_and_sequences() {
        assert_eq!(
            index_of(&Value::from("hello world"), &Value::from("world")).unwrap(),
            Some(6)
        );
        assert_eq!(index_of(&Value::seq([1, 2, 3]), &Value::from(5)).unwrap(), None);
        assert_eq!(
            last_index_of(&Value::array([1, 2, 1]), &Value::from(1)).unwrap(),
            Some(2)
        );
        assert_eq!(
            last_index_of(&Value::from("a.b.c"), &Value::from(".")).unwrap(),
            Some(3)
        );
    }

    #[test]
    fn index_of_text_with_non_text_needle_is_a_miss() {
        assert_eq!(index_of(&Value::from("123"), &Value::from(1)).unwrap(), None);
    }

    #[test]
    fn index_of_with_predicate_needle() {
        let items = Value::seq([1, 4, 6, 7]);
        assert_eq!(index_of(&items, &is_even()).unwrap(), Some(1));
        assert_eq!(last_index_of(&items, &is_even()).unwrap(), Some(2));

        let digit = Value::Func(Func::matches(r"\d").unwrap());
        assert_eq!(index_of(&Value::from("ab3c4"), &digit).unwrap(), Some(2));
        assert_eq!(last_index_of(&Value::from("ab3c4"), &digit).unwrap(), Some(4));
    }

    #[test]
    fn predicate_needle_skips_unacceptable_elements() {
        let mixed = Value::seq([Value::from("x"), Value::from(2)]);
        assert_eq!(index_of(&mixed, &is_even()).unwrap(), Some(1));
    }

    #[test]
    fn index_of_unsupported_kind_fails_by_default() {
        let err = index_of(&Value::map([("a", 1)]), &Value::from(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type map is not supported by index_of, supported types are string, seq, array"
        );
    }

    #[test]
    fn unsupported_kind_policy_not_found() {
        let lookup = Lookup::new().on_unsupported(Unsupported::NotFound).build();
        assert_eq!(lookup.unsupported(), Unsupported::NotFound);
        let scalar = Value::from(3);
        assert_eq!(lookup.index_of(&scalar, &Value::from(3)).unwrap(), None);
        assert_eq!(lookup.last_index_of(&scalar, &Value::from(3)).unwrap(), None);
        assert!(!lookup.contains(&scalar, &Value::from(3)).unwrap());
        assert!(lookup.every(&scalar, &[]).unwrap());
        assert!(!lookup.every(&scalar, &[Value::from(3)]).unwrap());
        assert!(!lookup.some(&scalar, &[Value::from(3)]).unwrap());
    }

    #[test]
    fn contains_every_shape() {
        assert!(contains(&Value::from("haystack"), &Value::from("st")).unwrap());
        assert!(contains(&Value::seq([1, 2]), &Value::from(2)).unwrap());
        assert!(contains(&Value::array(["a"]), &Value::from("a")).unwrap());
        let map = Value::map([("x", 1), ("y", 2)]);
        assert!(contains(&map, &Value::from(2)).unwrap());
        assert!(!contains(&map, &Value::from("y")).unwrap());
        assert!(contains_key(&map, &Value::from("y")).unwrap());
        assert!(!contains_key(&map, &Value::from(2)).unwrap());
    }

    #[test]
    fn contains_aggregates_structurally() {
        let rows = Value::seq([Value::seq([1, 2]), Value::map([("k", "v")])]);
        assert!(contains(&rows, &Value::seq([1, 2])).unwrap());
        assert!(contains(&rows, &Value::map([("k", "v")])).unwrap());
        assert!(!contains(&rows, &Value::seq([2, 1])).unwrap());
    }

    #[test]
    fn contains_fails_on_unsupported_kind() {
        let err = contains(&Value::structure("P", [("x", 1)]), &Value::from(1)).unwrap_err();
        assert!(matches!(
            err,
            LookupError::UnsupportedKind {
                op: "contains",
                kind: Kind::Struct,
                ..
            }
        ));
    }

    #[test]
    fn every_and_some() {
        let items = Value::seq([1, 2, 3]);
        assert!(every(&items, &[Value::from(1), Value::from(3)]).unwrap());
        assert!(!every(&items, &[Value::from(1), Value::from(9)]).unwrap());
        assert!(some(&items, &[Value::from(9), Value::from(3)]).unwrap());
        assert!(!some(&items, &[Value::from(9), Value::from(8)]).unwrap());
        assert!(every(&items, &[]).unwrap());
        assert!(!some(&items, &[]).unwrap());
    }

    #[test]
    fn every_and_some_by_key() {
        let lookup = Lookup::new();
        let map = Value::map([("x", 1), ("y", 2)]);
        let keys = [Value::from("x"), Value::from("y")];
        assert!(lookup.every_with(&map, &keys, Mode::Key).unwrap());
        assert!(lookup.some_with(&map, &keys, Mode::Key).unwrap());
        assert!(!lookup.every(&map, &keys).unwrap());
        assert!(!lookup.some(&map, &keys).unwrap());

        let mixed = [Value::from("x"), Value::from("z")];
        assert!(!lookup.every_with(&map, &mixed, Mode::Key).unwrap());
        assert!(lookup.some_with(&map, &mixed, Mode::Key).unwrap());
        assert!(lookup.every_with(&map, &[], Mode::Key).unwrap());
    }

    #[test]
    fn contains_with_text_predicate_ignores_mode() {
        let lookup = Lookup::new();
        let is_upper_b = Value::Func(Func::predicate(|v| v.as_str() == Some("B")));
        let text = Value::from("aBc");
        assert!(lookup.contains_with(&text, &is_upper_b, Mode::Value).unwrap());
        assert!(lookup.contains_with(&text, &is_upper_b, Mode::Key).unwrap());
        assert!(!lookup
            .contains_with(&Value::from("abc"), &is_upper_b, Mode::Key)
            .unwrap());
    }

    #[test]
    fn every_validates_container_without_needles() {
        assert!(every(&Value::Null, &[]).is_err());
        assert!(some(&Value::Null, &[]).is_err());
    }
}
