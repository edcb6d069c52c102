//! Query operations over statically typed containers.
//!
//! These are the compile-time checked counterparts of the methods on
//! [`Lookup`](crate::Lookup): the container must implement [`Iteratee`]
//! (or [`Contains`] / [`Position`]) and predicates are ordinary closures
//! returning `bool`, so every precondition is enforced by the type checker
//! and none of these functions can fail.

use crate::iter::{Iteratee, Mapping};
use crate::search::{Contains, Position};

/// Returns the elements `predicate` accepts, in iteration order.
///
/// # Example
///
/// ```
/// use standout_lookup::filter;
///
/// let evens = filter(&[1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(evens, [&2, &4]);
///
/// let consonants: String = filter("banana", |c| c != 'a').into_iter().collect();
/// assert_eq!(consonants, "bnn");
/// ```
pub fn filter<'a, C, P>(container: &'a C, mut predicate: P) -> Vec<C::Elem<'a>>
where
    C: Iteratee + ?Sized,
    P: FnMut(C::Elem<'a>) -> bool,
{
    container
        .entries()
        .filter_map(|(_, elem)| predicate(elem).then_some(elem))
        .collect()
}

/// Filters and clones matching elements.
pub fn filter_cloned<'a, C, T, P>(container: &'a C, predicate: P) -> Vec<T>
where
    C: Iteratee<Elem<'a> = &'a T> + ?Sized,
    T: Clone + 'a,
    P: FnMut(&'a T) -> bool,
{
    filter(container, predicate).into_iter().cloned().collect()
}

/// Returns the first element `predicate` accepts.
///
/// Stops at the first match; later elements are never tested.
///
/// # Example
///
/// ```
/// use standout_lookup::find;
///
/// let words = ["a", "bb", "ccc"];
/// assert_eq!(find(&words, |w| w.len() > 1), Some(&"bb"));
/// assert_eq!(find(&words, |w| w.is_empty()), None);
/// ```
pub fn find<'a, C, P>(container: &'a C, predicate: P) -> Option<C::Elem<'a>>
where
    C: Iteratee + ?Sized,
    P: FnMut(C::Elem<'a>) -> bool,
{
    find_key(container, predicate).map(|(_, elem)| elem)
}

/// Returns the first `(key, element)` pair whose element `predicate` accepts.
///
/// The key is the position for sequences and text, the map key for
/// mappings.
pub fn find_key<'a, C, P>(container: &'a C, mut predicate: P) -> Option<(C::Key<'a>, C::Elem<'a>)>
where
    C: Iteratee + ?Sized,
    P: FnMut(C::Elem<'a>) -> bool,
{
    container.entries().find(|(_, elem)| predicate(*elem))
}

/// Position of the first occurrence of `needle`.
///
/// # Example
///
/// ```
/// use standout_lookup::index_of;
///
/// assert_eq!(index_of("hello world", "world"), Some(6));
/// assert_eq!(index_of(&[1, 2, 3], &5), None);
/// ```
pub fn index_of<C, N>(container: &C, needle: &N) -> Option<usize>
where
    C: Position<N> + ?Sized,
    N: ?Sized,
{
    container.first_index(needle)
}

/// Position of the last occurrence of `needle`.
pub fn last_index_of<C, N>(container: &C, needle: &N) -> Option<usize>
where
    C: Position<N> + ?Sized,
    N: ?Sized,
{
    container.last_index(needle)
}

/// Returns `true` if `needle` is an element, a mapping value or a substring.
pub fn contains<C, N>(container: &C, needle: &N) -> bool
where
    C: Contains<N> + ?Sized,
    N: ?Sized,
{
    container.includes(needle)
}

/// Returns `true` if `key` is a key of `map`.
pub fn contains_key<M>(map: &M, key: &M::K) -> bool
where
    M: Mapping + ?Sized,
{
    map.has_key(key)
}

/// Returns `true` if every needle is contained. Vacuously `true` for none.
///
/// # Example
///
/// ```
/// use standout_lookup::{every, some};
///
/// assert!(every(&[1, 2, 3], &[1, 3]));
/// assert!(some(&[1, 2, 3], &[9, 3]));
/// assert!(!some(&[1, 2, 3], &[9, 8]));
/// assert!(every("hello", ["he", "lo"]));
/// ```
pub fn every<'n, C, N, I>(container: &C, needles: I) -> bool
where
    C: Contains<N> + ?Sized,
    N: ?Sized + 'n,
    I: IntoIterator<Item = &'n N>,
{
    needles.into_iter().all(|needle| container.includes(needle))
}

/// Returns `true` if at least one needle is contained. `false` for none.
pub fn some<'n, C, N, I>(container: &C, needles: I) -> bool
where
    C: Contains<N> + ?Sized,
    N: ?Sized + 'n,
    I: IntoIterator<Item = &'n N>,
{
    needles.into_iter().any(|needle| container.includes(needle))
}

/// Returns `true` if every key is a key of `map`. Vacuously `true` for none.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use standout_lookup::{every_key, some_key};
///
/// let map: HashMap<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
/// assert!(every_key(&map, &["x", "y"]));
/// assert!(!every_key(&map, &["x", "z"]));
/// assert!(some_key(&map, &["x", "z"]));
/// ```
pub fn every_key<'n, M, I>(map: &M, keys: I) -> bool
where
    M: Mapping + ?Sized,
    M::K: 'n,
    I: IntoIterator<Item = &'n M::K>,
{
    keys.into_iter().all(|key| map.has_key(key))
}

/// Returns `true` if at least one key is a key of `map`. `false` for none.
pub fn some_key<'n, M, I>(map: &M, keys: I) -> bool
where
    M: Mapping + ?Sized,
    M::K: 'n,
    I: IntoIterator<Item = &'n M::K>,
{
    keys.into_iter().any(|key| map.has_key(key))
}
