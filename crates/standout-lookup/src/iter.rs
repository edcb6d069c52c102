//! Uniform iteration over containers.
//!
//! Every supported container is walked as a stream of `(key, element)`
//! pairs: sequences and arrays are keyed by zero-based position, mappings
//! by their own keys, and text by the byte offset of each character.
//! Streams are lazy so that find-style operations stop at the first match.
//!
//! The statically typed side is the [`Iteratee`] trait; the dynamic side is
//! [`entries`], which classifies a [`Value`] and yields [`Entry`] items.

use std::borrow::Cow;
use std::collections::{btree_map, hash_map, vec_deque, BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::iter::Enumerate;
use std::slice;
use std::str::CharIndices;

use tracing::debug;

use crate::error::{LookupError, Result};
use crate::kind::Shape;
use crate::value::Value;

/// A container that can be walked as `(key, element)` pairs.
///
/// Elements are handed out by reference where the container stores them,
/// so iterating never clones. Text is the exception: it yields `char`s by
/// value, keyed by byte offset.
///
/// Mappings yield their entries in whatever order the mapping iterates.
/// That order is stable within one pass but is not something results may
/// depend on across different mappings with equal contents.
///
/// # Example
///
/// ```
/// use standout_lookup::Iteratee;
///
/// let items = vec!["a", "b"];
/// let pairs: Vec<_> = items.entries().collect();
/// assert_eq!(pairs, [(0, &"a"), (1, &"b")]);
///
/// let chars: Vec<_> = "hé!".entries().collect();
/// assert_eq!(chars, [(0, 'h'), (1, 'é'), (3, '!')]);
/// ```
pub trait Iteratee {
    /// Category of this container.
    const SHAPE: Shape;

    /// Key yielded with each element.
    type Key<'a>
    where
        Self: 'a;

    /// Element handle yielded for each stored item.
    type Elem<'a>: Copy
    where
        Self: 'a;

    /// Iterator over `(key, element)` pairs.
    type Entries<'a>: Iterator<Item = (Self::Key<'a>, Self::Elem<'a>)>
    where
        Self: 'a;

    /// Walks the container, one pair per stored item.
    fn entries(&self) -> Self::Entries<'_>;

    /// Number of pairs [`entries`](Iteratee::entries) yields.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Associative containers, which additionally support key-mode membership.
pub trait Mapping: Iteratee {
    /// Stored key type.
    type K;

    /// Returns `true` if `key` is present.
    fn has_key(&self, key: &Self::K) -> bool;
}

impl<T> Iteratee for [T] {
    const SHAPE: Shape = Shape::Sequence;
    type Key<'a> = usize where Self: 'a;
    type Elem<'a> = &'a T where Self: 'a;
    type Entries<'a> = Enumerate<slice::Iter<'a, T>> where Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> Iteratee for Vec<T> {
    const SHAPE: Shape = Shape::Sequence;
    type Key<'a> = usize where Self: 'a;
    type Elem<'a> = &'a T where Self: 'a;
    type Entries<'a> = Enumerate<slice::Iter<'a, T>> where Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T, const N: usize> Iteratee for [T; N] {
    const SHAPE: Shape = Shape::Array;
    type Key<'a> = usize where Self: 'a;
    type Elem<'a> = &'a T where Self: 'a;
    type Entries<'a> = Enumerate<slice::Iter<'a, T>> where Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T> Iteratee for VecDeque<T> {
    const SHAPE: Shape = Shape::Sequence;
    type Key<'a> = usize where Self: 'a;
    type Elem<'a> = &'a T where Self: 'a;
    type Entries<'a> = Enumerate<vec_deque::Iter<'a, T>> where Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<K, V, S> Iteratee for HashMap<K, V, S> {
    const SHAPE: Shape = Shape::Mapping;
    type Key<'a> = &'a K where Self: 'a;
    type Elem<'a> = &'a V where Self: 'a;
    type Entries<'a> = hash_map::Iter<'a, K, V> where Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K: Eq + std::hash::Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type K = K;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K, V> Iteratee for BTreeMap<K, V> {
    const SHAPE: Shape = Shape::Mapping;
    type Key<'a> = &'a K where Self: 'a;
    type Elem<'a> = &'a V where Self: 'a;
    type Entries<'a> = btree_map::Iter<'a, K, V> where Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type K = K;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl Iteratee for str {
    const SHAPE: Shape = Shape::Text;
    type Key<'a> = usize;
    type Elem<'a> = char;
    type Entries<'a> = CharIndices<'a>;

    fn entries(&self) -> Self::Entries<'_> {
        self.char_indices()
    }

    fn len(&self) -> usize {
        self.chars().count()
    }
}

impl Iteratee for String {
    const SHAPE: Shape = Shape::Text;
    type Key<'a> = usize;
    type Elem<'a> = char;
    type Entries<'a> = CharIndices<'a>;

    fn entries(&self) -> Self::Entries<'_> {
        self.char_indices()
    }

    fn len(&self) -> usize {
        self.chars().count()
    }
}

/// One `(key, element)` pair of a dynamic container.
///
/// Parts stored in the container are borrowed; positions and text
/// characters are produced on the fly and owned.
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    pub key: Cow<'a, Value>,
    pub elem: Cow<'a, Value>,
}

/// Lazy `(key, element)` stream over a dynamic container.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    shape: Shape,
    inner: Inner<'a>,
}

#[derive(Debug, Clone)]
enum Inner<'a> {
    Items(Enumerate<slice::Iter<'a, Value>>),
    Pairs(slice::Iter<'a, (Value, Value)>),
    Chars(CharIndices<'a>),
}

impl Entries<'_> {
    /// Category of the container being walked.
    pub fn shape(&self) -> Shape {
        self.shape
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Entry<'a>> {
        match &mut self.inner {
            Inner::Items(items) => items.next().map(|(i, elem)| Entry {
                key: Cow::Owned(Value::from(i)),
                elem: Cow::Borrowed(elem),
            }),
            Inner::Pairs(pairs) => pairs.next().map(|(key, elem)| Entry {
                key: Cow::Borrowed(key),
                elem: Cow::Borrowed(elem),
            }),
            Inner::Chars(chars) => chars.next().map(|(offset, c)| Entry {
                key: Cow::Owned(Value::from(offset)),
                elem: Cow::Owned(Value::from(c)),
            }),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Items(items) => items.size_hint(),
            Inner::Pairs(pairs) => pairs.size_hint(),
            Inner::Chars(chars) => chars.size_hint(),
        }
    }
}

/// Walks a dynamic container.
///
/// # Errors
///
/// Returns [`LookupError::NotIterable`](crate::LookupError::NotIterable)
/// for values that are not containers. Nothing is yielded in that case.
pub fn entries(value: &Value) -> Result<Entries<'_>> {
    let (shape, inner) = match value {
        Value::Seq(items) => (Shape::Sequence, Inner::Items(items.iter().enumerate())),
        Value::Array(items) => (Shape::Array, Inner::Items(items.iter().enumerate())),
        Value::Map(map) => (Shape::Mapping, Inner::Pairs(map.pairs())),
        Value::String(text) => (Shape::Text, Inner::Chars(text.char_indices())),
        other => {
            debug!(kind = %other.kind(), "rejected non-iterable container");
            return Err(LookupError::NotIterable { kind: other.kind() });
        }
    };
    Ok(Entries { shape, inner })
}
