//! Membership and positional search for statically typed containers.
//!
//! [`Contains`] is implemented for every container shape: sequences and
//! arrays test their elements, mappings test their values, text tests for a
//! substring or character. [`Position`] is implemented only where a
//! position means something (sequences, arrays and text), so asking for the
//! index of a value in a mapping is a compile error rather than a silent
//! "not found".
//!
//! Element comparisons use `PartialEq`, which for derived impls is the
//! structural, field-by-field relation.

use std::collections::{BTreeMap, HashMap, VecDeque};

/// Membership test against a needle of type `N`.
pub trait Contains<N: ?Sized> {
    /// Returns `true` if `needle` is present.
    fn includes(&self, needle: &N) -> bool;
}

/// First and last positions of a needle of type `N`.
///
/// Positions are element indices for sequences and byte offsets for text.
pub trait Position<N: ?Sized>: Contains<N> {
    /// Position of the first occurrence.
    fn first_index(&self, needle: &N) -> Option<usize>;

    /// Position of the last occurrence.
    fn last_index(&self, needle: &N) -> Option<usize>;
}

macro_rules! sequence_search {
    ($({$($generics:tt)*} $container:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> Contains<T> for $container
            where
                T: PartialEq,
            {
                fn includes(&self, needle: &T) -> bool {
                    self.iter().any(|item| item == needle)
                }
            }

            impl<$($generics)*> Position<T> for $container
            where
                T: PartialEq,
            {
                fn first_index(&self, needle: &T) -> Option<usize> {
                    self.iter().position(|item| item == needle)
                }

                fn last_index(&self, needle: &T) -> Option<usize> {
                    self.iter().rposition(|item| item == needle)
                }
            }
        )+
    };
}

sequence_search! {
    {T} [T],
    {T} Vec<T>,
    {T, const N: usize} [T; N],
    {T} VecDeque<T>,
}

macro_rules! text_search {
    ($($container:ty),+) => {
        $(
            impl Contains<str> for $container {
                fn includes(&self, needle: &str) -> bool {
                    str::contains(self, needle)
                }
            }

            impl Position<str> for $container {
                fn first_index(&self, needle: &str) -> Option<usize> {
                    str::find(self, needle)
                }

                fn last_index(&self, needle: &str) -> Option<usize> {
                    str::rfind(self, needle)
                }
            }

            impl Contains<char> for $container {
                fn includes(&self, needle: &char) -> bool {
                    str::contains(self, *needle)
                }
            }

            impl Position<char> for $container {
                fn first_index(&self, needle: &char) -> Option<usize> {
                    str::find(self, *needle)
                }

                fn last_index(&self, needle: &char) -> Option<usize> {
                    str::rfind(self, *needle)
                }
            }
        )+
    };
}

text_search!(str, String);

impl<K, V: PartialEq, S> Contains<V> for HashMap<K, V, S> {
    fn includes(&self, needle: &V) -> bool {
        self.values().any(|value| value == needle)
    }
}

impl<K, V: PartialEq> Contains<V> for BTreeMap<K, V> {
    fn includes(&self, needle: &V) -> bool {
        self.values().any(|value| value == needle)
    }
}
