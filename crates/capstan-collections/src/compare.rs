// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Sub-collection, equality and containment checks.
//!
//! `is_sub_collection`, `is_proper_sub_collection` and `is_equal_collection`
//! compare cardinalities; `contains_any` and `contains_all` only look at
//! which elements are present.

use crate::cardinality::cardinality_map;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Returns `true` if no element occurs more often in `a` than in `b`.
///
/// # Examples
///
/// ```rust
/// # use capstan_collections::compare::is_sub_collection;
/// assert!(is_sub_collection([1, 2], [2, 1, 3]));
/// assert!(!is_sub_collection([1, 1], [1, 2]));
/// ```
pub fn is_sub_collection<T, A, B>(a: A, b: B) -> bool
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let available = cardinality_map(b);
    cardinality_map(a)
        .iter()
        .all(|(item, &count)| available.get(item).is_some_and(|&have| count <= have))
}

/// Returns `true` if `a` is a sub-collection of `b` and `b` holds strictly
/// more elements.
pub fn is_proper_sub_collection<T, A, B>(a: A, b: B) -> bool
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let a: Vec<T> = a.into_iter().collect();
    let b: Vec<T> = b.into_iter().collect();
    a.len() < b.len() && is_sub_collection(&a, &b)
}

/// Returns `true` if both inputs hold the same elements with the same
/// cardinalities, in any order.
pub fn is_equal_collection<T, A, B>(a: A, b: B) -> bool
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    cardinality_map(a) == cardinality_map(b)
}

/// Returns `true` if at least one element of `b` also occurs in `a`.
pub fn contains_any<T, A, B>(a: A, b: B) -> bool
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let present: FxHashSet<T> = a.into_iter().collect();
    b.into_iter().any(|item| present.contains(&item))
}

/// Returns `true` if every element of `b` occurs in `a`. Multiplicity is
/// ignored, so an empty `b` is always contained.
pub fn contains_all<T, A, B>(a: A, b: B) -> bool
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let present: FxHashSet<T> = a.into_iter().collect();
    b.into_iter().all(|item| present.contains(&item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sub_collection() {
        assert!(is_sub_collection(Vec::<i32>::new(), Vec::<i32>::new()));
        assert!(is_sub_collection(Vec::<i32>::new(), [1]));
        assert!(is_sub_collection(["a", "a"], ["a", "b", "a"]));
        assert!(!is_sub_collection(["a", "c"], ["a", "b"]));
    }

    #[test]
    fn test_is_proper_sub_collection() {
        assert!(is_proper_sub_collection([1], [1, 2]));
        assert!(is_proper_sub_collection([1], [1, 1]));
        assert!(!is_proper_sub_collection([1, 2], [2, 1]));
        assert!(!is_proper_sub_collection([3], [1, 2]));
    }

    #[test]
    fn test_is_equal_collection() {
        assert!(is_equal_collection([1, 2, 2], [2, 1, 2]));
        assert!(!is_equal_collection([1, 2, 2], [1, 1, 2]));
        assert!(!is_equal_collection([1], [1, 1]));
        assert!(is_equal_collection(Vec::<u8>::new(), Vec::<u8>::new()));
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any([1, 2, 3], [9, 3]));
        assert!(!contains_any([1, 2, 3], [9]));
        assert!(!contains_any([1, 2, 3], Vec::<i32>::new()));
    }

    #[test]
    fn test_contains_all() {
        assert!(contains_all([1, 2, 3], [3, 3, 1]));
        assert!(!contains_all([1, 2], [1, 4]));
        assert!(contains_all(Vec::<i32>::new(), Vec::<i32>::new()));
    }

    mod properties {
        use super::super::*;
        use crate::bag::{intersection, union};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_intersection_and_union_bound_the_inputs(
                a in proptest::collection::vec(0u8..5, 0..16),
                b in proptest::collection::vec(0u8..5, 0..16),
            ) {
                let i = intersection(a.clone(), b.clone());
                let u = union(a.clone(), b.clone());
                prop_assert!(is_sub_collection(&i, &a));
                prop_assert!(is_sub_collection(&i, &b));
                prop_assert!(is_sub_collection(&a, &u));
                prop_assert!(is_sub_collection(&b, &u));
            }

            #[test]
            fn test_equal_collection_ignores_order(
                mut a in proptest::collection::vec(0u8..5, 0..16),
            ) {
                let original = a.clone();
                a.reverse();
                prop_assert!(is_equal_collection(&original, &a));
            }
        }
    }
}
