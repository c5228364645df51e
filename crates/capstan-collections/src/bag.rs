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

//! Multiset algebra.
//!
//! For an element occurring `a` times on the left and `b` times on the
//! right:
//!
//! | operation      | occurrences in the result |
//! |----------------|---------------------------|
//! | `union`        | `max(a, b)`               |
//! | `intersection` | `min(a, b)`               |
//! | `disjunction`  | `max(a, b) - min(a, b)`   |
//! | `subtract`     | `a.saturating_sub(b)`     |

use crate::cardinality::cardinality_map;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Distinct elements of both inputs in order of first appearance, together
/// with their per-side counts.
struct Tally<T> {
    order: Vec<T>,
    left: FxHashMap<T, usize>,
    right: FxHashMap<T, usize>,
}

impl<T> Tally<T>
where
    T: Eq + Hash + Clone,
{
    fn new<A, B>(a: A, b: B) -> Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        let mut order = Vec::new();
        let mut left = FxHashMap::default();
        let mut right: FxHashMap<T, usize> = FxHashMap::default();

        for item in a {
            let count = left.entry(item.clone()).or_insert(0);
            if *count == 0 {
                order.push(item);
            }
            *count += 1;
        }
        for item in b {
            let count = right.entry(item.clone()).or_insert(0);
            if *count == 0 && !left.contains_key(&item) {
                order.push(item);
            }
            *count += 1;
        }

        Self { order, left, right }
    }

    /// Emits every distinct element `occurrences(left, right)` times.
    fn emit<F>(self, occurrences: F) -> Vec<T>
    where
        F: Fn(usize, usize) -> usize,
    {
        let Self { order, left, right } = self;
        let mut result = Vec::new();
        for item in order {
            let a = left.get(&item).copied().unwrap_or(0);
            let b = right.get(&item).copied().unwrap_or(0);
            result.extend(std::iter::repeat_n(item, occurrences(a, b)));
        }
        result
    }
}

/// Returns every element as often as it occurs in whichever input holds
/// more of it.
pub fn union<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    Tally::new(a, b).emit(usize::max)
}

/// Returns every element as often as it occurs in whichever input holds
/// fewer of it.
pub fn intersection<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    Tally::new(a, b).emit(usize::min)
}

/// Returns the symmetric difference: every element as often as one input
/// holds it more than the other.
///
/// # Examples
///
/// ```rust
/// # use capstan_collections::bag::disjunction;
/// assert_eq!(disjunction([1, 2, 2, 3], [2, 3, 3, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn disjunction<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    Tally::new(a, b).emit(|x, y| x.abs_diff(y))
}

/// Removes one occurrence from `a` for each occurrence in `b`, keeping the
/// order of `a`. Earlier occurrences are removed first.
///
/// # Examples
///
/// ```rust
/// # use capstan_collections::bag::subtract;
/// assert_eq!(subtract(["a", "b", "b", "c", "b"], ["b", "b"]), vec!["a", "c", "b"]);
/// ```
pub fn subtract<T, A, B>(a: A, b: B) -> Vec<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let mut pending = cardinality_map(b);
    a.into_iter()
        .filter(|item| match pending.get_mut(item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union() {
        assert_eq!(union([1, 2, 2, 3], [2, 3, 3, 4]), vec![1, 2, 2, 3, 3, 4]);
        assert_eq!(union(Vec::<i32>::new(), [5, 5]), vec![5, 5]);
        assert_eq!(union(["x"], Vec::<&str>::new()), vec!["x"]);
    }

    #[test]
    fn test_intersection() {
        assert_eq!(intersection([1, 2, 2, 3], [2, 3, 3, 4]), vec![2, 3]);
        assert_eq!(intersection([1, 1, 1], [1, 1]), vec![1, 1]);
        assert!(intersection([1, 2], [3, 4]).is_empty());
    }

    #[test]
    fn test_disjunction() {
        assert_eq!(disjunction([1, 1, 1], [1]), vec![1, 1]);
        assert_eq!(disjunction(["a", "b"], ["b", "a"]), Vec::<&str>::new());
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract([1, 2, 3], [4]), vec![1, 2, 3]);
        assert_eq!(subtract([1, 2, 1, 2], [2, 2, 2]), vec![1, 1]);
        assert!(subtract(Vec::<u8>::new(), [1]).is_empty());
    }

    #[test]
    fn test_order_is_first_appearance_left_then_right() {
        assert_eq!(union(["c", "a"], ["b", "a", "d"]), vec!["c", "a", "b", "d"]);
        assert_eq!(union(["c", "a"], ["d", "c", "c"]), vec!["c", "c", "a", "d"]);
    }

    #[test]
    fn test_works_with_references() {
        let a = vec![String::from("x"), String::from("y")];
        let b = vec![String::from("y")];
        let both: Vec<&String> = intersection(&a, &b);
        assert_eq!(both, vec![&b[0]]);
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        fn count(items: &[u8], value: u8) -> usize {
            items.iter().filter(|&&x| x == value).count()
        }

        proptest! {
            #[test]
            fn test_counts_follow_cardinality_rules(
                a in proptest::collection::vec(0u8..6, 0..24),
                b in proptest::collection::vec(0u8..6, 0..24),
            ) {
                let u = union(a.clone(), b.clone());
                let i = intersection(a.clone(), b.clone());
                let d = disjunction(a.clone(), b.clone());
                let s = subtract(a.clone(), b.clone());

                for value in 0u8..6 {
                    let (ca, cb) = (count(&a, value), count(&b, value));
                    prop_assert_eq!(count(&u, value), ca.max(cb));
                    prop_assert_eq!(count(&i, value), ca.min(cb));
                    prop_assert_eq!(count(&d, value), ca.abs_diff(cb));
                    prop_assert_eq!(count(&s, value), ca.saturating_sub(cb));
                }
            }

            #[test]
            fn test_union_is_intersection_plus_disjunction(
                a in proptest::collection::vec(0u8..6, 0..24),
                b in proptest::collection::vec(0u8..6, 0..24),
            ) {
                let lhs = union(a.clone(), b.clone()).len();
                let rhs = intersection(a.clone(), b.clone()).len() + disjunction(a, b).len();
                prop_assert_eq!(lhs, rhs);
            }
        }
    }
}
