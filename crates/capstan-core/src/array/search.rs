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

//! # Linear Searches
//!
//! Forward and backward element searches with permissive start indices, a
//! tolerance-based variant for floating point data, and sortedness checks.
//! A missing element is reported as `None` rather than a sentinel index.

use super::{clamp_index, len_as_isize};
use num_traits::Float;
use std::cmp::Ordering;

/// Returns the index of the first element equal to `value` at or after
/// `start`.
///
/// A negative `start` is treated as `0`; a `start` at or past the end finds
/// nothing.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::search::index_of;
/// let values = [3, 1, 4, 1, 5];
/// assert_eq!(index_of(&values, &1, 0), Some(1));
/// assert_eq!(index_of(&values, &1, 2), Some(3));
/// assert_eq!(index_of(&values, &1, 4), None);
/// assert_eq!(index_of(&values, &3, -10), Some(0));
/// ```
pub fn index_of<T>(array: &[T], value: &T, start: isize) -> Option<usize>
where
    T: PartialEq,
{
    let start = clamp_index(start, array.len());
    array[start..]
        .iter()
        .position(|item| item == value)
        .map(|i| start + i)
}

/// Returns the index of the last element equal to `value` at or before
/// `start`.
///
/// A negative `start` finds nothing; a `start` at or past the end searches
/// the whole slice.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::search::last_index_of;
/// let values = [3, 1, 4, 1, 5];
/// assert_eq!(last_index_of(&values, &1, isize::MAX), Some(3));
/// assert_eq!(last_index_of(&values, &1, 2), Some(1));
/// assert_eq!(last_index_of(&values, &1, -1), None);
/// ```
pub fn last_index_of<T>(array: &[T], value: &T, start: isize) -> Option<usize>
where
    T: PartialEq,
{
    if start < 0 || array.is_empty() {
        return None;
    }
    let end = clamp_index(start, array.len() - 1) + 1;
    array[..end].iter().rposition(|item| item == value)
}

/// Returns `true` if `array` contains `value`.
#[inline]
pub fn contains<T>(array: &[T], value: &T) -> bool
where
    T: PartialEq,
{
    index_of(array, value, 0).is_some()
}

/// Returns the index of the first element within `tolerance` of `value`,
/// at or after `start`.
///
/// An element `x` matches if `value - tolerance <= x <= value + tolerance`.
/// `NaN` never matches.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::search::index_of_with_tolerance;
/// let values = [0.1, 0.25, 0.5];
/// assert_eq!(index_of_with_tolerance(&values, 0.3, 0, 0.06), Some(1));
/// assert_eq!(index_of_with_tolerance(&values, 0.3, 0, 0.01), None);
/// ```
pub fn index_of_with_tolerance<F>(array: &[F], value: F, start: isize, tolerance: F) -> Option<usize>
where
    F: Float,
{
    let start = clamp_index(start, array.len());
    let lo = value - tolerance;
    let hi = value + tolerance;
    array[start..]
        .iter()
        .position(|&x| x >= lo && x <= hi)
        .map(|i| start + i)
}

/// Returns the index of the last element within `tolerance` of `value`,
/// at or before `start`. Bounds follow [`last_index_of`].
pub fn last_index_of_with_tolerance<F>(
    array: &[F],
    value: F,
    start: isize,
    tolerance: F,
) -> Option<usize>
where
    F: Float,
{
    if start < 0 || array.is_empty() {
        return None;
    }
    let end = clamp_index(start, array.len() - 1) + 1;
    let lo = value - tolerance;
    let hi = value + tolerance;
    array[..end].iter().rposition(|&x| x >= lo && x <= hi)
}

/// Returns `true` if `array` is in non-decreasing order.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::search::is_sorted;
/// assert!(is_sorted(&[1, 1, 2, 3]));
/// assert!(!is_sorted(&[2, 1]));
/// assert!(is_sorted::<u8>(&[]));
/// ```
#[inline]
pub fn is_sorted<T>(array: &[T]) -> bool
where
    T: PartialOrd,
{
    is_sorted_by(array, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Greater))
}

/// Returns `true` if no adjacent pair compares as `Ordering::Greater` under
/// `compare`.
pub fn is_sorted_by<T, F>(array: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    array
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Returns the index of `value` if it appears in `array`, searching from the
/// back. Shorthand for `last_index_of(array, value, len - 1)`.
#[inline]
pub fn rfind<T>(array: &[T], value: &T) -> Option<usize>
where
    T: PartialEq,
{
    last_index_of(array, value, len_as_isize(array.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_from_start() {
        let values = ["a", "b", "c", "b"];
        assert_eq!(index_of(&values, &"b", 0), Some(1));
        assert_eq!(index_of(&values, &"z", 0), None);
    }

    #[test]
    fn test_index_of_start_bounds() {
        let values = [1, 2, 3];
        assert_eq!(index_of(&values, &1, -7), Some(0));
        assert_eq!(index_of(&values, &3, 3), None);
        assert_eq!(index_of(&values, &3, isize::MAX), None);
        assert_eq!(index_of::<i32>(&[], &3, 0), None);
    }

    #[test]
    fn test_last_index_of_bounds() {
        let values = [1, 2, 1, 2];
        assert_eq!(last_index_of(&values, &1, 100), Some(2));
        assert_eq!(last_index_of(&values, &1, 1), Some(0));
        assert_eq!(last_index_of(&values, &2, 0), None);
        assert_eq!(last_index_of(&values, &1, -1), None);
        assert_eq!(last_index_of::<i32>(&[], &1, 3), None);
    }

    #[test]
    fn test_rfind() {
        assert_eq!(rfind(&[5, 6, 5], &5), Some(2));
        assert_eq!(rfind(&[5, 6, 5], &7), None);
    }

    #[test]
    fn test_contains() {
        assert!(contains(&[true, false], &false));
        assert!(!contains(&[true, true], &false));
        assert!(!contains::<char>(&[], &'x'));
    }

    #[test]
    fn test_index_of_with_tolerance() {
        let values = [1.0f64, 2.0, 3.0, 2.05];
        assert_eq!(index_of_with_tolerance(&values, 2.04, 0, 0.1), Some(1));
        assert_eq!(index_of_with_tolerance(&values, 2.04, 2, 0.1), Some(3));
        assert_eq!(index_of_with_tolerance(&values, 10.0, 0, 0.5), None);
    }

    #[test]
    fn test_index_of_with_tolerance_ignores_nan() {
        let values = [f32::NAN, 1.0];
        assert_eq!(index_of_with_tolerance(&values, f32::NAN, 0, 1.0), None);
        assert_eq!(index_of_with_tolerance(&values, 1.0, 0, 0.0), Some(1));
    }

    #[test]
    fn test_last_index_of_with_tolerance() {
        let values = [1.0f64, 2.0, 1.01];
        assert_eq!(last_index_of_with_tolerance(&values, 1.0, 10, 0.05), Some(2));
        assert_eq!(last_index_of_with_tolerance(&values, 1.0, 1, 0.05), Some(0));
        assert_eq!(last_index_of_with_tolerance(&values, 1.0, -1, 0.05), None);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&['a', 'b', 'b', 'z']));
        assert!(!is_sorted(&[3, 2, 1]));
        assert!(!is_sorted(&[1.0, f64::NAN, 2.0]));
    }

    #[test]
    fn test_is_sorted_by_reverse_order() {
        let values = [5, 4, 4, 1];
        assert!(is_sorted_by(&values, |a, b| b.cmp(a)));
        assert!(!is_sorted_by(&values, |a, b| a.cmp(b)));
    }
}
