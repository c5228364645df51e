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

//! # Copy-on-Write Edits
//!
//! Insertions and removals that leave the input untouched and return a new
//! `Vec<T>`. Index-based edits are strict: an index outside the slice is a
//! caller error and is reported as [`ArrayError::IndexOutOfBounds`], unlike
//! the clamping range operations elsewhere in this module.

use super::clamp_index;
use crate::error::ArrayError;

/// Returns a copy of `array` with `values` inserted before `index`.
///
/// `index == array.len()` appends.
///
/// # Errors
///
/// Returns [`ArrayError::IndexOutOfBounds`] if `index > array.len()`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::edit::insert;
/// assert_eq!(insert(&[1, 4], 1, &[2, 3]), Ok(vec![1, 2, 3, 4]));
/// assert!(insert(&[1, 4], 3, &[2]).is_err());
/// ```
pub fn insert<T>(array: &[T], index: usize, values: &[T]) -> Result<Vec<T>, ArrayError>
where
    T: Clone,
{
    if index > array.len() {
        return Err(ArrayError::IndexOutOfBounds {
            index,
            len: array.len(),
        });
    }

    let mut result = Vec::with_capacity(array.len() + values.len());
    result.extend_from_slice(&array[..index]);
    result.extend_from_slice(values);
    result.extend_from_slice(&array[index..]);
    Ok(result)
}

/// Returns a copy of `array` with `value` appended.
#[inline]
pub fn add<T>(array: &[T], value: T) -> Vec<T>
where
    T: Clone,
{
    let mut result = Vec::with_capacity(array.len() + 1);
    result.extend_from_slice(array);
    result.push(value);
    result
}

/// Returns a copy of `array` without the element at `index`.
///
/// # Errors
///
/// Returns [`ArrayError::IndexOutOfBounds`] if `index >= array.len()`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::edit::remove;
/// # use capstan_core::error::ArrayError;
/// assert_eq!(remove(&['a', 'b', 'c'], 1), Ok(vec!['a', 'c']));
/// assert_eq!(
///     remove(&['a'], 1),
///     Err(ArrayError::IndexOutOfBounds { index: 1, len: 1 })
/// );
/// ```
pub fn remove<T>(array: &[T], index: usize) -> Result<Vec<T>, ArrayError>
where
    T: Clone,
{
    if index >= array.len() {
        return Err(ArrayError::IndexOutOfBounds {
            index,
            len: array.len(),
        });
    }

    let mut result = Vec::with_capacity(array.len() - 1);
    result.extend_from_slice(&array[..index]);
    result.extend_from_slice(&array[index + 1..]);
    Ok(result)
}

/// Returns a copy of `array` without the elements at `indices`.
///
/// Indices may be given in any order and may repeat; every listed position
/// is removed once.
///
/// # Errors
///
/// Returns [`ArrayError::IndexOutOfBounds`] for the first index (in the
/// order given) that is `>= array.len()`. Nothing is removed in that case.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::edit::remove_all;
/// assert_eq!(remove_all(&[10, 20, 30, 40], &[3, 0, 3]), Ok(vec![20, 30]));
/// ```
pub fn remove_all<T>(array: &[T], indices: &[usize]) -> Result<Vec<T>, ArrayError>
where
    T: Clone,
{
    let mut marked = vec![false; array.len()];
    for &index in indices {
        match marked.get_mut(index) {
            Some(slot) => *slot = true,
            None => {
                return Err(ArrayError::IndexOutOfBounds {
                    index,
                    len: array.len(),
                });
            }
        }
    }

    Ok(array
        .iter()
        .zip(marked)
        .filter(|(_, removed)| !removed)
        .map(|(item, _)| item.clone())
        .collect())
}

/// Returns a copy of `array` without the first element equal to `value`.
///
/// If no element matches, the copy is identical to the input.
pub fn remove_element<T>(array: &[T], value: &T) -> Vec<T>
where
    T: Clone + PartialEq,
{
    match array.iter().position(|item| item == value) {
        Some(index) => {
            let mut result = array.to_vec();
            result.remove(index);
            result
        }
        None => array.to_vec(),
    }
}

/// Returns a copy of `array` without any element equal to `value`.
pub fn remove_all_occurrences<T>(array: &[T], value: &T) -> Vec<T>
where
    T: Clone + PartialEq,
{
    array.iter().filter(|item| *item != value).cloned().collect()
}

/// Returns a copy of `[start, end)`.
///
/// Bounds clamp into the slice; an empty or inverted range yields an empty
/// vector.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::edit::sub_array;
/// assert_eq!(sub_array(&[1, 2, 3, 4], -1, 2), vec![1, 2]);
/// assert_eq!(sub_array(&[1, 2, 3, 4], 3, 1), Vec::<i32>::new());
/// ```
pub fn sub_array<T>(array: &[T], start: isize, end: isize) -> Vec<T>
where
    T: Clone,
{
    let start = clamp_index(start, array.len());
    let end = clamp_index(end, array.len());
    if start >= end {
        return Vec::new();
    }
    array[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_front_middle_back() {
        let values = [2, 3];
        assert_eq!(insert(&values, 0, &[1]), Ok(vec![1, 2, 3]));
        assert_eq!(insert(&values, 1, &[9, 9]), Ok(vec![2, 9, 9, 3]));
        assert_eq!(insert(&values, 2, &[4]), Ok(vec![2, 3, 4]));
    }

    #[test]
    fn test_insert_nothing_is_copy() {
        assert_eq!(insert(&[1, 2], 1, &[]), Ok(vec![1, 2]));
    }

    #[test]
    fn test_insert_out_of_bounds() {
        assert_eq!(
            insert(&[1, 2], 3, &[0]),
            Err(ArrayError::IndexOutOfBounds { index: 3, len: 2 })
        );
    }

    #[test]
    fn test_add() {
        assert_eq!(add(&[], 'x'), vec!['x']);
        assert_eq!(add(&["a"], "b"), vec!["a", "b"]);
    }

    #[test]
    fn test_remove() {
        assert_eq!(remove(&[1, 2, 3], 0), Ok(vec![2, 3]));
        assert_eq!(remove(&[1, 2, 3], 2), Ok(vec![1, 2]));
    }

    #[test]
    fn test_remove_out_of_bounds() {
        assert_eq!(
            remove::<u8>(&[], 0),
            Err(ArrayError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_remove_all_with_duplicates() {
        let values = ["a", "b", "c", "d", "e"];
        assert_eq!(remove_all(&values, &[4, 1, 1]), Ok(vec!["a", "c", "d"]));
        assert_eq!(remove_all(&values, &[]), Ok(values.to_vec()));
    }

    #[test]
    fn test_remove_all_reports_first_bad_index() {
        assert_eq!(
            remove_all(&[1, 2, 3], &[0, 7, 9]),
            Err(ArrayError::IndexOutOfBounds { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_remove_element() {
        assert_eq!(remove_element(&[1, 2, 1], &1), vec![2, 1]);
        assert_eq!(remove_element(&[1, 2, 1], &5), vec![1, 2, 1]);
    }

    #[test]
    fn test_remove_all_occurrences() {
        assert_eq!(remove_all_occurrences(&[1, 2, 1, 3], &1), vec![2, 3]);
        assert_eq!(
            remove_all_occurrences(&[true, true], &true),
            Vec::<bool>::new()
        );
    }

    #[test]
    fn test_sub_array() {
        let values = [0, 1, 2, 3, 4];
        assert_eq!(sub_array(&values, 1, 3), vec![1, 2]);
        assert_eq!(sub_array(&values, -5, 100), values.to_vec());
        assert!(sub_array(&values, 4, 2).is_empty());
        assert!(sub_array(&values, 9, 12).is_empty());
    }
}
