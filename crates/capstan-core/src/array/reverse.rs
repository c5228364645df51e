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

//! Slice reversal with the same permissive bounds as the shift operations.

use super::{clamp_index, len_as_isize};

/// Reverses the whole slice in place.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::reverse::reverse;
/// let mut values = [1, 2, 3];
/// reverse(&mut values);
/// assert_eq!(values, [3, 2, 1]);
/// ```
#[inline]
pub fn reverse<T>(array: &mut [T]) {
    let len = len_as_isize(array.len());
    reverse_range(array, 0, len);
}

/// Reverses `[start, end)` in place.
///
/// `start` clamps to `0` and `end` to the slice length; an empty or
/// inverted range is a no-op.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::reverse::reverse_range;
/// let mut values = [1, 2, 3, 4, 5];
/// reverse_range(&mut values, -3, 3);
/// assert_eq!(values, [3, 2, 1, 4, 5]);
/// ```
pub fn reverse_range<T>(array: &mut [T], start: isize, end: isize) {
    let len = array.len();
    let start = clamp_index(start, len);
    let end = clamp_index(end, len);
    if start >= end {
        return;
    }
    array[start..end].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_whole() {
        let mut values = vec!['a', 'b', 'c', 'd'];
        reverse(&mut values);
        assert_eq!(values, vec!['d', 'c', 'b', 'a']);
    }

    #[test]
    fn test_reverse_empty_and_single() {
        let mut empty: Vec<u8> = vec![];
        reverse(&mut empty);
        assert!(empty.is_empty());

        let mut single = [7];
        reverse(&mut single);
        assert_eq!(single, [7]);
    }

    #[test]
    fn test_reverse_range_clamps() {
        let mut values = [1, 2, 3, 4, 5];
        reverse_range(&mut values, 2, 100);
        assert_eq!(values, [1, 2, 5, 4, 3]);
    }

    #[test]
    fn test_reverse_range_inverted_is_no_op() {
        let mut values = [1, 2, 3];
        reverse_range(&mut values, 2, 1);
        reverse_range(&mut values, 5, 9);
        reverse_range(&mut values, -4, -1);
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn test_reverse_twice_restores() {
        let original = [1.0f32, -2.0, 3.5, 0.0];
        let mut values = original;
        reverse(&mut values);
        reverse(&mut values);
        assert_eq!(values, original);
    }
}
