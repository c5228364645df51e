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

//! # In-Place Cyclic Shift
//!
//! Rotates a contiguous sub-range of a slice by a signed offset without an
//! auxiliary buffer. The element at `start + k` ends up at
//! `start + ((k + offset) mod n)`, where `n` is the length of the range.
//! Positive offsets rotate towards higher indices, negative offsets towards
//! lower ones.
//!
//! ## Algorithm
//!
//! Block-swap reduction: with `complement = n - offset`, the two blocks of
//! the window are exchanged piecewise, and after each exchange the problem
//! shrinks to a strictly smaller window (or finishes). This uses a constant
//! number of scalars and `O(n)` element swaps in total, independent of the
//! offset.
//!
//! ## Clamping
//!
//! Bounds and offsets are never rejected. Negative starts clamp to `0`,
//! ends beyond the slice clamp to its length, and offsets are reduced
//! modulo the range length. Ranges holding fewer than two elements are a
//! no-op.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_core::array::rotate::{shift, shift_range};
//!
//! let mut values = [1, 2, 3, 4, 5, 6, 7];
//! shift(&mut values, 3);
//! assert_eq!(values, [5, 6, 7, 1, 2, 3, 4]);
//!
//! let mut values = [1, 2, 3, 4, 5, 6, 7];
//! shift_range(&mut values, 1, 6, 2);
//! assert_eq!(values, [1, 5, 6, 2, 3, 4, 7]);
//! ```

use super::{clamp_index, len_as_isize};
use crate::error::ArrayError;
use std::cmp::Ordering;

/// Exchanges `len` consecutive elements starting at `offset1` with those
/// starting at `offset2`.
///
/// Element `offset1 + i` is swapped with `offset2 + i` for increasing `i`,
/// so overlapping regions behave like a sequence of single swaps.
///
/// The call is a no-op if the slice is empty, if either offset is at or past
/// the end, if the offsets coincide after clamping, or if `len <= 0`.
/// Negative offsets clamp to `0` and `len` is shortened so that neither
/// region runs past the end of the slice.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::rotate::swap_range;
/// let mut values = [1, 2, 3, 4, 5];
/// swap_range(&mut values, 0, 3, 2);
/// assert_eq!(values, [4, 5, 3, 1, 2]);
///
/// // The second region would run past the end, so only one pair is swapped.
/// let mut values = [1, 2, 3, 4, 5];
/// swap_range(&mut values, 0, 4, 3);
/// assert_eq!(values, [5, 2, 3, 4, 1]);
/// ```
pub fn swap_range<T>(array: &mut [T], offset1: isize, offset2: isize, len: isize) {
    let array_len = array.len();
    let signed_len = len_as_isize(array_len);
    if array_len == 0 || offset1 >= signed_len || offset2 >= signed_len || len <= 0 {
        return;
    }

    let first = clamp_index(offset1, array_len);
    let second = clamp_index(offset2, array_len);
    if first == second {
        return;
    }

    let count = len
        .unsigned_abs()
        .min(array_len - first)
        .min(array_len - second);

    for i in 0..count {
        array.swap(first + i, second + i);
    }
}

/// Swaps the single elements at `offset1` and `offset2`, with the same
/// clamping rules as [`swap_range`].
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::rotate::swap;
/// let mut values = ['a', 'b', 'c'];
/// swap(&mut values, 0, 2);
/// assert_eq!(values, ['c', 'b', 'a']);
///
/// swap(&mut values, 0, 10);
/// assert_eq!(values, ['c', 'b', 'a']);
/// ```
#[inline]
pub fn swap<T>(array: &mut [T], offset1: isize, offset2: isize) {
    swap_range(array, offset1, offset2, 1);
}

/// Rotates the half-open range `[start, end)` of `array` by `offset` in place.
///
/// See the module documentation for the clamping rules. This function never
/// fails; out-of-range arguments are normalized or turn the call into a no-op.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::rotate::shift_range;
/// let mut values = [1, 2, 3, 4, 5, 6, 7];
/// shift_range(&mut values, -5, 1000, -2);
/// assert_eq!(values, [3, 4, 5, 6, 7, 1, 2]);
/// ```
pub fn shift_range<T>(array: &mut [T], start: isize, end: isize, offset: isize) {
    let len = array.len();
    if len < 2 {
        return;
    }

    let mut start = clamp_index(start, len);
    let end = clamp_index(end, len);
    if start >= len - 1 || end <= start + 1 {
        log::trace!(
            "shift_range: clamped range [{}, {}) of length {} holds fewer than two elements",
            start,
            end,
            len
        );
        return;
    }

    let mut n = end - start;
    // `rem_euclid` already yields a value in `[0, n)` for negative offsets.
    let mut offset = offset.rem_euclid(len_as_isize(n)).unsigned_abs();

    while n > 1 && offset > 0 {
        let complement = n - offset;
        match offset.cmp(&complement) {
            Ordering::Greater => {
                swap_disjoint_blocks(array, start, start + n - complement, complement);
                n = offset;
                offset -= complement;
            }
            Ordering::Less => {
                swap_disjoint_blocks(array, start, start + complement, offset);
                start += offset;
                n = complement;
            }
            Ordering::Equal => {
                swap_disjoint_blocks(array, start, start + complement, offset);
                break;
            }
        }
    }
}

/// Rotates the whole slice by `offset`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::rotate::shift;
/// let mut values = [1, 2, 3, 4, 5, 6, 7];
/// shift(&mut values, -2);
/// assert_eq!(values, [3, 4, 5, 6, 7, 1, 2]);
/// ```
#[inline]
pub fn shift<T>(array: &mut [T], offset: isize) {
    let len = len_as_isize(array.len());
    shift_range(array, 0, len, offset);
}

/// Rotates the whole slice by `offset`, rejecting an absent slice.
///
/// This is the entry point for callers that carry a possibly missing
/// sequence. An absent sequence fails before anything is touched; every
/// other input behaves exactly like [`shift`].
///
/// # Errors
///
/// Returns [`ArrayError::NullArgument`] if `array` is `None`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::array::rotate::try_shift;
/// # use capstan_core::error::ArrayError;
/// let mut values = vec![1, 2, 3];
/// assert_eq!(try_shift(Some(values.as_mut_slice()), 1), Ok(()));
/// assert_eq!(values, vec![3, 1, 2]);
///
/// assert_eq!(try_shift::<i32>(None, 1), Err(ArrayError::NullArgument));
/// ```
pub fn try_shift<T>(array: Option<&mut [T]>, offset: isize) -> Result<(), ArrayError> {
    let array = array.ok_or(ArrayError::NullArgument)?;
    shift(array, offset);
    Ok(())
}

/// Swaps `[a, a + count)` with `[b, b + count)`; the blocks must not overlap
/// and `a` must precede `b`.
#[inline(always)]
fn swap_disjoint_blocks<T>(array: &mut [T], a: usize, b: usize, count: usize) {
    debug_assert!(
        a + count <= b,
        "swap_disjoint_blocks called with overlapping blocks: a={}, b={}, count={}",
        a,
        b,
        count
    );
    debug_assert!(
        b + count <= array.len(),
        "swap_disjoint_blocks block out of bounds: b={}, count={}, len={}",
        b,
        count,
        array.len()
    );

    let (head, tail) = array.split_at_mut(b);
    head[a..a + count].swap_with_slice(&mut tail[..count]);
}
