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

//! # Slice Utilities
//!
//! Helpers for manipulating and querying slices of arbitrary element type.
//! Every routine is generic over `T`, so a single implementation serves
//! booleans, integers, floats, characters and owned values alike.
//!
//! ## Submodules
//!
//! - `rotate`: In-place cyclic shift of a sub-range (block-swap reduction)
//!   and the block swap primitive it is built from.
//! - `reverse`: Whole-slice and clamped sub-range reversal.
//! - `shuffle`: Fisher–Yates shuffling driven by any `rand::Rng`.
//! - `search`: Forward/backward searches with permissive start indices,
//!   tolerance-based float search, and sortedness checks.
//! - `edit`: Copy-on-write insertion and removal returning a new `Vec<T>`.
//!
//! ## Index Conventions
//!
//! Two contracts coexist on purpose:
//!
//! - Range-based operations (`shift_range`, `swap_range`, `reverse_range`,
//!   `sub_array`, `index_of`, ...) accept signed `isize` bounds and clamp
//!   them into the slice. They never fail.
//! - Index-based edits (`insert`, `remove`, `remove_all`) are strict and
//!   return [`ArrayError::IndexOutOfBounds`](crate::error::ArrayError) for
//!   an index outside the slice.

pub mod edit;
pub mod reverse;
pub mod rotate;
pub mod search;
pub mod shuffle;

/// Converts a slice length to `isize`, saturating for zero-sized element
/// types whose slices may exceed `isize::MAX` elements.
#[inline(always)]
pub(crate) fn len_as_isize(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

/// Clamps a signed index into `[0, len]`.
#[inline(always)]
pub(crate) fn clamp_index(index: isize, len: usize) -> usize {
    if index <= 0 {
        0
    } else {
        index.unsigned_abs().min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_index_negative_is_zero() {
        assert_eq!(clamp_index(-5, 7), 0);
        assert_eq!(clamp_index(isize::MIN, 7), 0);
    }

    #[test]
    fn test_clamp_index_caps_at_len() {
        assert_eq!(clamp_index(1000, 7), 7);
        assert_eq!(clamp_index(7, 7), 7);
        assert_eq!(clamp_index(3, 7), 3);
    }

    #[test]
    fn test_len_as_isize() {
        assert_eq!(len_as_isize(0), 0);
        assert_eq!(len_as_isize(42), 42);
        assert_eq!(len_as_isize(usize::MAX), isize::MAX);
    }
}
