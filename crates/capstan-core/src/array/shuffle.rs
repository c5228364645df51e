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

//! # Random Permutation
//!
//! In-place Fisher–Yates shuffle. The random source is supplied by the
//! caller so that results are reproducible with a seeded generator.
//!
//! ```rust
//! use capstan_core::array::shuffle::shuffle;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut values = [1, 2, 3, 4, 5];
//! shuffle(&mut values, &mut rng);
//!
//! let mut sorted = values;
//! sorted.sort();
//! assert_eq!(sorted, [1, 2, 3, 4, 5]);
//! ```

use rand::Rng;

/// Randomly permutes `array` using `rng`.
///
/// Walks from the back: for every `i` in `(1..len).rev()` the element at `i`
/// is swapped with a uniformly chosen index in `0..=i`. Every permutation is
/// equally likely given a uniform generator. Slices with fewer than two
/// elements are left untouched.
pub fn shuffle<T, R>(array: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    let len = array.len();
    if len < 2 {
        log::trace!("shuffle: slice of length {} is already a permutation of itself", len);
        return;
    }

    for i in (1..len).rev() {
        let j = rng.random_range(0..=i);
        array.swap(i, j);
    }
}
