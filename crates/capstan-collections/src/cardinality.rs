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

//! Occurrence counting.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Counts how often each element occurs in `items`.
///
/// # Examples
///
/// ```rust
/// # use capstan_collections::cardinality::cardinality_map;
/// let counts = cardinality_map(["a", "b", "a"]);
/// assert_eq!(counts["a"], 2);
/// assert_eq!(counts["b"], 1);
/// assert!(!counts.contains_key("c"));
/// ```
pub fn cardinality_map<T, I>(items: I) -> FxHashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = FxHashMap::default();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Counts how often `value` occurs in `items`.
#[inline]
pub fn cardinality<T, I>(value: &T, items: I) -> usize
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    items.into_iter().filter(|item| item == value).count()
}
