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

//! Map inversion.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Swaps keys and values.
///
/// Accepts any map or sequence of pairs. When several keys share a value,
/// the key seen last in iteration order wins; pass an ordered source such
/// as a `BTreeMap` or a `Vec` of pairs for a deterministic outcome.
///
/// # Examples
///
/// ```rust
/// # use capstan_collections::map::invert_map;
/// let inverted = invert_map(vec![("one", 1), ("uno", 1), ("two", 2)]);
/// assert_eq!(inverted[&1], "uno");
/// assert_eq!(inverted[&2], "two");
/// ```
pub fn invert_map<K, V, I>(map: I) -> FxHashMap<V, K>
where
    V: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let mut inverted = FxHashMap::default();
    for (key, value) in map {
        if inverted.insert(value, key).is_some() {
            log::trace!("invert_map: duplicate value, keeping the later key");
        }
    }
    inverted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_invert_map_empty() {
        let inverted: FxHashMap<u8, u8> = invert_map(Vec::new());
        assert!(inverted.is_empty());
    }

    #[test]
    fn test_invert_map_round_trips_injective_maps() {
        let mut map = BTreeMap::new();
        map.insert('a', 1);
        map.insert('b', 2);
        let inverted = invert_map(map.clone());
        assert_eq!(inverted.len(), 2);
        let back: BTreeMap<char, i32> = invert_map(inverted).into_iter().collect();
        assert_eq!(back, map);
    }

    #[test]
    fn test_invert_map_last_key_wins() {
        let mut map = BTreeMap::new();
        map.insert(1, "x");
        map.insert(2, "x");
        map.insert(3, "y");
        let inverted = invert_map(&map);
        assert_eq!(inverted.len(), 2);
        assert_eq!(inverted[&"x"], &2);
        assert_eq!(inverted[&"y"], &3);
    }
}
