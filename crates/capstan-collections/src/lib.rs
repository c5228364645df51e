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

//! # Capstan Collections
//!
//! Multiset ("bag") algebra over arbitrary collections. Every function
//! accepts anything that implements `IntoIterator`, so both owned values
//! and references work:
//!
//! ```rust
//! use capstan_collections::bag::{intersection, union};
//!
//! let a = vec![1, 2, 2, 3];
//! let b = vec![2, 3, 3, 4];
//!
//! assert_eq!(union(&a, &b), vec![&1, &2, &2, &3, &3, &4]);
//! assert_eq!(intersection(a, b), vec![2, 3]);
//! ```
//!
//! ## Ordering
//!
//! Results list each distinct element once per retained occurrence, grouped
//! together, in order of first appearance: first everything seen in the
//! left input, then what only the right input contributed. `subtract`
//! instead preserves the order of its left input.
//!
//! ## Modules
//!
//! - `cardinality`: Occurrence counting backed by `FxHashMap`.
//! - `bag`: `union`, `intersection`, `disjunction` and `subtract`.
//! - `compare`: Sub-collection, equality and containment checks.
//! - `map`: Key/value inversion.

pub mod bag;
pub mod cardinality;
pub mod compare;
pub mod map;
