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

//! # Capstan Core
//!
//! Foundational helpers for slices, integers and small value types. Every
//! routine is generic and stateless: it borrows its inputs for the duration
//! of the call and keeps nothing afterwards.
//!
//! ## Modules
//!
//! - `array`: In-place cyclic shift of a sub-range via block-swap reduction,
//!   the block swap primitive, reversal, Fisher–Yates shuffling, permissive
//!   searches, and strict copy-on-write edits.
//! - `num`: Primality, `gcd`/`lcm`, factorial and digit sums over all
//!   primitive integers, with overflow reported as an error.
//! - `tuple`: `Pair` and `Triple` value types.
//! - `guard`: Boolean reductions, three-valued `Option<bool>` helpers, and
//!   first-present-value selection.
//! - `error`: The error enums returned by the strict operations above.
//!
//! ## Bounds Policy
//!
//! Range-taking operations clamp out-of-range bounds instead of failing.
//! Index-taking operations reject out-of-range indices. Both are deliberate;
//! see the `array` module for details.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for `Pair` and `Triple`.

pub mod array;
pub mod error;
pub mod guard;
pub mod num;
pub mod tuple;
