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

//! # Capstan Text
//!
//! Helpers for character sequences. Lengths, widths and offsets are counted
//! in `char`s (Unicode scalar values), never in bytes.
//!
//! ## Modules
//!
//! - `predicates`: Emptiness, blankness and character-class checks.
//! - `pad`: Left, right and centered padding plus repetition.
//! - `abbreviate`: Width-limited abbreviation with a configurable marker
//!   and an optional offset to keep in view.
//! - `error`: The error returned when an abbreviation width is too small.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_text::{abbreviate::abbreviate, pad::center, predicates::is_blank};
//!
//! assert!(is_blank(Some("   ")));
//! assert_eq!(center("ok", 6, "*"), "**ok**");
//! assert_eq!(abbreviate("Now is the time for all good men", 10).unwrap(), "Now is ...");
//! ```

pub mod abbreviate;
pub mod error;
pub mod pad;
pub mod predicates;
