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

//! # Named Tuples
//!
//! `Pair<L, R>` and `Triple<L, M, R>` are small value types with named
//! accessors. They order lexicographically (left first), hash and compare by
//! value, and convert to and from plain tuples.
//!
//! ```rust
//! use capstan_core::tuple::{Pair, Triple};
//!
//! let p = Pair::new("port", 8080);
//! assert_eq!(p.to_string(), "(port,8080)");
//! assert_eq!(p.swap(), Pair::new(8080, "port"));
//!
//! let t: Triple<_, _, _> = (1, 'b', "c").into();
//! assert_eq!(*t.middle(), 'b');
//! ```

use std::fmt::{Display, Formatter};

/// A pair of two values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<L, R> {
    left: L,
    right: R,
}

impl<L, R> Pair<L, R> {
    /// Creates a new `Pair`.
    #[inline]
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left value.
    #[inline]
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right value.
    #[inline]
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Consumes the pair and returns its values.
    #[inline]
    pub fn into_inner(self) -> (L, R) {
        (self.left, self.right)
    }

    /// Returns a pair with left and right exchanged.
    #[inline]
    pub fn swap(self) -> Pair<R, L> {
        Pair::new(self.right, self.left)
    }

    /// Maps the left value, keeping the right one.
    #[inline]
    pub fn map_left<U, F>(self, f: F) -> Pair<U, R>
    where
        F: FnOnce(L) -> U,
    {
        Pair::new(f(self.left), self.right)
    }

    /// Maps the right value, keeping the left one.
    #[inline]
    pub fn map_right<U, F>(self, f: F) -> Pair<L, U>
    where
        F: FnOnce(R) -> U,
    {
        Pair::new(self.left, f(self.right))
    }
}

impl<L, R> From<(L, R)> for Pair<L, R> {
    #[inline]
    fn from((left, right): (L, R)) -> Self {
        Self::new(left, right)
    }
}

impl<L, R> From<Pair<L, R>> for (L, R) {
    #[inline]
    fn from(pair: Pair<L, R>) -> Self {
        pair.into_inner()
    }
}

impl<L, R> Display for Pair<L, R>
where
    L: Display,
    R: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.left, self.right)
    }
}

/// A triple of three values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple<L, M, R> {
    left: L,
    middle: M,
    right: R,
}

impl<L, M, R> Triple<L, M, R> {
    /// Creates a new `Triple`.
    #[inline]
    pub const fn new(left: L, middle: M, right: R) -> Self {
        Self {
            left,
            middle,
            right,
        }
    }

    /// Returns a reference to the left value.
    #[inline]
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the middle value.
    #[inline]
    pub const fn middle(&self) -> &M {
        &self.middle
    }

    /// Returns a reference to the right value.
    #[inline]
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Consumes the triple and returns its values.
    #[inline]
    pub fn into_inner(self) -> (L, M, R) {
        (self.left, self.middle, self.right)
    }
}

impl<L, M, R> From<(L, M, R)> for Triple<L, M, R> {
    #[inline]
    fn from((left, middle, right): (L, M, R)) -> Self {
        Self::new(left, middle, right)
    }
}

impl<L, M, R> From<Triple<L, M, R>> for (L, M, R) {
    #[inline]
    fn from(triple: Triple<L, M, R>) -> Self {
        triple.into_inner()
    }
}

impl<L, M, R> Display for Triple<L, M, R>
where
    L: Display,
    M: Display,
    R: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.left, self.middle, self.right)
    }
}
