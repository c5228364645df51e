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

//! Error types returned by the strict operations of this crate.
//!
//! Permissive operations (anything that clamps its bounds) never fail and
//! therefore never produce these.

use thiserror::Error;

/// Errors raised by slice operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArrayError {
    /// The sequence argument was absent.
    #[error("the array argument must not be absent")]
    NullArgument,
    /// An index-based edit addressed a position outside the slice.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the slice at the time of the call.
        len: usize,
    },
}

/// Errors raised by integer helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumError {
    /// The mathematically correct result does not fit the integer type.
    #[error("{operation} overflowed the target integer type")]
    Overflow {
        /// Name of the operation that overflowed, e.g. `"gcd"`.
        operation: &'static str,
    },
}

/// Errors raised by the boolean reductions in [`crate::guard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GuardError {
    /// A reduction that has no neutral answer was applied to no values.
    #[error("cannot reduce an empty slice of booleans")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_error_display() {
        assert_eq!(
            ArrayError::NullArgument.to_string(),
            "the array argument must not be absent"
        );
        assert_eq!(
            ArrayError::IndexOutOfBounds { index: 5, len: 3 }.to_string(),
            "index 5 is out of bounds for length 3"
        );
    }

    #[test]
    fn test_num_error_display() {
        let err = NumError::Overflow {
            operation: "factorial",
        };
        assert_eq!(err.to_string(), "factorial overflowed the target integer type");
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(ArrayError::NullArgument);
        assert_error(NumError::Overflow { operation: "lcm" });
        assert_error(GuardError::Empty);
    }
}
