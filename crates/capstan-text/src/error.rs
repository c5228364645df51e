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

//! Error types returned by the text helpers.

use thiserror::Error;

/// Errors raised by abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TextError {
    /// The requested width cannot hold the marker plus one character.
    #[error("minimum abbreviation width is {minimum}")]
    WidthTooSmall {
        /// Smallest width that would have been accepted.
        minimum: usize,
    },
    /// The requested width cannot hold a marker on both sides of one
    /// character, which eliding around an offset requires.
    #[error("minimum abbreviation width with offset is {minimum}")]
    WidthTooSmallWithOffset {
        /// Smallest width that would have been accepted.
        minimum: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_error_display() {
        assert_eq!(
            TextError::WidthTooSmall { minimum: 4 }.to_string(),
            "minimum abbreviation width is 4"
        );
        assert_eq!(
            TextError::WidthTooSmallWithOffset { minimum: 7 }.to_string(),
            "minimum abbreviation width with offset is 7"
        );
    }
}
