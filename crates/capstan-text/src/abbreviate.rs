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

//! # Abbreviation
//!
//! Shortens text to a maximum width by replacing omitted characters with a
//! marker (`"..."` by default). Widths and offsets count `char`s.
//!
//! With an offset, the abbreviation tries to keep the character at that
//! offset visible, eliding on the left, on the right, or on both sides:
//!
//! ```rust
//! use capstan_text::abbreviate::{abbreviate, abbreviate_with, DEFAULT_MARKER};
//!
//! assert_eq!(abbreviate("abcdefg", 6).unwrap(), "abc...");
//! assert_eq!(
//!     abbreviate_with("abcdefghijklmno", DEFAULT_MARKER, 5, 10).unwrap(),
//!     "...fghi..."
//! );
//! assert_eq!(
//!     abbreviate_with("abcdefghijklmno", DEFAULT_MARKER, 12, 10).unwrap(),
//!     "...ijklmno"
//! );
//! ```

use crate::error::TextError;

/// The marker inserted in place of omitted characters by [`abbreviate`].
pub const DEFAULT_MARKER: &str = "...";

/// Abbreviates `text` to at most `max_width` characters using
/// [`DEFAULT_MARKER`].
///
/// # Errors
///
/// Returns [`TextError::WidthTooSmall`] if `max_width` cannot hold the
/// marker plus one character. The width is checked before the length, so
/// non-empty text that already fits is rejected too.
#[inline]
pub fn abbreviate(text: &str, max_width: usize) -> Result<String, TextError> {
    abbreviate_with(text, DEFAULT_MARKER, 0, max_width)
}

/// Abbreviates `text` to at most `max_width` characters using `marker`,
/// keeping the character at `offset` visible where possible.
///
/// - Non-empty text with an empty marker is simply truncated to `max_width`
///   (when `max_width > 0`).
/// - Empty text, or an empty marker, returns the text unchanged.
/// - Text that already fits is returned unchanged.
/// - `offset` is clamped to the text length and pulled back so that at
///   least `max_width - marker` characters follow it.
/// - If the offset lies within `marker + 1` of the start, the head of the
///   text is kept and the marker appended.
/// - Otherwise the text is elided on the left, and also on the right if
///   more remains than fits.
///
/// # Errors
///
/// - [`TextError::WidthTooSmall`] if `max_width < marker + 1`.
/// - [`TextError::WidthTooSmallWithOffset`] if eliding on the left is
///   required and `max_width < 2 * marker + 1`.
pub fn abbreviate_with(
    text: &str,
    marker: &str,
    offset: usize,
    max_width: usize,
) -> Result<String, TextError> {
    if !text.is_empty() && marker.is_empty() && max_width > 0 {
        return Ok(text.chars().take(max_width).collect());
    }
    if text.is_empty() || marker.is_empty() {
        return Ok(text.to_owned());
    }

    let marker_len = marker.chars().count();
    let min_width = marker_len + 1;
    if max_width < min_width {
        return Err(TextError::WidthTooSmall { minimum: min_width });
    }

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    if len <= max_width {
        return Ok(text.to_owned());
    }

    let keep = max_width - marker_len;
    let mut offset = offset.min(len);
    if len - offset < keep {
        log::debug!(
            "abbreviate: offset {} leaves fewer than {} characters, pulling back to {}",
            offset,
            keep,
            len - keep
        );
        offset = len - keep;
    }

    if offset <= marker_len + 1 {
        let mut result: String = chars[..keep].iter().collect();
        result.push_str(marker);
        return Ok(result);
    }

    let min_width_with_offset = 2 * marker_len + 1;
    if max_width < min_width_with_offset {
        return Err(TextError::WidthTooSmallWithOffset {
            minimum: min_width_with_offset,
        });
    }

    let mut result = String::with_capacity(text.len());
    result.push_str(marker);
    if offset + keep < len {
        // Elided on both sides: the window keeps room for the trailing marker.
        result.extend(&chars[offset..offset + keep - marker_len]);
        result.push_str(marker);
    } else {
        result.extend(&chars[len - keep..]);
    }
    Ok(result)
}

/// Replaces the middle of `text` with `middle` so that the result is
/// `length` characters long.
///
/// The text is returned unchanged if either string is empty, if it already
/// fits in `length`, or if `length` cannot keep at least one character on
/// each side of `middle`. When the kept characters cannot be split evenly,
/// the extra one stays at the front.
///
/// # Examples
///
/// ```rust
/// # use capstan_text::abbreviate::abbreviate_middle;
/// assert_eq!(abbreviate_middle("abcdef", ".", 4), "ab.f");
/// assert_eq!(abbreviate_middle("abc", ".", 3), "abc");
/// ```
pub fn abbreviate_middle(text: &str, middle: &str, length: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let middle_len = middle.chars().count();
    if chars.is_empty() || middle.is_empty() || length >= chars.len() || length < middle_len + 2
    {
        return text.to_owned();
    }

    let target = length - middle_len;
    let head = target / 2 + target % 2;
    let tail_start = chars.len() - target / 2;

    let mut result: String = chars[..head].iter().collect();
    result.push_str(middle);
    result.extend(&chars[tail_start..]);
    result
}
