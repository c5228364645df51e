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

//! # Padding and Repetition
//!
//! Widths are measured in `char`s. A pad string is cycled and truncated to
//! fill exactly the missing width; an empty pad string falls back to a
//! single space. Inputs already at or beyond the requested width are
//! returned unchanged.
//!
//! ```rust
//! use capstan_text::pad::{center, left_pad, right_pad};
//!
//! assert_eq!(left_pad("7", 3, "0"), "007");
//! assert_eq!(right_pad("ab", 7, "xyz"), "abxyzxy");
//! assert_eq!(center("ab", 5, "-"), "-ab--");
//! ```

/// The pad string used when the caller passes an empty one.
pub const DEFAULT_PAD: &str = " ";

/// Pads `text` on the left to `size` characters.
pub fn left_pad(text: &str, size: usize, pad: &str) -> String {
    let len = text.chars().count();
    if size <= len {
        return text.to_owned();
    }
    let mut result = padding(size - len, pad);
    result.push_str(text);
    result
}

/// Pads `text` on the right to `size` characters.
pub fn right_pad(text: &str, size: usize, pad: &str) -> String {
    let len = text.chars().count();
    if size <= len {
        return text.to_owned();
    }
    let mut result = String::with_capacity(text.len() + size - len);
    result.push_str(text);
    result.push_str(&padding(size - len, pad));
    result
}

/// Centers `text` in `size` characters. When the padding cannot be split
/// evenly, the extra character goes to the right.
pub fn center(text: &str, size: usize, pad: &str) -> String {
    let len = text.chars().count();
    if size <= len {
        return text.to_owned();
    }
    let left = (size - len) / 2;
    right_pad(&left_pad(text, len + left, pad), size, pad)
}

/// Returns `text` repeated `times` times.
#[inline]
pub fn repeat(text: &str, times: usize) -> String {
    text.repeat(times)
}

/// Returns `text` repeated `times` times with `separator` between
/// consecutive copies.
///
/// # Examples
///
/// ```rust
/// # use capstan_text::pad::repeat_with_separator;
/// assert_eq!(repeat_with_separator("?", ", ", 3), "?, ?, ?");
/// assert_eq!(repeat_with_separator("?", ", ", 0), "");
/// ```
pub fn repeat_with_separator(text: &str, separator: &str, times: usize) -> String {
    vec![text; times].join(separator)
}

/// Builds exactly `width` characters by cycling `pad`.
fn padding(width: usize, pad: &str) -> String {
    let pad = if pad.is_empty() { DEFAULT_PAD } else { pad };
    pad.chars().cycle().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_pad() {
        assert_eq!(left_pad("bat", 5, "yz"), "yzbat");
        assert_eq!(left_pad("bat", 8, "yz"), "yzyzybat");
        assert_eq!(left_pad("bat", 1, "yz"), "bat");
        assert_eq!(left_pad("bat", 5, ""), "  bat");
        assert_eq!(left_pad("", 3, "z"), "zzz");
    }

    #[test]
    fn test_right_pad() {
        assert_eq!(right_pad("bat", 5, "yz"), "batyz");
        assert_eq!(right_pad("bat", 3, "yz"), "bat");
        assert_eq!(right_pad("bat", 4, ""), "bat ");
    }

    #[test]
    fn test_padding_counts_chars_not_bytes() {
        assert_eq!(left_pad("ü", 3, "·"), "··ü");
        assert_eq!(right_pad("日本", 4, "*"), "日本**");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("", 4, " "), "    ");
        assert_eq!(center("ab", 4, " "), " ab ");
        assert_eq!(center("abcd", 2, " "), "abcd");
        assert_eq!(center("a", 4, "yz"), "yayz");
        assert_eq!(center("abc", 7, ""), "  abc  ");
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat("ab", 3), "ababab");
        assert_eq!(repeat("ab", 0), "");
        assert_eq!(repeat_with_separator("ab", "-", 1), "ab");
        assert_eq!(repeat_with_separator("", "-", 3), "--");
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_padded_width_is_max_of_size_and_len(
                text in "\\PC{0,12}",
                size in 0usize..24,
                pad in "\\PC{0,3}",
            ) {
                let expected = size.max(text.chars().count());
                prop_assert_eq!(left_pad(&text, size, &pad).chars().count(), expected);
                prop_assert_eq!(right_pad(&text, size, &pad).chars().count(), expected);
                prop_assert_eq!(center(&text, size, &pad).chars().count(), expected);
            }

            #[test]
            fn test_padding_preserves_text(text in "[a-z]{0,8}", size in 0usize..16) {
                prop_assert!(left_pad(&text, size, "*").ends_with(text.as_str()));
                prop_assert!(right_pad(&text, size, "*").starts_with(text.as_str()));
                prop_assert!(center(&text, size, "*").contains(text.as_str()));
            }
        }
    }
}
