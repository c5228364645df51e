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

//! Character-class predicates over string slices.
//!
//! Absent input is modelled as `Option<&str>` where an absent string and an
//! empty one are worth telling apart; the remaining predicates take `&str`.

use icu_properties::CodePointMapData;
use icu_properties::props::GeneralCategory;

/// Returns `true` if `text` is absent or has no characters.
#[inline]
pub fn is_empty(text: Option<&str>) -> bool {
    text.is_none_or(str::is_empty)
}

/// Returns `true` if `text` is absent, empty, or whitespace only.
///
/// # Examples
///
/// ```rust
/// # use capstan_text::predicates::is_blank;
/// assert!(is_blank(None));
/// assert!(is_blank(Some(" \t\n")));
/// assert!(!is_blank(Some(" x ")));
/// ```
#[inline]
pub fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|t| t.chars().all(char::is_whitespace))
}

/// Returns `text` unless it is blank, in which case `default` is returned.
#[inline]
pub fn default_if_blank<'a>(text: Option<&'a str>, default: &'a str) -> &'a str {
    match text {
        Some(t) if !is_blank(Some(t)) => t,
        _ => default,
    }
}

/// Returns `true` if `text` is non-empty and consists of decimal digits only.
///
/// A digit is any character of General Category `Nd` (Decimal_Number), in
/// any script. Signs, decimal points, fractions and Roman numerals are not
/// digits.
///
/// # Examples
///
/// ```rust
/// # use capstan_text::predicates::is_numeric;
/// assert!(is_numeric("0123"));
/// assert!(is_numeric("١٢٣")); // Arabic-Indic digits
/// assert!(!is_numeric("-1"));
/// assert!(!is_numeric(""));
/// ```
#[inline]
pub fn is_numeric(text: &str) -> bool {
    non_empty_and_all(text, is_decimal_digit)
}

/// Returns `true` if `text` is non-empty and alphabetic only.
#[inline]
pub fn is_alpha(text: &str) -> bool {
    non_empty_and_all(text, char::is_alphabetic)
}

/// Returns `true` if `text` is non-empty and alphabetic or decimal digits only.
#[inline]
pub fn is_alphanumeric(text: &str) -> bool {
    non_empty_and_all(text, |c| c.is_alphabetic() || is_decimal_digit(c))
}

/// Returns `true` if every character of `text` is whitespace. An empty
/// string qualifies.
#[inline]
pub fn is_whitespace(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Returns `true` if `text` is non-empty and every character is lower case.
#[inline]
pub fn is_all_lower_case(text: &str) -> bool {
    non_empty_and_all(text, char::is_lowercase)
}

/// Returns `true` if `text` is non-empty and every character is upper case.
#[inline]
pub fn is_all_upper_case(text: &str) -> bool {
    non_empty_and_all(text, char::is_uppercase)
}

/// Returns `true` if `text` contains at least one of `search`.
#[inline]
pub fn contains_any(text: &str, search: &[char]) -> bool {
    text.contains(search)
}

/// Returns `true` if `text` contains none of `invalid`.
#[inline]
pub fn contains_none(text: &str, invalid: &[char]) -> bool {
    !contains_any(text, invalid)
}

#[inline(always)]
fn non_empty_and_all<F>(text: &str, predicate: F) -> bool
where
    F: FnMut(char) -> bool,
{
    !text.is_empty() && text.chars().all(predicate)
}

#[inline(always)]
fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    CodePointMapData::<GeneralCategory>::new().get(c) == GeneralCategory::DecimalNumber
}
