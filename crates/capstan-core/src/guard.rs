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

//! # Boolean and Absent-Value Guards
//!
//! Helpers for reducing slices of booleans, treating `Option<bool>` as a
//! three-valued flag, and picking the first present value out of several
//! candidates.
//!
//! ```rust
//! use capstan_core::guard::{first_some, is_not_false, xor};
//!
//! assert_eq!(first_some([None, Some(3), Some(4)]), Some(3));
//! assert!(is_not_false(None));
//! assert_eq!(xor(&[true, true, true]), Ok(true));
//! ```

use crate::error::GuardError;
use num_traits::PrimInt;

/// Returns the first present value, or `None` if every candidate is absent.
#[inline]
pub fn first_some<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().next()
}

/// Returns `true` if every value is present. Vacuously `true` for no values.
#[inline]
pub fn all_some<T>(values: &[Option<T>]) -> bool {
    values.iter().all(Option::is_some)
}

/// Returns `true` if at least one value is present.
#[inline]
pub fn any_some<T>(values: &[Option<T>]) -> bool {
    values.iter().any(Option::is_some)
}

/// Returns `true` if every value is absent. Vacuously `true` for no values.
#[inline]
pub fn all_none<T>(values: &[Option<T>]) -> bool {
    !any_some(values)
}

/// Logical conjunction of all values.
///
/// # Errors
///
/// Returns [`GuardError::Empty`] for an empty slice.
pub fn and(values: &[bool]) -> Result<bool, GuardError> {
    non_empty(values).map(|v| v.iter().all(|&b| b))
}

/// Logical disjunction of all values.
///
/// # Errors
///
/// Returns [`GuardError::Empty`] for an empty slice.
pub fn or(values: &[bool]) -> Result<bool, GuardError> {
    non_empty(values).map(|v| v.iter().any(|&b| b))
}

/// Exclusive or over all values: `true` if an odd number of them are `true`.
///
/// # Errors
///
/// Returns [`GuardError::Empty`] for an empty slice.
pub fn xor(values: &[bool]) -> Result<bool, GuardError> {
    non_empty(values).map(|v| v.iter().fold(false, |acc, &b| acc ^ b))
}

/// Returns `true` if exactly one value is `true`.
///
/// # Errors
///
/// Returns [`GuardError::Empty`] for an empty slice.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::guard::one_hot;
/// assert_eq!(one_hot(&[false, true, false]), Ok(true));
/// assert_eq!(one_hot(&[true, true, true]), Ok(false));
/// ```
pub fn one_hot(values: &[bool]) -> Result<bool, GuardError> {
    non_empty(values).map(|v| v.iter().filter(|&&b| b).count() == 1)
}

/// Returns `true` only for `Some(true)`.
#[inline]
pub fn is_true(value: Option<bool>) -> bool {
    value == Some(true)
}

/// Returns `true` for anything except `Some(false)`.
#[inline]
pub fn is_not_false(value: Option<bool>) -> bool {
    value != Some(false)
}

/// Negates a present flag; an absent flag stays absent.
#[inline]
pub fn negate(value: Option<bool>) -> Option<bool> {
    value.map(|b| !b)
}

/// Interprets an integer as a flag: zero is `false`, anything else `true`.
#[inline]
pub fn to_bool_from_int<T>(value: T) -> bool
where
    T: PrimInt,
{
    value != T::zero()
}

/// Parses common textual flags, ignoring ASCII case.
///
/// Recognizes `true`/`false`, `yes`/`no`, `on`/`off`, `y`/`n` and `t`/`f`.
/// Anything else yields `None`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::guard::parse_bool;
/// assert_eq!(parse_bool("Yes"), Some(true));
/// assert_eq!(parse_bool("OFF"), Some(false));
/// assert_eq!(parse_bool("maybe"), None);
/// ```
pub fn parse_bool(text: &str) -> Option<bool> {
    const TRUTHY: [&str; 5] = ["true", "yes", "on", "y", "t"];
    const FALSY: [&str; 5] = ["false", "no", "off", "n", "f"];

    if TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(text)) {
        Some(true)
    } else if FALSY.iter().any(|f| f.eq_ignore_ascii_case(text)) {
        Some(false)
    } else {
        None
    }
}

#[inline(always)]
fn non_empty(values: &[bool]) -> Result<&[bool], GuardError> {
    if values.is_empty() {
        Err(GuardError::Empty)
    } else {
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_some() {
        assert_eq!(first_some([None, None, Some('x')]), Some('x'));
        assert_eq!(first_some::<i32, _>([None, None]), None);
        assert_eq!(first_some(Vec::<Option<u8>>::new()), None);
    }

    #[test]
    fn test_presence_checks() {
        let mixed = [Some(1), None];
        assert!(!all_some(&mixed));
        assert!(any_some(&mixed));
        assert!(!all_none(&mixed));

        let empty: [Option<u8>; 0] = [];
        assert!(all_some(&empty));
        assert!(!any_some(&empty));
        assert!(all_none(&empty));
    }

    #[test]
    fn test_reductions() {
        assert_eq!(and(&[true, true]), Ok(true));
        assert_eq!(and(&[true, false]), Ok(false));
        assert_eq!(or(&[false, false]), Ok(false));
        assert_eq!(or(&[false, true]), Ok(true));
        assert_eq!(xor(&[true, false]), Ok(true));
        assert_eq!(xor(&[true, true]), Ok(false));
        assert_eq!(one_hot(&[false, false]), Ok(false));
    }

    #[test]
    fn test_reductions_reject_empty() {
        assert_eq!(and(&[]), Err(GuardError::Empty));
        assert_eq!(or(&[]), Err(GuardError::Empty));
        assert_eq!(xor(&[]), Err(GuardError::Empty));
        assert_eq!(one_hot(&[]), Err(GuardError::Empty));
    }

    #[test]
    fn test_three_valued_flags() {
        assert!(is_true(Some(true)));
        assert!(!is_true(None));
        assert!(is_not_false(None));
        assert!(!is_not_false(Some(false)));
        assert_eq!(negate(Some(true)), Some(false));
        assert_eq!(negate(None), None);
    }

    #[test]
    fn test_to_bool_from_int() {
        assert!(!to_bool_from_int(0u8));
        assert!(to_bool_from_int(-1i64));
        assert!(to_bool_from_int(u128::MAX));
    }

    #[test]
    fn test_parse_bool() {
        for t in ["true", "TRUE", "y", "T", "On", "yes"] {
            assert_eq!(parse_bool(t), Some(true), "{}", t);
        }
        for f in ["false", "N", "no", "oFF", "f"] {
            assert_eq!(parse_bool(f), Some(false), "{}", f);
        }
        for other in ["", " true", "1", "0", "tru"] {
            assert_eq!(parse_bool(other), None, "{:?}", other);
        }
    }
}
