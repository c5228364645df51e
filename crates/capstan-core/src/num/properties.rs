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

//! Number-theoretic properties of primitive integers.
//!
//! Results that cannot be represented in the input type (`gcd(i32::MIN, 0)`,
//! large factorials) are reported as [`NumError::Overflow`] instead of
//! wrapping.

use crate::error::NumError;
use num_traits::{CheckedRem, PrimInt};

/// Returns `true` if `n` is a prime number.
///
/// Values below two (including every negative value) are not prime. Trial
/// division checks 2 and 3, then candidates of the form `6k ± 1` up to the
/// square root of `n`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::properties::is_prime;
/// assert!(is_prime(2u8));
/// assert!(is_prime(7919i32));
/// assert!(!is_prime(1u64));
/// assert!(!is_prime(-7i64));
/// assert!(!is_prime(91u16)); // 7 * 13
/// ```
pub fn is_prime<T>(n: T) -> bool
where
    T: PrimInt,
{
    let two = T::one() + T::one();
    let three = two + T::one();
    if n < two {
        return false;
    }
    if n <= three {
        return true;
    }
    if n % two == T::zero() || n % three == T::zero() {
        return false;
    }

    let six = three + three;
    let mut candidate = six - T::one();
    // `candidate <= n / candidate` avoids computing `candidate * candidate`.
    while candidate <= n / candidate {
        if n % candidate == T::zero() || n % (candidate + two) == T::zero() {
            return false;
        }
        candidate = candidate + six;
    }
    true
}

/// Returns the non-negative greatest common divisor of `a` and `b`.
///
/// `gcd(0, 0)` is `0`.
///
/// # Errors
///
/// Returns [`NumError::Overflow`] if the result is not representable, which
/// only happens for signed types when both arguments are multiples of
/// `T::min_value()` (for example `gcd(i32::MIN, 0)`).
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::properties::gcd;
/// assert_eq!(gcd(12, 18), Ok(6));
/// assert_eq!(gcd(-12i32, 18), Ok(6));
/// assert_eq!(gcd(0u8, 0), Ok(0));
/// assert!(gcd(i32::MIN, 0).is_err());
/// ```
pub fn gcd<T>(a: T, b: T) -> Result<T, NumError>
where
    T: PrimInt + CheckedRem,
{
    let (mut a, mut b) = (a, b);
    while b != T::zero() {
        // The only overflowing remainder is `MIN % -1`, whose true value is 0.
        let r = a.checked_rem(&b).unwrap_or_else(T::zero);
        a = b;
        b = r;
    }
    checked_abs(a).ok_or(NumError::Overflow { operation: "gcd" })
}

/// Returns the non-negative least common multiple of `a` and `b`.
///
/// If either argument is `0` the result is `0`.
///
/// # Errors
///
/// Returns [`NumError::Overflow`] if the result does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::properties::lcm;
/// assert_eq!(lcm(4, 6), Ok(12));
/// assert_eq!(lcm(-4i64, 6), Ok(12));
/// assert_eq!(lcm(0, 6), Ok(0));
/// assert!(lcm(200u8, 3).is_err());
/// ```
pub fn lcm<T>(a: T, b: T) -> Result<T, NumError>
where
    T: PrimInt + CheckedRem,
{
    if a == T::zero() || b == T::zero() {
        return Ok(T::zero());
    }
    let overflow = NumError::Overflow { operation: "lcm" };
    let divisor = gcd(a, b).map_err(|_| overflow)?;
    let product = (a / divisor).checked_mul(&b).ok_or(overflow)?;
    checked_abs(product).ok_or(overflow)
}

/// Returns `n!` in the integer type `T`.
///
/// # Errors
///
/// Returns [`NumError::Overflow`] as soon as an intermediate product does not
/// fit in `T`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::properties::factorial;
/// assert_eq!(factorial::<u64>(0), Ok(1));
/// assert_eq!(factorial::<u64>(20), Ok(2_432_902_008_176_640_000));
/// assert!(factorial::<u64>(21).is_err());
/// assert_eq!(factorial::<u8>(5), Ok(120));
/// ```
pub fn factorial<T>(n: u32) -> Result<T, NumError>
where
    T: PrimInt,
{
    let overflow = NumError::Overflow {
        operation: "factorial",
    };
    let mut acc = T::one();
    for k in 2..=n {
        let factor: T = num_traits::cast(k).ok_or(overflow)?;
        acc = acc.checked_mul(&factor).ok_or(overflow)?;
    }
    Ok(acc)
}

/// Returns the sum of the decimal digits of `|n|`.
///
/// Works for `T::min_value()` of signed types without overflowing.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::properties::digit_sum;
/// assert_eq!(digit_sum(1234u32), 10);
/// assert_eq!(digit_sum(-1234i32), 10);
/// assert_eq!(digit_sum(0u8), 0);
/// assert_eq!(digit_sum(i8::MIN), 11); // |-128| = 128
/// ```
pub fn digit_sum<T>(n: T) -> u32
where
    T: PrimInt,
{
    let Some(ten) = num_traits::cast::<u8, T>(10) else {
        // Types too narrow for 10 cannot hold more than one digit.
        return n.to_i64().map_or(0, |v| v.unsigned_abs() as u32);
    };

    let mut n = n;
    let mut sum = 0u32;
    while n != T::zero() {
        // Truncating division keeps the remainder in `-9..=9`.
        sum += (n % ten).to_i32().map_or(0, i32::unsigned_abs);
        n = n / ten;
    }
    sum
}

/// Returns the digital root of `|n|`: the digit sum applied until a single
/// digit remains.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::properties::digital_root;
/// assert_eq!(digital_root(9875u32), 2); // 9+8+7+5 = 29, 2+9 = 11, 1+1 = 2
/// assert_eq!(digital_root(0u32), 0);
/// ```
pub fn digital_root<T>(n: T) -> u32
where
    T: PrimInt,
{
    let mut root = digit_sum(n);
    while root >= 10 {
        root = digit_sum(root);
    }
    root
}

#[inline(always)]
fn checked_abs<T>(value: T) -> Option<T>
where
    T: PrimInt,
{
    if value < T::zero() {
        T::zero().checked_sub(&value)
    } else {
        Some(value)
    }
}
