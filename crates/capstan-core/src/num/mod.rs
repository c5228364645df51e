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

//! # Integer Properties
//!
//! Number-theoretic helpers over every primitive integer type: primality,
//! greatest common divisor, least common multiple, factorial, digit sums.
//!
//! ## Submodules
//!
//! - `properties`: Generic free functions bounded on `num_traits::PrimInt`.
//!   Operations whose result may not fit the type (`gcd`, `lcm`,
//!   `factorial`) return `Result<T, NumError>` instead of wrapping.
//!
//! ## Method Syntax
//!
//! [`IntegerProperties`] exposes the same functions as by-value methods on
//! the primitive integer types:
//!
//! ```rust
//! use capstan_core::num::IntegerProperties;
//!
//! assert!(97u32.is_prime_val());
//! assert_eq!(12i64.gcd_val(-18), Ok(6));
//! assert_eq!(123u16.digit_sum_val(), 6);
//! ```

pub mod properties;

use crate::error::NumError;

/// By-value integer property methods, implemented for all primitive integers.
pub trait IntegerProperties: Sized {
    /// See [`properties::is_prime`].
    fn is_prime_val(self) -> bool;
    /// See [`properties::gcd`].
    fn gcd_val(self, other: Self) -> Result<Self, NumError>;
    /// See [`properties::lcm`].
    fn lcm_val(self, other: Self) -> Result<Self, NumError>;
    /// See [`properties::digit_sum`].
    fn digit_sum_val(self) -> u32;
    /// See [`properties::digital_root`].
    fn digital_root_val(self) -> u32;
}

macro_rules! impl_integer_properties_for {
    ($t:ty) => {
        impl IntegerProperties for $t {
            #[inline(always)]
            fn is_prime_val(self) -> bool {
                properties::is_prime(self)
            }

            #[inline(always)]
            fn gcd_val(self, other: $t) -> Result<$t, NumError> {
                properties::gcd(self, other)
            }

            #[inline(always)]
            fn lcm_val(self, other: $t) -> Result<$t, NumError> {
                properties::lcm(self, other)
            }

            #[inline(always)]
            fn digit_sum_val(self) -> u32 {
                properties::digit_sum(self)
            }

            #[inline(always)]
            fn digital_root_val(self) -> u32 {
                properties::digital_root(self)
            }
        }
    };
}

impl_integer_properties_for!(u8);
impl_integer_properties_for!(u16);
impl_integer_properties_for!(u32);
impl_integer_properties_for!(u64);
impl_integer_properties_for!(usize);
impl_integer_properties_for!(u128);

impl_integer_properties_for!(i8);
impl_integer_properties_for!(i16);
impl_integer_properties_for!(i32);
impl_integer_properties_for!(i64);
impl_integer_properties_for!(isize);
impl_integer_properties_for!(i128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_forward_to_free_functions() {
        assert!(2u8.is_prime_val());
        assert!(!(-2i128).is_prime_val());
        assert_eq!(10usize.gcd_val(4), Ok(2));
        assert_eq!(10isize.lcm_val(4), Ok(20));
        assert_eq!(99i16.digit_sum_val(), 18);
        assert_eq!(99i16.digital_root_val(), 9);
    }

    #[test]
    fn test_method_overflow_is_reported() {
        assert_eq!(
            i8::MIN.gcd_val(0),
            Err(NumError::Overflow { operation: "gcd" })
        );
        assert_eq!(
            u16::MAX.lcm_val(2),
            Err(NumError::Overflow { operation: "lcm" })
        );
    }
}
