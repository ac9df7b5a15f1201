use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::*;
use crate::error::{BigNumError, Result};
use super::BigUint;

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigUint {
            #[inline]
            fn from(val: $t) -> Self {
                BigUint::from_word(val as Word)
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<u128> for BigUint {
    #[inline]
    fn from(val: u128) -> Self {
        BigUint::from_double(val)
    }
}

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for BigUint {
            type Error = BigNumError;

            fn try_from(val: $t) -> Result<Self> {
                if val < 0 {
                    Err(BigNumError::Negative)
                } else {
                    Ok(BigUint::from_double(val as DoubleWord))
                }
            }
        }
    )*};
}

impl_try_from_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_try_into_primitive {
    ($($t:ty),*) => {$(
        impl TryFrom<&BigUint> for $t {
            type Error = BigNumError;

            fn try_from(val: &BigUint) -> Result<Self> {
                val.to_double()
                    .and_then(|v| <$t>::try_from(v).ok())
                    .ok_or(BigNumError::TooLarge)
            }
        }

        impl TryFrom<BigUint> for $t {
            type Error = BigNumError;

            #[inline]
            fn try_from(val: BigUint) -> Result<Self> {
                <$t>::try_from(&val)
            }
        }
    )*};
}

impl_try_into_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// 截断与饱和转换
impl BigUint {
    /// The word-sized two's complement bits of `val`, so `-1` becomes `Word::MAX`.
    pub fn from_truncating_i64(val: i64) -> BigUint {
        BigUint::from_word(val as Word)
    }

    /// The two's complement bits of `val` as two words, so `-1` becomes `2^128 - 1`.
    pub fn from_truncating_i128(val: i128) -> BigUint {
        BigUint::from_double(val as DoubleWord)
    }

    /// Negative values clamp to zero.
    pub fn from_clamping_i128(val: i128) -> BigUint {
        if val < 0 {
            BigUint::zero()
        } else {
            BigUint::from_double(val as DoubleWord)
        }
    }

    pub fn to_u64_wrapping(&self) -> u64 {
        self.word(0)
    }

    pub fn to_u64_saturating(&self) -> u64 {
        if self.count() > 1 { u64::MAX } else { self.word(0) }
    }

    pub fn to_u128_wrapping(&self) -> u128 {
        ((self.word(1) as DoubleWord) << WORD_BITS) | self.word(0) as DoubleWord
    }

    pub fn to_u128_saturating(&self) -> u128 {
        self.to_double().unwrap_or(u128::MAX)
    }

    pub fn to_i64_saturating(&self) -> i64 {
        i64::try_from(self).unwrap_or(i64::MAX)
    }
}

const F64_MANTISSA_BITS: u32 = 52;
const F64_EXPONENT_BIAS: i64 = 1075;

/// `2^exp` for exponents in the normal range of `f64`.
fn f64_power_of_two(exp: usize) -> f64 {
    f64::from_bits(((1023 + exp) as u64) << F64_MANTISSA_BITS)
}

fn f32_power_of_two(exp: usize) -> f32 {
    f32::from_bits(((127 + exp) as u32) << 23)
}

// 实现浮点数转换
impl BigUint {
    /// Truncates toward zero. `None` for NaN, infinities and values at or below `-1`.
    pub fn from_f64(val: f64) -> Option<BigUint> {
        if !val.is_finite() || val <= -1.0 {
            return None;
        }
        let val = val.trunc();
        if val <= 0.0 {
            return Some(BigUint::zero());
        }
        // val >= 1 so it is normal
        let bits = val.to_bits();
        let exponent = ((bits >> F64_MANTISSA_BITS) & 0x7ff) as i64;
        let mantissa = (bits & ((1 << F64_MANTISSA_BITS) - 1)) | (1 << F64_MANTISSA_BITS);
        let shift = exponent - F64_EXPONENT_BIAS;
        if shift < 0 {
            Some(BigUint::from_word(mantissa >> -shift))
        } else {
            Some(BigUint::from_word(mantissa).shifted_left(shift as usize))
        }
    }

    /// Only finite, integral, non-negative values convert.
    pub fn from_f64_exact(val: f64) -> Option<BigUint> {
        if val.is_finite() && val >= 0.0 && val.fract() == 0.0 {
            BigUint::from_f64(val)
        } else {
            None
        }
    }

    /// Top word of the value with every discarded bit folded into bit 0, and the
    /// number of bits dropped to get there.
    fn top_word_with_sticky(&self) -> (Word, usize) {
        let width = self.bit_width();
        if width <= WORD_BITS {
            return (self.word(0), 0);
        }
        let dropped = width - WORD_BITS;
        let top = self.shifted_right(dropped).word(0);
        let sticky = (self.trailing_zeros() < dropped) as Word;
        (top | sticky, dropped)
    }

    /// Nearest `f64`, ties to even. Values beyond `f64::MAX` give infinity.
    pub fn to_f64(&self) -> f64 {
        if self.bit_width() > 1024 {
            return f64::INFINITY;
        }
        let (top, dropped) = self.top_word_with_sticky();
        top as f64 * f64_power_of_two(dropped)
    }

    /// Nearest `f32`, ties to even. Values beyond `f32::MAX` give infinity.
    pub fn to_f32(&self) -> f32 {
        if self.bit_width() > 128 {
            return f32::INFINITY;
        }
        let (top, dropped) = self.top_word_with_sticky();
        top as f32 * f32_power_of_two(dropped)
    }
}

// 十进制与步进辅助函数
impl BigUint {
    pub fn pow10(exponent: usize) -> BigUint {
        BigUint::from_word(10).pow(exponent)
    }

    /// Parses `"123.456"` style text and returns `floor(value * 10^precision)`.
    ///
    /// Fraction digits beyond `precision` are dropped. Either side of the `.` may be
    /// empty (`".5"`, `"5."`) but not both. Anything other than ASCII digits around a
    /// single optional `.` gives `None`.
    pub fn from_decimal_with_precision(text: &str, precision: usize) -> Option<BigUint> {
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (text, ""),
        };
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction) {
            return None;
        }
        let kept = &fraction[..fraction.len().min(precision)];
        let mut digits = String::with_capacity(integer.len() + precision + 1);
        digits.push('0');
        digits.push_str(integer);
        digits.push_str(kept);
        digits.extend(std::iter::repeat('0').take(precision - kept.len()));
        BigUint::from_str_radix(&digits, 10).ok()
    }

    /// `self + n`.
    ///
    /// # Panics
    /// If the result would be negative.
    pub fn advanced_by(&self, n: &BigInt) -> BigUint {
        match n.sign() {
            Sign::Plus => self.adding(n.magnitude()),
            Sign::Minus => self.subtracting(n.magnitude()),
        }
    }

    /// `other - self`.
    pub fn distance_to(&self, other: &BigUint) -> BigInt {
        BigInt::from(other.clone()) - BigInt::from(self.clone())
    }
}

#[test]
fn test_from_primitives() {
    assert_eq!(BigUint::from(0u8), BigUint::zero());
    assert_eq!(BigUint::from(u64::MAX).words(), &[u64::MAX]);
    assert_eq!(BigUint::from(u128::MAX).words(), &[u64::MAX, u64::MAX]);
    assert_eq!(BigUint::try_from(42i32), Ok(BigUint::from_word(42)));
    assert_eq!(BigUint::try_from(i128::MAX), Ok(BigUint::from_double(i128::MAX as u128)));
    assert_eq!(BigUint::try_from(-1i8), Err(BigNumError::Negative));
    assert_eq!(BigUint::try_from(i64::MIN), Err(BigNumError::Negative));
}

#[test]
fn test_into_primitives() {
    let huge = BigUint::one() << 200u32;
    assert_eq!(u64::try_from(&huge), Err(BigNumError::TooLarge));
    assert_eq!(i128::try_from(&huge), Err(BigNumError::TooLarge));
    assert_eq!(u8::try_from(&BigUint::from_word(255)), Ok(255u8));
    assert_eq!(u8::try_from(&BigUint::from_word(256)), Err(BigNumError::TooLarge));
    assert_eq!(i8::try_from(&BigUint::from_word(128)), Err(BigNumError::TooLarge));
    assert_eq!(i64::try_from(BigUint::from_word(1 << 62)), Ok(1i64 << 62));
    assert_eq!(u128::try_from(&BigUint::from(u128::MAX)), Ok(u128::MAX));
    assert_eq!(usize::try_from(&BigUint::zero()), Ok(0usize));
}

#[test]
fn test_truncating_and_saturating() {
    assert_eq!(BigUint::from_truncating_i64(-1i8 as i64), BigUint::from_word(Word::MAX));
    assert_eq!(BigUint::from_truncating_i128(-1), BigUint::from(u128::MAX));
    assert_eq!(BigUint::from_truncating_i128(5), BigUint::from_word(5));
    assert_eq!(BigUint::from_clamping_i128(-5), BigUint::zero());
    assert_eq!(BigUint::from_clamping_i128(5), BigUint::from_word(5));

    let x = BigUint::from_words(&[1, 2, 3]);
    assert_eq!(x.to_u64_wrapping(), 1);
    assert_eq!(x.to_u64_saturating(), u64::MAX);
    assert_eq!(x.to_u128_wrapping(), (2u128 << 64) | 1);
    assert_eq!(x.to_u128_saturating(), u128::MAX);
    assert_eq!(x.to_i64_saturating(), i64::MAX);
    assert_eq!(BigUint::from_word(7).to_i64_saturating(), 7);
    assert_eq!(BigUint::from_word(7).to_u128_saturating(), 7);
}

#[test]
fn test_from_f64() {
    assert_eq!(BigUint::from_f64(0.0), Some(BigUint::zero()));
    assert_eq!(BigUint::from_f64(-0.5), Some(BigUint::zero()));
    assert_eq!(BigUint::from_f64(-1.0), None);
    assert_eq!(BigUint::from_f64(f64::NAN), None);
    assert_eq!(BigUint::from_f64(f64::INFINITY), None);
    assert_eq!(BigUint::from_f64(42.9), Some(BigUint::from_word(42)));
    assert_eq!(BigUint::from_f64(2f64.powi(64)), Some(BigUint::one() << 64u32));
    assert_eq!(BigUint::from_f64(2f64.powi(100) * 3.0), Some(BigUint::from_word(3) << 100u32));
    assert_eq!(BigUint::from_f64(f64::MAX).map(|x| x.bit_width()), Some(1024));

    assert_eq!(BigUint::from_f64_exact(1e3), Some(BigUint::from_word(1000)));
    assert_eq!(BigUint::from_f64_exact(0.5), None);
    assert_eq!(BigUint::from_f64_exact(-1.0), None);
}

#[test]
fn test_to_float() {
    assert_eq!(BigUint::zero().to_f64(), 0.0);
    assert_eq!(BigUint::from_word(12345).to_f64(), 12345.0);
    assert_eq!((BigUint::one() << 100u32).to_f64(), 2f64.powi(100));
    assert_eq!((BigUint::one() << 1023u32).to_f64(), 2f64.powi(1023));
    assert_eq!((BigUint::one() << 1024u32).to_f64(), f64::INFINITY);
    assert_eq!(BigUint::from_f64(f64::MAX).map(|x| x.to_f64()), Some(f64::MAX));

    // 2^64 + 2^11 is a tie between 2^64 and 2^64 + 2^12; ties go to the even mantissa
    let tie = (BigUint::one() << 64u32) + (1u64 << 11);
    assert_eq!(tie.to_f64(), 2f64.powi(64));
    // any lower set bit breaks the tie upward
    let above = &tie + 1u64;
    assert_eq!(above.to_f64(), 2f64.powi(64) + 2f64.powi(12));
    let far_above = (&tie << 100u32) + 1u64;
    assert_eq!(far_above.to_f64(), (2f64.powi(64) + 2f64.powi(12)) * 2f64.powi(100));

    assert_eq!((BigUint::one() << 127u32).to_f32(), 2f32.powi(127));
    assert_eq!((BigUint::one() << 128u32).to_f32(), f32::INFINITY);
    assert_eq!(BigUint::from_word(16_777_217).to_f32(), 16_777_216.0);
}

#[test]
fn test_decimal_with_precision() {
    let text = "123456789.123456789";
    assert_eq!(
        BigUint::from_decimal_with_precision(text, 18),
        Some("123456789123456789000000000".into())
    );
    assert_eq!(BigUint::from_decimal_with_precision(text, 0), Some(BigUint::from_word(123456789)));
    assert_eq!(BigUint::from_decimal_with_precision(text, 1), Some(BigUint::from_word(1234567891)));
    assert_eq!(BigUint::from_decimal_with_precision("42", 2), Some(BigUint::from_word(4200)));
    assert_eq!(BigUint::from_decimal_with_precision("fff.vv", 2), None);
    assert_eq!(BigUint::from_decimal_with_precision("1.2.3", 2), None);
    assert_eq!(BigUint::from_decimal_with_precision(".5", 0), Some(BigUint::zero()));
    assert_eq!(BigUint::from_decimal_with_precision(".5", 1), Some(BigUint::from_word(5)));
    assert_eq!(BigUint::from_decimal_with_precision(".125", 2), Some(BigUint::from_word(12)));
    assert_eq!(BigUint::from_decimal_with_precision("7.", 1), Some(BigUint::from_word(70)));
    assert_eq!(BigUint::from_decimal_with_precision(".", 2), None);
    assert_eq!(BigUint::from_decimal_with_precision("", 2), None);
    assert_eq!(BigUint::pow10(0), BigUint::one());
    assert_eq!(BigUint::pow10(20), "100000000000000000000".into());
}

#[test]
fn test_stride() {
    let a = BigUint::from_word(10);
    let b = BigUint::from_word(3);
    assert_eq!(a.distance_to(&b), BigInt::from(-7i64));
    assert_eq!(b.distance_to(&a), BigInt::from(7i64));
    assert_eq!(a.advanced_by(&BigInt::from(-7i64)), b);
    assert_eq!(b.advanced_by(&BigInt::from(7i64)), a);
}

#[test]
#[should_panic(expected = "attempt to subtract with overflow")]
fn test_advanced_below_zero() {
    let _ = BigUint::from_word(3).advanced_by(&BigInt::from(-4i64));
}
