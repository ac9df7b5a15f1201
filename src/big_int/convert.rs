use std::fmt;
use std::str::FromStr;

use crate::error::{BigNumError, ParseBigNumError, Result};
use crate::BigUint;
use super::{BigInt, Sign};

// 实现打印
impl BigInt {
    pub fn to_string_radix(&self, radix: u32) -> String {
        self.with_sign(self.magnitude.to_string_radix(radix))
    }

    pub fn to_string_radix_upper(&self, radix: u32) -> String {
        self.with_sign(self.magnitude.to_string_radix_upper(radix))
    }

    fn with_sign(&self, digits: String) -> String {
        if self.is_negative() {
            format!("-{}", digits)
        } else {
            digits
        }
    }
}

macro_rules! impl_fmt {
    ($($trait: ident => ($prefix: expr, $radix: expr, $upper: expr)),*) => {
        $(
            impl fmt::$trait for BigInt {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let digits = if $upper {
                        self.magnitude.to_string_radix_upper($radix)
                    } else {
                        self.magnitude.to_string_radix($radix)
                    };
                    f.pad_integral(!self.is_negative(), $prefix, &digits)
                }
            }
        )*
    };
}

impl_fmt!(
    Display => ("", 10, false),
    LowerHex => ("0x", 16, false),
    UpperHex => ("0x", 16, true),
    Octal => ("0o", 8, false),
    Binary => ("0b", 2, false)
);

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// 实现解析
impl BigInt {
    /// Digits in `radix` with an optional leading `-` or `+`.
    ///
    /// # Panics
    /// If `radix` is not in `2..=36`.
    pub fn from_str_radix(text: &str, radix: u32) -> std::result::Result<BigInt, ParseBigNumError> {
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, text.strip_prefix('+').unwrap_or(text)),
        };
        if let Some(c) = digits.chars().next().filter(|c| *c == '+' || *c == '-') {
            return Err(ParseBigNumError::InvalidDigit { digit: c, radix });
        }
        Ok(BigInt::new(sign, BigUint::from_str_radix(digits, radix)?))
    }
}

impl FromStr for BigInt {
    type Err = ParseBigNumError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BigInt::from_str_radix(s, 10)
    }
}

/// # Panics
/// If `val` is not a decimal number.
impl From<&str> for BigInt {
    fn from(val: &str) -> Self {
        match BigInt::from_str_radix(val, 10) {
            Ok(value) => value,
            Err(err) => panic!("invalid number literal {:?}: {}", val, err),
        }
    }
}

// 实现字节序列转换
impl BigInt {
    /// A sign byte (`0` plus, `1` minus) followed by the big-endian magnitude. Zero is empty.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.is_zero() {
            return Vec::new();
        }
        let mut bytes = Vec::with_capacity(self.magnitude.count() * 8 + 1);
        bytes.push(self.is_negative() as u8);
        bytes.extend(self.magnitude.to_bytes_be());
        bytes
    }

    /// Reads the layout written by [`BigInt::to_bytes_be`]. A first byte of `1` marks a
    /// negative value, anything else a positive one.
    pub fn from_bytes_be(bytes: &[u8]) -> BigInt {
        match bytes.split_first() {
            None => BigInt::zero(),
            Some((&flag, magnitude)) => {
                let sign = if flag == 1 { Sign::Minus } else { Sign::Plus };
                BigInt::new(sign, BigUint::from_bytes_be(magnitude))
            }
        }
    }
}

// 整数转换
macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(val: $t) -> Self {
                BigInt::from(BigUint::from(val))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(val: $t) -> Self {
                let magnitude = BigUint::from(val.unsigned_abs());
                let sign = if val < 0 { Sign::Minus } else { Sign::Plus };
                BigInt::new(sign, magnitude)
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl BigInt {
    /// The value as an `i128`: `TooLarge` above `i128::MAX`, `TooSmall` below `i128::MIN`.
    fn to_i128(&self) -> Result<i128> {
        let magnitude = self.magnitude.to_double();
        match self.sign {
            Sign::Plus => magnitude
                .and_then(|m| i128::try_from(m).ok())
                .ok_or(BigNumError::TooLarge),
            Sign::Minus => magnitude
                .filter(|&m| m <= i128::MIN.unsigned_abs())
                .map(|m| (m as i128).wrapping_neg())
                .ok_or(BigNumError::TooSmall),
        }
    }
}

macro_rules! impl_try_into_primitive {
    ($($t:ty),*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = BigNumError;

            fn try_from(val: &BigInt) -> Result<Self> {
                if val.is_negative() {
                    let small = val.to_i128()?;
                    return <$t>::try_from(small).map_err(|_| BigNumError::TooSmall);
                }
                <$t>::try_from(&val.magnitude)
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = BigNumError;

            #[inline]
            fn try_from(val: BigInt) -> Result<Self> {
                <$t>::try_from(&val)
            }
        }
    )*};
}

impl_try_into_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl TryFrom<BigInt> for BigUint {
    type Error = BigNumError;

    fn try_from(val: BigInt) -> Result<Self> {
        if val.is_negative() {
            return Err(BigNumError::Negative);
        }
        Ok(val.magnitude)
    }
}

impl TryFrom<&BigInt> for BigUint {
    type Error = BigNumError;

    fn try_from(val: &BigInt) -> Result<Self> {
        BigUint::try_from(val.clone())
    }
}

// 实现浮点数转换
impl BigInt {
    /// Truncates toward zero. `None` for NaN and infinities.
    pub fn from_f64(val: f64) -> Option<BigInt> {
        let magnitude = BigUint::from_f64(val.abs())?;
        let sign = if val < 0.0 { Sign::Minus } else { Sign::Plus };
        Some(BigInt::new(sign, magnitude))
    }

    /// Only finite integral values convert.
    pub fn from_f64_exact(val: f64) -> Option<BigInt> {
        if val.fract() == 0.0 {
            BigInt::from_f64(val)
        } else {
            None
        }
    }

    /// Nearest `f64`, ties to even, overflowing to an infinity of the right sign.
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.magnitude.to_f64();
        if self.is_negative() { -magnitude } else { magnitude }
    }

    pub fn to_f32(&self) -> f32 {
        let magnitude = self.magnitude.to_f32();
        if self.is_negative() { -magnitude } else { magnitude }
    }
}

#[test]
fn test_strings() {
    let b = BigInt::from(-256i64);
    assert_eq!(b.to_string(), "-256");
    assert_eq!(b.to_string_radix_upper(16), "-100");
    assert_eq!(format!("{:?}", b), "-256");
    assert_eq!(format!("{:#x}", b), "-0x100");
    assert_eq!(format!("{:>6}", b), "  -256");
    assert_eq!(format!("{:+}", BigInt::from(5u8)), "+5");
    assert_eq!(BigInt::zero().to_string(), "0");
    assert_eq!(BigInt::from(-44444444i64).to_string(), "-44444444");

    assert_eq!("+300".parse::<BigInt>(), Ok(BigInt::from(300i64)));
    assert_eq!("-300".parse::<BigInt>(), Ok(BigInt::from(-300i64)));
    assert_eq!("-0".parse::<BigInt>(), Ok(BigInt::zero()));
    assert_eq!(BigInt::from_str_radix("-ff", 16), Ok(BigInt::from(-255i64)));
    assert!("Not a number".parse::<BigInt>().is_err());
    assert_eq!("-".parse::<BigInt>(), Err(ParseBigNumError::Empty));
    assert!("--1".parse::<BigInt>().is_err());
    assert!("-+1".parse::<BigInt>().is_err());
    assert_eq!(BigInt::from("-100"), BigInt::from(-100i64));
}

#[test]
fn test_bytes() {
    let cases: [(BigInt, Vec<u8>); 6] = [
        (BigInt::zero(), vec![]),
        (BigInt::from(1i64), vec![0, 1]),
        (BigInt::from(2i64), vec![0, 2]),
        (BigInt::from(-1i64), vec![1, 1]),
        (BigInt::from(-0x0102030405060708i64), vec![1, 1, 2, 3, 4, 5, 6, 7, 8]),
        (-((BigInt::one() << 64u32) + BigInt::from(0x0203040506070809u64)), vec![1, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
    ];
    for (value, bytes) in cases {
        assert_eq!(value.to_bytes_be(), bytes);
        assert_eq!(BigInt::from_bytes_be(&bytes), value);
    }
}

#[test]
fn test_integers() {
    assert_eq!(BigInt::from(i64::MIN).magnitude(), &BigUint::from_word(1 << 63));
    assert_eq!(BigInt::from(i128::MIN).magnitude(), &(BigUint::one() << 127u32));
    assert_eq!(BigInt::from(u64::MAX).magnitude(), &BigUint::from_word(u64::MAX));

    assert_eq!(i64::try_from(&BigInt::from(-123456789i64)), Ok(-123456789));
    assert_eq!(i64::try_from(&BigInt::from(i64::MIN)), Ok(i64::MIN));
    assert_eq!(i128::try_from(&BigInt::from(i128::MIN)), Ok(i128::MIN));
    assert_eq!(i8::try_from(&BigInt::from(-129i64)), Err(BigNumError::TooSmall));
    assert_eq!(u8::try_from(&BigInt::from(-1i64)), Err(BigNumError::TooSmall));
    assert_eq!(u8::try_from(BigInt::from(256i64)), Err(BigNumError::TooLarge));

    let huge: BigInt = "99999999999999999999999999999999999999999999999999999999".into();
    assert_eq!(i64::try_from(&huge), Err(BigNumError::TooLarge));
    assert_eq!(i64::try_from(&-huge), Err(BigNumError::TooSmall));

    assert_eq!(BigUint::try_from(BigInt::from(123456789i64)), Ok(BigUint::from_word(123456789)));
    assert_eq!(BigUint::try_from(BigInt::from(-10i64)), Err(BigNumError::Negative));
}

#[test]
fn test_floats() {
    assert_eq!(BigInt::from_f64(42.0), Some(BigInt::from(42i64)));
    assert_eq!(BigInt::from_f64(-42.5), Some(BigInt::from(-42i64)));
    assert_eq!(BigInt::from_f64(-0.5), Some(BigInt::zero()));
    assert_eq!(BigInt::from_f64_exact(-42.0), Some(BigInt::from(-42i64)));
    assert_eq!(BigInt::from_f64_exact(-42.5), None);
    assert_eq!(BigInt::from_f64_exact(f64::MIN_POSITIVE), None);
    assert_eq!(BigInt::from_f64_exact(f64::INFINITY), None);
    assert_eq!(BigInt::from_f64_exact(f64::NAN), None);

    for i in -100..100i64 {
        assert_eq!(BigInt::from(i).to_f64(), i as f64);
        assert_eq!(BigInt::from(i).to_f32(), i as f32);
    }
    assert_eq!((BigInt::from(0x5A5A5Ai64) << 64u32).to_f64(), 0x5A5A5A as f64 * 2f64.powi(64));
    assert_eq!((BigInt::from(10i64) << 1020u32).to_f64(), 10.0 * 2f64.powi(1020));
    assert_eq!((BigInt::from(-1i64) << 1024u32).to_f64(), f64::NEG_INFINITY);
    let max = BigInt::from_twos_complement_words(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFFFF_FFFF_FFFF_F800, 0]);
    assert_eq!(max.to_f64(), f64::MAX);
    let max = BigInt::from_twos_complement_words(&[0, 0xFFFF_FF00_0000_0000, 0]);
    assert_eq!(max.to_f32(), f32::MAX);
}
