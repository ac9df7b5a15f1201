//! # BigInt
//! Arbitrary-precision signed integers: a [`Sign`] and a [`BigUint`] magnitude.
//!
//! Bitwise operators behave as if the value were stored in two's complement with
//! infinitely many sign bits above its magnitude. Right shift works on the magnitude and
//! keeps the sign, so a negative value never shifts past `-1`.
//! # Example
//! ```
//! use big_number::BigInt;
//!
//! let a: BigInt = "-10000000000000000000000000".into();
//! let b: BigInt = "900000000000".into();
//! println!("a + b = {}", &a + &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a mod b = {}", a.modulus(&b).unwrap());
//! println!("a >> 10 = {}", &a >> 10u32);
//! ```

mod arithmetic;
mod bitwise;
mod algorithms;
mod convert;
#[cfg(feature = "serde")]
mod serialize;

use std::cmp::Ordering;
use std::ops::Neg;

use crate::big_num_constants::*;
use crate::BigUint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Minus,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

/// Zero is always stored with [`Sign::Plus`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    magnitude: BigUint,
}

// 实现构造
impl BigInt {
    pub const fn zero() -> Self {
        BigInt { sign: Sign::Plus, magnitude: BigUint::zero() }
    }

    pub const fn one() -> Self {
        BigInt { sign: Sign::Plus, magnitude: BigUint::one() }
    }

    /// A zero magnitude gives positive zero whatever `sign` says.
    pub fn new(sign: Sign, magnitude: BigUint) -> Self {
        let sign = if magnitude.is_zero() { Sign::Plus } else { sign };
        BigInt { sign, magnitude }
    }

    /// Reads `words` as a little-endian two's complement value: the top bit of the last
    /// word is the sign.
    pub fn from_twos_complement_words(words: &[Word]) -> Self {
        match words.last() {
            Some(&top) if top >> (WORD_BITS - 1) == 1 => {
                let inverted = words.iter().map(|w| !w).collect::<Vec<_>>();
                let mut magnitude = BigUint::from_vec(inverted);
                magnitude.increment();
                BigInt::new(Sign::Minus, magnitude)
            }
            _ => BigInt::from(BigUint::from_words(words)),
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl From<BigUint> for BigInt {
    fn from(magnitude: BigUint) -> Self {
        BigInt { sign: Sign::Plus, magnitude }
    }
}

impl From<&BigUint> for BigInt {
    fn from(magnitude: &BigUint) -> Self {
        BigInt::from(magnitude.clone())
    }
}

// 访问器
impl BigInt {
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    #[inline]
    pub fn into_magnitude(self) -> BigUint {
        self.magnitude
    }

    #[inline]
    pub fn into_parts(self) -> (Sign, BigUint) {
        (self.sign, self.magnitude)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus && !self.is_zero()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::zero()
        } else {
            BigInt::new(self.sign, BigUint::one())
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from(self.magnitude.clone())
    }

    /// Bits needed for the magnitude plus one sign bit; zero for zero.
    pub fn bit_width(&self) -> usize {
        if self.is_zero() {
            0
        } else {
            self.magnitude.bit_width() + 1
        }
    }

    /// Trailing zeros of the magnitude; the two's complement form has the same count.
    pub fn trailing_zeros(&self) -> usize {
        self.magnitude.trailing_zeros()
    }

    pub fn is_odd(&self) -> bool {
        self.magnitude.is_odd()
    }

    pub fn is_even(&self) -> bool {
        self.magnitude.is_even()
    }
}

// 二进制补码视图
impl BigInt {
    /// Word `index` of the two's complement form. Negative values read `Word::MAX`
    /// above their magnitude.
    pub fn twos_complement_word(&self, index: usize) -> Word {
        let word = self.magnitude.word(index);
        if self.sign == Sign::Plus {
            return word;
        }
        // -m == !(m - 1): words below the lowest set word stay zero, that word is negated
        // and everything above it is inverted
        let lowest = self.magnitude.trailing_zeros() / WORD_BITS;
        match index.cmp(&lowest) {
            Ordering::Less => 0,
            Ordering::Equal => word.wrapping_neg(),
            Ordering::Greater => !word,
        }
    }

    /// The shortest two's complement words whose top bit is the sign. Zero is empty.
    pub fn twos_complement_words(&self) -> Vec<Word> {
        let mut words = match self.sign {
            Sign::Plus => self.magnitude.words().to_vec(),
            Sign::Minus => {
                let below = self.magnitude.subtracting(&BigUint::one());
                (0..self.magnitude.count()).map(|i| !below.word(i)).collect()
            }
        };
        if let Some(&top) = words.last() {
            if (top >> (WORD_BITS - 1) == 1) != self.is_negative() {
                words.push(self.fill_word());
            }
        }
        words
    }

    /// The word repeated above the two's complement words.
    fn fill_word(&self) -> Word {
        match self.sign {
            Sign::Plus => 0,
            Sign::Minus => Word::MAX,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Plus) => self.magnitude.cmp(&other.magnitude),
            (Sign::Minus, Sign::Minus) => other.magnitude.cmp(&self.magnitude),
            (a, b) => a.cmp(&b),
        }
    }
}

#[test]
fn test_no_negative_zero() {
    let zero = BigInt::new(Sign::Minus, BigUint::zero());
    assert_eq!(zero.sign(), Sign::Plus);
    assert_eq!(zero, BigInt::zero());
    assert!(!zero.is_negative());
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!(BigInt::from(5i64) - BigInt::from(5i64), BigInt::zero());
    assert_eq!((BigInt::from(5i64) - BigInt::from(5i64)).sign(), Sign::Plus);
}

#[test]
fn test_ordering() {
    let values = [-100i64, -3, -1, 0, 1, 2, 1 << 40];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(BigInt::from(*a).cmp(&BigInt::from(*b)), i.cmp(&j));
        }
    }
    assert!(BigInt::from(-(1i128 << 100)) < BigInt::from(-1i64));
}

#[test]
fn test_accessors() {
    let x = BigInt::from(-12i64);
    assert_eq!(x.magnitude(), &BigUint::from_word(12));
    assert_eq!(x.signum(), BigInt::from(-1i64));
    assert_eq!(x.abs(), BigInt::from(12i64));
    assert_eq!(x.bit_width(), 5);
    assert_eq!(x.trailing_zeros(), 2);
    assert_eq!(BigInt::zero().bit_width(), 0);
    assert_eq!(BigInt::zero().signum(), BigInt::zero());
    assert_eq!(x.clone().into_parts(), (Sign::Minus, BigUint::from_word(12)));
    assert!(x.is_even());
    assert!(!x.is_positive());
}

#[test]
fn test_twos_complement() {
    assert_eq!(BigInt::zero().twos_complement_words(), Vec::<Word>::new());
    assert_eq!(BigInt::from(1i64).twos_complement_words(), vec![1]);
    assert_eq!(BigInt::from(-1i64).twos_complement_words(), vec![Word::MAX]);
    assert_eq!(BigInt::from(-2i64).twos_complement_words(), vec![Word::MAX - 1]);
    assert_eq!(BigInt::from(u64::MAX).twos_complement_words(), vec![Word::MAX, 0]);
    assert_eq!(BigInt::from(-(1i128 << 64)).twos_complement_words(), vec![0, Word::MAX]);
    assert_eq!(BigInt::from(-(1i128 << 63)).twos_complement_words(), vec![1 << 63]);
    assert_eq!(BigInt::from(-(1i128 << 64)).twos_complement_word(5), Word::MAX);
    assert_eq!(BigInt::from(7i64).twos_complement_word(5), 0);

    for value in [0i128, 1, -1, 12345, -12345, i64::MIN as i128, 1 << 64, -(1 << 64), i128::MIN + 1] {
        let x = BigInt::from(value);
        assert_eq!(BigInt::from_twos_complement_words(&x.twos_complement_words()), x);
    }
    assert_eq!(BigInt::from_twos_complement_words(&[0, Word::MAX]), BigInt::from(-(1i128 << 64)));
    assert_eq!(BigInt::from_twos_complement_words(&[Word::MAX, 0]), BigInt::from(u64::MAX));
}
