use std::cmp::Ordering;
use std::ops::{Sub, SubAssign};

use crate::big_num_constants::*;
use crate::error::{BigNumError, Result};
use super::BigUint;

/// `a - b - borrow`, updating `borrow`.
#[inline]
pub(crate) fn sbb(a: Word, b: Word, borrow: &mut bool) -> Word {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(*borrow as Word);
    *borrow = b1 | b2;
    diff
}

/// Subtracts `b` from `a` (which must be at least as long) and returns the borrow out of `a`.
pub(crate) fn sub_from(a: &mut [Word], b: &[Word]) -> bool {
    let (low, high) = a.split_at_mut(b.len());
    let mut borrow = false;
    for (x, &y) in low.iter_mut().zip(b) {
        *x = sbb(*x, y, &mut borrow);
    }
    if !borrow {
        return false;
    }
    for x in high {
        let (diff, overflow) = x.overflowing_sub(1);
        *x = diff;
        if !overflow {
            return false;
        }
    }
    true
}

// 实现减法
//
// The `reporting_overflow` variants wrap on underflow: the result is the
// difference modulo `2^(64 * n)` where `n` is the longer operand's word count
// (counting `b`'s shift), and the returned flag is set.
impl BigUint {
    pub fn subtract_word_reporting_overflow(&mut self, word: Word, shift: usize) -> bool {
        if word == 0 {
            return false;
        }
        if shift < 2 {
            if let Some(value) = self.inline_double() {
                if let Some(diff) = value.checked_sub((word as DoubleWord) << (shift * WORD_BITS)) {
                    *self = Self::from_double(diff);
                    return false;
                }
            }
        }
        let words = self.words_mut();
        if words.len() <= shift {
            words.resize(shift + 1, 0);
        }
        let overflow = sub_from(&mut words[shift..], &[word]);
        self.trim();
        overflow
    }

    /// Subtracts `word` shifted left by `shift` words. Panics if the result would be negative.
    pub fn subtract_word(&mut self, word: Word, shift: usize) {
        if self.subtract_word_reporting_overflow(word, shift) {
            panic!("{}", BigNumError::Underflow);
        }
    }

    #[inline]
    pub fn decrement(&mut self) {
        self.subtract_word(1, 0);
    }

    pub fn subtract_reporting_overflow(&mut self, b: &BigUint, shift: usize) -> bool {
        if b.is_zero() {
            return false;
        }
        if shift == 0 {
            if let (Some(x), Some(y)) = (self.inline_double(), b.to_double()) {
                if let Some(diff) = x.checked_sub(y) {
                    *self = Self::from_double(diff);
                    return false;
                }
            }
        }
        let b = b.words();
        let words = self.words_mut();
        if words.len() < shift + b.len() {
            words.resize(shift + b.len(), 0);
        }
        let overflow = sub_from(&mut words[shift..], b);
        self.trim();
        overflow
    }

    pub fn subtracting_reporting_overflow(&self, b: &BigUint, shift: usize) -> (BigUint, bool) {
        if shift == 0 {
            if let (Some(x), Some(y)) = (self.to_double(), b.to_double()) {
                if let Some(diff) = x.checked_sub(y) {
                    return (Self::from_double(diff), false);
                }
            }
        }
        let (a, b) = (self.words(), b.words());
        let mut words = a.to_vec();
        if words.len() < shift + b.len() {
            words.resize(shift + b.len(), 0);
        }
        let overflow = if shift < words.len() {
            sub_from(&mut words[shift..], b)
        } else {
            false
        };
        (Self::from_vec(words), overflow)
    }

    /// Subtracts `b` shifted left by `shift` words. Panics if the result would be negative.
    pub fn subtract(&mut self, b: &BigUint, shift: usize) {
        if self.subtract_reporting_overflow(b, shift) {
            panic!("{}", BigNumError::Underflow);
        }
    }

    /// `self - b`, or `Underflow` when `b > self`.
    pub fn try_sub(&self, b: &BigUint) -> Result<BigUint> {
        match self.subtracting_reporting_overflow(b, 0) {
            (_, true) => Err(BigNumError::Underflow),
            (diff, false) => Ok(diff),
        }
    }

    pub fn checked_sub(&self, b: &BigUint) -> Option<BigUint> {
        self.try_sub(b).ok()
    }

    /// `|self - b|`.
    pub fn abs_diff(&self, b: &BigUint) -> BigUint {
        match self.cmp(b) {
            Ordering::Less => b.subtracting_reporting_overflow(self, 0).0,
            _ => self.subtracting_reporting_overflow(b, 0).0,
        }
    }

    pub(crate) fn subtracting(&self, b: &BigUint) -> BigUint {
        match self.try_sub(b) {
            Ok(diff) => diff,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(impl Sub, sub for BigUint => subtracting);

impl SubAssign<&BigUint> for BigUint {
    fn sub_assign(&mut self, rhs: &BigUint) {
        self.subtract(rhs, 0);
    }
}

impl SubAssign for BigUint {
    fn sub_assign(&mut self, rhs: BigUint) {
        self.subtract(&rhs, 0);
    }
}

impl Sub<Word> for &BigUint {
    type Output = BigUint;

    fn sub(self, rhs: Word) -> BigUint {
        let mut result = self.clone();
        result.subtract_word(rhs, 0);
        result
    }
}

impl Sub<Word> for BigUint {
    type Output = BigUint;

    fn sub(mut self, rhs: Word) -> BigUint {
        self.subtract_word(rhs, 0);
        self
    }
}

impl SubAssign<Word> for BigUint {
    fn sub_assign(&mut self, rhs: Word) {
        self.subtract_word(rhs, 0);
    }
}

#[test]
fn test_subtract_borrow_across_words() {
    let a = BigUint::from_words(&[0, 0, 1]);
    assert_eq!((&a - 1u64).words(), &[Word::MAX, Word::MAX]);
    assert_eq!((&a - &a), BigUint::zero());

    let mut b = a.clone();
    b.decrement();
    assert_eq!(b.words(), &[Word::MAX, Word::MAX]);
}

#[test]
fn test_subtract_reporting_overflow() {
    let (diff, overflow) = BigUint::from_word(1).subtracting_reporting_overflow(&BigUint::from_word(2), 0);
    assert!(overflow);
    assert_eq!(diff, BigUint::from_word(Word::MAX));

    let (diff, overflow) = BigUint::from_words(&[1, 2, 3]).subtracting_reporting_overflow(&BigUint::from_word(1), 2);
    assert!(!overflow);
    assert_eq!(diff.words(), &[1, 2, 2]);

    let mut c = BigUint::from_word(5);
    assert!(c.subtract_word_reporting_overflow(1, 1));
    assert_eq!(c.words(), &[5, Word::MAX]);

    let mut d = BigUint::from_words(&[0, 0, 0, 1]);
    assert!(!d.subtract_reporting_overflow(&BigUint::from_word(1), 0));
    assert_eq!(d.words(), &[Word::MAX, Word::MAX, Word::MAX]);
}

#[test]
fn test_try_sub() {
    let a = BigUint::from_word(328);
    let b = BigUint::from_word(21);
    assert_eq!(a.try_sub(&b), Ok(BigUint::from_word(307)));
    assert_eq!(b.try_sub(&a), Err(BigNumError::Underflow));
    assert_eq!(b.checked_sub(&a), None);
    assert_eq!(b.abs_diff(&a), BigUint::from_word(307));
    assert_eq!(a.abs_diff(&b), BigUint::from_word(307));
}

#[test]
#[should_panic(expected = "attempt to subtract with overflow")]
fn test_sub_underflow_panics() {
    let _ = BigUint::from_word(1) - BigUint::from_word(2);
}

#[test]
fn test_subtract_on_shared_storage() {
    let original = BigUint::from_words(&[5, 5, 5, 5]);
    let mut copy = original.clone();
    copy -= BigUint::from_word(6);
    assert_eq!(original.words(), &[5, 5, 5, 5]);
    assert_eq!(copy.words(), &[Word::MAX, 4, 5, 5]);
}
