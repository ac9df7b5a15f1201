use std::ops::{Add, AddAssign};

use crate::big_num_constants::*;
use super::BigUint;

/// `a + b + carry`, updating `carry`.
#[inline]
pub(crate) fn adc(a: Word, b: Word, carry: &mut bool) -> Word {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(*carry as Word);
    *carry = c1 | c2;
    sum
}

/// Adds `b` into `a` (which must be at least as long) and returns the carry out of `a`.
pub(crate) fn add_into(a: &mut [Word], b: &[Word]) -> bool {
    let (low, high) = a.split_at_mut(b.len());
    let mut carry = false;
    for (x, &y) in low.iter_mut().zip(b) {
        *x = adc(*x, y, &mut carry);
    }
    if !carry {
        return false;
    }
    for x in high {
        let (sum, overflow) = x.overflowing_add(1);
        *x = sum;
        if !overflow {
            return false;
        }
    }
    true
}

// 实现加法
impl BigUint {
    /// Adds `word` shifted left by `shift` words.
    pub fn add_word(&mut self, word: Word, shift: usize) {
        if word == 0 {
            return;
        }
        if shift < 2 {
            if let Some(value) = self.inline_double() {
                if let Some(sum) = value.checked_add((word as DoubleWord) << (shift * WORD_BITS)) {
                    *self = Self::from_double(sum);
                    return;
                }
            }
        }
        let words = self.words_mut();
        if words.len() <= shift {
            words.resize(shift + 1, 0);
        }
        if add_into(&mut words[shift..], &[word]) {
            words.push(1);
        }
    }

    pub fn adding_word(&self, word: Word, shift: usize) -> BigUint {
        let mut result = self.clone();
        result.add_word(word, shift);
        result
    }

    #[inline]
    pub fn increment(&mut self) {
        self.add_word(1, 0);
    }

    /// Adds `b` shifted left by `shift` words.
    pub fn add_shifted(&mut self, b: &BigUint, shift: usize) {
        if b.is_zero() {
            return;
        }
        if shift == 0 {
            if let (Some(x), Some(y)) = (self.inline_double(), b.to_double()) {
                if let Some(sum) = x.checked_add(y) {
                    *self = Self::from_double(sum);
                    return;
                }
            }
        }
        let b = b.words();
        let words = self.words_mut();
        if words.len() < shift + b.len() {
            words.resize(shift + b.len(), 0);
        }
        if add_into(&mut words[shift..], b) {
            words.push(1);
        }
    }

    pub fn adding_shifted(&self, b: &BigUint, shift: usize) -> BigUint {
        if shift == 0 {
            if let (Some(x), Some(y)) = (self.to_double(), b.to_double()) {
                if let Some(sum) = x.checked_add(y) {
                    return Self::from_double(sum);
                }
            }
        }
        let (a, b) = (self.words(), b.words());
        let len = a.len().max(shift + b.len());
        let mut words = Vec::with_capacity(len + 1);
        words.extend_from_slice(a);
        words.resize(len, 0);
        if add_into(&mut words[shift..], b) {
            words.push(1);
        }
        Self::from_vec(words)
    }

    #[inline]
    pub fn adding(&self, b: &BigUint) -> BigUint {
        self.adding_shifted(b, 0)
    }
}

forward_binop!(impl Add, add for BigUint => adding);

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        self.add_shifted(rhs, 0);
    }
}

impl AddAssign for BigUint {
    fn add_assign(&mut self, rhs: BigUint) {
        self.add_shifted(&rhs, 0);
    }
}

impl Add<Word> for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: Word) -> BigUint {
        self.adding_word(rhs, 0)
    }
}

impl Add<Word> for BigUint {
    type Output = BigUint;

    fn add(mut self, rhs: Word) -> BigUint {
        self.add_word(rhs, 0);
        self
    }
}

impl AddAssign<Word> for BigUint {
    fn add_assign(&mut self, rhs: Word) {
        self.add_word(rhs, 0);
    }
}

#[test]
fn test_add_carry_across_words() {
    let max = BigUint::from_words(&[Word::MAX, Word::MAX]);
    let sum = &max + 1u64;
    assert_eq!(sum.words(), &[0, 0, 1]);

    let mut m = max.clone();
    m.increment();
    assert_eq!(m, sum);

    let three = BigUint::from_words(&[Word::MAX, Word::MAX, Word::MAX]);
    assert_eq!((&three + &three).words(), &[Word::MAX - 1, Word::MAX, Word::MAX, 1]);
}

#[test]
fn test_add_word_shifted() {
    let mut a = BigUint::from_word(1);
    a.add_word(5, 3);
    assert_eq!(a.words(), &[1, 0, 0, 5]);

    let mut b = BigUint::from_words(&[Word::MAX, Word::MAX, 1]);
    b.add_word(1, 0);
    assert_eq!(b.words(), &[0, 0, 2]);

    let c = BigUint::from_word(Word::MAX).adding_word(1, 1);
    assert_eq!(c.words(), &[Word::MAX, 1]);
}

#[test]
fn test_add_shifted() {
    let a = BigUint::from_words(&[1, 2]);
    let b = BigUint::from_words(&[3, 4]);
    assert_eq!(a.adding_shifted(&b, 0).words(), &[4, 6]);
    assert_eq!(a.adding_shifted(&b, 1).words(), &[1, 5, 4]);
    assert_eq!(a.adding_shifted(&b, 4).words(), &[1, 2, 0, 0, 3, 4]);
    assert_eq!(BigUint::zero().adding_shifted(&BigUint::zero(), 5), BigUint::zero());

    let mut c = a.clone();
    c.add_shifted(&b, 4);
    assert_eq!(c, a.adding_shifted(&b, 4));
    assert_eq!(a.words(), &[1, 2]);
}

#[test]
fn test_add_keeps_small_values_inline() {
    use super::Representation;

    let mut a = BigUint::from_word(Word::MAX);
    a += BigUint::from_word(Word::MAX);
    assert_eq!(a.words(), &[Word::MAX - 1, 1]);
    assert_eq!(a.representation(), Representation::Inline);
}
