use std::iter::Product;
use std::ops::{Mul, MulAssign};

use log::trace;

use crate::big_num_constants::*;
use super::addition::add_into;
use super::BigUint;

/// `acc += b * w` over `acc[..b.len()]`, returning the carry word.
#[inline]
pub(crate) fn mac_word(acc: &mut [Word], b: &[Word], w: Word) -> Word {
    let mut carry: Word = 0;
    for (a, &x) in acc.iter_mut().zip(b) {
        let t = (x as DoubleWord) * (w as DoubleWord) + (*a as DoubleWord) + (carry as DoubleWord);
        *a = t as Word;
        carry = (t >> WORD_BITS) as Word;
    }
    carry
}

/// Long multiplication, one row per word of `b`.
fn mul_schoolbook(a: &[Word], b: &[Word]) -> Vec<Word> {
    let mut z = vec![0; a.len() + b.len()];
    for (i, &w) in b.iter().enumerate() {
        if w == 0 {
            continue;
        }
        // z[i + a.len()..] is still untouched here
        let carry = mac_word(&mut z[i..], a, w);
        z[i + a.len()] = carry;
    }
    z
}

// 实现乘法
impl BigUint {
    pub fn multiply_by_word(&mut self, w: Word) {
        if w == 0 {
            self.clear();
            return;
        }
        if w == 1 || self.is_zero() {
            return;
        }
        if let Some(value) = self.inline_double() {
            if let Some(product) = value.checked_mul(w as DoubleWord) {
                *self = Self::from_double(product);
                return;
            }
        }
        let words = self.words_mut();
        let mut carry: Word = 0;
        for x in words.iter_mut() {
            let t = (*x as DoubleWord) * (w as DoubleWord) + carry as DoubleWord;
            *x = t as Word;
            carry = (t >> WORD_BITS) as Word;
        }
        if carry != 0 {
            words.push(carry);
        }
    }

    pub fn multiplied_by_word(&self, w: Word) -> BigUint {
        if let Some(value) = self.to_double() {
            if let Some(product) = value.checked_mul(w as DoubleWord) {
                return Self::from_double(product);
            }
        }
        let src = self.words();
        let mut words = vec![0; src.len() + 1];
        let carry = mac_word(&mut words, src, w);
        words[src.len()] = carry;
        Self::from_vec(words)
    }

    /// `self += x * y`, with the product shifted left by `shift` words.
    pub fn multiply_and_add(&mut self, x: &BigUint, y: Word, shift: usize) {
        if y == 0 || x.is_zero() {
            return;
        }
        let x = x.words();
        let words = self.words_mut();
        if words.len() < shift + x.len() {
            words.resize(shift + x.len(), 0);
        }
        let carry = mac_word(&mut words[shift..], x, y);
        if carry == 0 {
            return;
        }
        let top = shift + x.len();
        if top == words.len() {
            words.push(carry);
        } else if add_into(&mut words[top..], &[carry]) {
            words.push(1);
        }
    }

    pub fn multiplied(&self, y: &BigUint) -> BigUint {
        self.multiplied_with_cutoff(y, KARATSUBA_THRESHOLD)
    }

    pub fn square(&self) -> BigUint {
        self.multiplied(self)
    }

    /// Full product. Operands that both have at least `cutoff` words are split in
    /// halves: equal lengths go through Karatsuba's three products, unequal ones
    /// multiply each half of the longer operand separately.
    pub(crate) fn multiplied_with_cutoff(&self, y: &BigUint, cutoff: usize) -> BigUint {
        let (xc, yc) = (self.count(), y.count());
        if xc == 0 || yc == 0 {
            return Self::zero();
        }
        if let (Some(a), Some(b)) = (self.to_double(), y.to_double()) {
            if let Some(product) = a.checked_mul(b) {
                return Self::from_double(product);
            }
        }
        if yc == 1 {
            return self.multiplied_by_word(y.word(0));
        }
        if xc == 1 {
            return y.multiplied_by_word(self.word(0));
        }
        if xc.min(yc) < cutoff {
            let (long, short) = if xc < yc { (y, self) } else { (self, y) };
            return Self::from_vec(mul_schoolbook(long.words(), short.words()));
        }
        if xc != yc {
            let (long, short) = if xc < yc { (y, self) } else { (self, y) };
            let (high, low) = long.split();
            let mut r = low.multiplied_with_cutoff(short, cutoff);
            r.add_shifted(&high.multiplied_with_cutoff(short, cutoff), long.middle_index());
            return r;
        }

        // x * y = <a, b> * <c, d> = <ac, ac + bd - (a - b)(c - d), bd>
        let shift = self.middle_index();
        trace!("karatsuba: {} words split at {}", xc, shift);
        let (a, b) = self.split();
        let (c, d) = y.split();
        let high = a.multiplied_with_cutoff(&c, cutoff);
        let low = b.multiplied_with_cutoff(&d, cutoff);
        let m = a.abs_diff(&b).multiplied_with_cutoff(&c.abs_diff(&d), cutoff);

        let mut r = low.clone();
        r.add_shifted(&high, 2 * shift);
        r.add_shifted(&low, shift);
        r.add_shifted(&high, shift);
        if (a >= b) == (c >= d) {
            r.subtract(&m, shift);
        } else {
            r.add_shifted(&m, shift);
        }
        r
    }
}

forward_binop!(impl Mul, mul for BigUint => multiplied);
forward_assign_op!(impl MulAssign, mul_assign for BigUint => multiplied);

impl Mul<Word> for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: Word) -> BigUint {
        self.multiplied_by_word(rhs)
    }
}

impl Mul<Word> for BigUint {
    type Output = BigUint;

    fn mul(mut self, rhs: Word) -> BigUint {
        self.multiply_by_word(rhs);
        self
    }
}

impl MulAssign<Word> for BigUint {
    fn mul_assign(&mut self, rhs: Word) {
        self.multiply_by_word(rhs);
    }
}

impl Product for BigUint {
    fn product<I: Iterator<Item = BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::one(), |acc, x| acc.multiplied(&x))
    }
}

impl<'a> Product<&'a BigUint> for BigUint {
    fn product<I: Iterator<Item = &'a BigUint>>(iter: I) -> Self {
        iter.fold(BigUint::one(), |acc, x| acc.multiplied(x))
    }
}

#[cfg(test)]
pub(crate) fn sample_words(len: usize, seed: u64) -> Vec<Word> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            state ^ (state >> 29)
        })
        .collect()
}

#[test]
fn test_mul_by_word() {
    let a: BigUint = "10000000000000000".into();
    let b: BigUint = "3001".into();
    let result: BigUint = "30010000000000000000".into();
    assert_eq!(result, &a * &b);
    assert_eq!(result, b * a);

    let max = BigUint::from_words(&[Word::MAX, Word::MAX, Word::MAX]);
    assert_eq!((&max * Word::MAX).words(), &[1, Word::MAX, Word::MAX, Word::MAX - 1]);
    let mut m = max.clone();
    m *= Word::MAX;
    assert_eq!(m, &max * Word::MAX);
    assert_eq!(&max * 0u64, BigUint::zero());
}

#[test]
fn test_mul() {
    let a: BigUint = "10000000000000000".into();
    let b: BigUint = "30000000000000000".into();
    let result: BigUint = "300000000000000000000000000000000".into();
    assert_eq!(&a * &b, result);

    let x = BigUint::from_words(&[Word::MAX, Word::MAX]);
    // (2^128 - 1)^2 = 2^256 - 2^129 + 1
    assert_eq!((&x * &x).words(), &[1, 0, Word::MAX - 1, Word::MAX]);
    assert_eq!(x.square(), &x * &x);
    assert_eq!(&x * BigUint::zero(), BigUint::zero());
}

#[test]
fn test_multiply_and_add() {
    let mut acc = BigUint::from_words(&[Word::MAX, Word::MAX, Word::MAX]);
    acc.multiply_and_add(&BigUint::from_word(1), 1, 0);
    assert_eq!(acc.words(), &[0, 0, 0, 1]);

    let mut acc = BigUint::from_word(7);
    acc.multiply_and_add(&BigUint::from_words(&[2, 3]), 5, 2);
    assert_eq!(acc.words(), &[7, 0, 10, 15]);
}

#[test]
fn test_karatsuba_matches_schoolbook() {
    for (xl, yl) in [(8, 8), (9, 9), (16, 5), (7, 12), (33, 33)] {
        let x = BigUint::from_words(&sample_words(xl, xl as u64));
        let y = BigUint::from_words(&sample_words(yl, 100 + yl as u64));
        let expected = BigUint::from_vec(mul_schoolbook(x.words(), y.words()));
        assert_eq!(x.multiplied_with_cutoff(&y, 2), expected);
        assert_eq!(y.multiplied_with_cutoff(&x, 3), expected);
    }
}

#[test]
fn test_karatsuba_above_threshold() {
    let x = BigUint::from_words(&sample_words(3 * KARATSUBA_THRESHOLD, 1));
    let y = BigUint::from_words(&sample_words(3 * KARATSUBA_THRESHOLD, 2));
    let expected = BigUint::from_vec(mul_schoolbook(x.words(), y.words()));
    assert_eq!(&x * &y, expected);
}

#[test]
fn test_product() {
    let factors: Vec<BigUint> = (1..=30u64).map(BigUint::from_word).collect();
    let factorial: BigUint = factors.iter().product();
    assert_eq!(factorial.to_string(), "265252859812191058636308480000000");
}
