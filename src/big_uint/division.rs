use std::ops::{Div, DivAssign, Rem, RemAssign};

use log::trace;

use crate::big_num_constants::*;
use crate::error::{BigNumError, Result};
use super::addition::add_into;
use super::subtraction::sbb;
use super::BigUint;

/// Divides the double word `hi:lo` by `d`. Requires `hi < d`.
#[inline]
fn div_wide(hi: Word, lo: Word, d: Word) -> (Word, Word) {
    let n = ((hi as DoubleWord) << WORD_BITS) | lo as DoubleWord;
    ((n / d as DoubleWord) as Word, (n % d as DoubleWord) as Word)
}

/// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
fn div_rem_words_by_word(words: &[Word], d: Word) -> (Vec<Word>, Word) {
    let mut q = vec![0; words.len()];
    let mut r = 0;
    for (qi, &w) in q.iter_mut().zip(words).rev() {
        let (digit, rem) = div_wide(r, w, d);
        *qi = digit;
        r = rem;
    }
    (q, r)
}

fn rem_words_by_word(words: &[Word], d: Word) -> Word {
    words.iter().rev().fold(0, |r, &w| div_wide(r, w, d).1)
}

/// `u -= v * q` over `u[..=v.len()]`, returning the borrow out of the top word.
fn mul_sub(u: &mut [Word], v: &[Word], q: Word) -> bool {
    let mut carry: Word = 0;
    let mut borrow = false;
    for (x, &y) in u.iter_mut().zip(v) {
        let p = (y as DoubleWord) * (q as DoubleWord) + carry as DoubleWord;
        carry = (p >> WORD_BITS) as Word;
        *x = sbb(*x, p as Word, &mut borrow);
    }
    let top = &mut u[v.len()];
    *top = sbb(*top, carry, &mut borrow);
    borrow
}

/// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
///
/// `u` is the normalized dividend with one extra high word, `v` the normalized
/// divisor: at least two words, top bit set. The normalized remainder is left
/// in `u[..v.len()]`; quotient words go to `q` when it is given.
fn divide_knuth(u: &mut [Word], v: &[Word], mut q: Option<&mut [Word]>) {
    let n = v.len();
    let m = u.len() - n - 1;
    let v_top = v[n - 1] as DoubleWord;
    let v_next = v[n - 2] as DoubleWord;
    let base = Word::MAX as DoubleWord;

    // D2
    for j in (0..=m).rev() {
        // D3 calculate qhat from the top two words, then correct it at most twice
        let num = ((u[j + n] as DoubleWord) << WORD_BITS) | u[j + n - 1] as DoubleWord;
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;
        while qhat > base || qhat * v_next > ((rhat << WORD_BITS) | u[j + n - 2] as DoubleWord) {
            qhat -= 1;
            rhat += v_top;
            if rhat > base {
                break;
            }
        }
        let mut qhat = qhat as Word;

        // D4 multiply and subtract
        if mul_sub(&mut u[j..=j + n], v, qhat) {
            // D6 add back
            qhat -= 1;
            let carry = add_into(&mut u[j..j + n], v);
            u[j + n] = u[j + n].wrapping_add(carry as Word);
        }
        if let Some(q) = q.as_deref_mut() {
            q[j] = qhat;
        }
    }
}

/// A divisor shifted so its top word has the high bit set, reusable across many
/// divisions by the same value.
pub(crate) struct NormalizedDivisor {
    divisor: BigUint,
    normalized: Vec<Word>,
    shift: usize,
}

impl NormalizedDivisor {
    /// `divisor` must be nonzero.
    pub(crate) fn new(divisor: &BigUint) -> Self {
        debug_assert!(!divisor.is_zero());
        // D1 normalize
        let shift = divisor.leading_zeros() as usize;
        let normalized = divisor.shifted_left(shift).into_words();
        trace!("normalized {}-word divisor by {} bits", normalized.len(), shift);
        NormalizedDivisor { divisor: divisor.clone(), normalized, shift }
    }

    pub(crate) fn divisor(&self) -> &BigUint {
        &self.divisor
    }

    fn normalized_dividend(&self, x: &BigUint) -> Vec<Word> {
        let mut u = x.shifted_left(self.shift).into_words();
        u.push(0);
        u
    }

    pub(crate) fn div_rem(&self, x: &BigUint) -> (BigUint, BigUint) {
        if *x < self.divisor {
            return (BigUint::zero(), x.clone());
        }
        let n = self.normalized.len();
        if n == 1 {
            let (q, r) = div_rem_words_by_word(x.words(), self.divisor.word(0));
            return (BigUint::from_vec(q), BigUint::from_word(r));
        }
        let mut u = self.normalized_dividend(x);
        let mut q = vec![0; u.len() - n];
        trace!("dividing {} words by {} words", x.count(), n);
        divide_knuth(&mut u, &self.normalized, Some(&mut q));
        u.truncate(n);
        let mut r = BigUint::from_vec(u);
        r.shift_right(self.shift);
        (BigUint::from_vec(q), r)
    }

    /// Replaces `x` with `x mod divisor` without producing the quotient.
    pub(crate) fn reduce(&self, x: &mut BigUint) {
        if *x < self.divisor {
            return;
        }
        let n = self.normalized.len();
        if n == 1 {
            *x = BigUint::from_word(rem_words_by_word(x.words(), self.divisor.word(0)));
            return;
        }
        let mut u = self.normalized_dividend(x);
        divide_knuth(&mut u, &self.normalized, None);
        u.truncate(n);
        let mut r = BigUint::from_vec(u);
        r.shift_right(self.shift);
        *x = r;
    }
}

// 实现除法
impl BigUint {
    /// Divides by a nonzero word in place and returns the remainder.
    pub(crate) fn div_rem_word_in_place(&mut self, d: Word) -> Word {
        debug_assert!(d != 0);
        if let Some(value) = self.inline_double() {
            *self = Self::from_double(value / d as DoubleWord);
            return (value % d as DoubleWord) as Word;
        }
        let words = self.words_mut();
        let mut r = 0;
        for w in words.iter_mut().rev() {
            let (q, rem) = div_wide(r, *w, d);
            *w = q;
            r = rem;
        }
        self.trim();
        r
    }

    /// Divides by `d` in place and returns the remainder.
    pub fn divide_by_word(&mut self, d: Word) -> Result<Word> {
        if d == 0 {
            return Err(BigNumError::DivisionByZero);
        }
        Ok(self.div_rem_word_in_place(d))
    }

    pub fn div_rem_word(&self, d: Word) -> Result<(BigUint, Word)> {
        if d == 0 {
            return Err(BigNumError::DivisionByZero);
        }
        if let Some(value) = self.to_double() {
            let d = d as DoubleWord;
            return Ok((Self::from_double(value / d), (value % d) as Word));
        }
        let (q, r) = div_rem_words_by_word(self.words(), d);
        Ok((Self::from_vec(q), r))
    }

    /// Quotient and remainder, with `divisor * q + r == self` and `r < divisor`.
    pub fn div_rem(&self, divisor: &BigUint) -> Result<(BigUint, BigUint)> {
        if divisor.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        if self < divisor {
            return Ok((Self::zero(), self.clone()));
        }
        if let (Some(a), Some(b)) = (self.to_double(), divisor.to_double()) {
            return Ok((Self::from_double(a / b), Self::from_double(a % b)));
        }
        Ok(NormalizedDivisor::new(divisor).div_rem(self))
    }

    /// Remainder only; no quotient words are stored.
    pub fn remainder(&self, divisor: &BigUint) -> Result<BigUint> {
        if divisor.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        if let (Some(a), Some(b)) = (self.to_double(), divisor.to_double()) {
            return Ok(Self::from_double(a % b));
        }
        let mut r = self.clone();
        NormalizedDivisor::new(divisor).reduce(&mut r);
        Ok(r)
    }

    pub fn checked_div(&self, divisor: &BigUint) -> Option<BigUint> {
        self.div_rem(divisor).ok().map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &BigUint) -> Option<BigUint> {
        self.remainder(divisor).ok()
    }

    pub(crate) fn div_or_panic(&self, divisor: &BigUint) -> BigUint {
        match self.div_rem(divisor) {
            Ok((q, _)) => q,
            Err(err) => panic!("{}", err),
        }
    }

    pub(crate) fn rem_or_panic(&self, divisor: &BigUint) -> BigUint {
        match self.remainder(divisor) {
            Ok(r) => r,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(impl Div, div for BigUint => div_or_panic);
forward_assign_op!(impl DivAssign, div_assign for BigUint => div_or_panic);
forward_binop!(impl Rem, rem for BigUint => rem_or_panic);
forward_assign_op!(impl RemAssign, rem_assign for BigUint => rem_or_panic);

impl Div<Word> for &BigUint {
    type Output = BigUint;

    fn div(self, rhs: Word) -> BigUint {
        match self.div_rem_word(rhs) {
            Ok((q, _)) => q,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Div<Word> for BigUint {
    type Output = BigUint;

    fn div(self, rhs: Word) -> BigUint {
        &self / rhs
    }
}

impl Rem<Word> for &BigUint {
    type Output = Word;

    fn rem(self, rhs: Word) -> Word {
        if rhs == 0 {
            panic!("{}", BigNumError::DivisionByZero);
        }
        rem_words_by_word(self.words(), rhs)
    }
}

impl Rem<Word> for BigUint {
    type Output = Word;

    fn rem(self, rhs: Word) -> Word {
        &self % rhs
    }
}

#[cfg(test)]
fn check_division(x: &BigUint, y: &BigUint) {
    let (q, r) = x.div_rem(y).unwrap();
    assert!(r < *y);
    assert_eq!(&(&q * y) + &r, *x);
    assert_eq!(x.remainder(y).unwrap(), r);
}

#[test]
fn test_div_rem_small() {
    let a = BigUint::from_word(328);
    let b = BigUint::from_word(21);
    assert_eq!(&a / &b, BigUint::from_word(15));
    assert_eq!(&a % &b, BigUint::from_word(13));
    assert_eq!(a.div_rem_word(21), Ok((BigUint::from_word(15), 13)));
    assert_eq!(&a % 21u64, 13);
}

#[test]
fn test_div_by_zero() {
    let a = BigUint::from_word(328);
    assert_eq!(a.div_rem(&BigUint::zero()), Err(BigNumError::DivisionByZero));
    assert_eq!(a.remainder(&BigUint::zero()), Err(BigNumError::DivisionByZero));
    assert_eq!(a.checked_div(&BigUint::zero()), None);
    assert_eq!(a.div_rem_word(0), Err(BigNumError::DivisionByZero));
    let mut b = a.clone();
    assert_eq!(b.divide_by_word(0), Err(BigNumError::DivisionByZero));
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_operator_panics_on_zero() {
    let _ = BigUint::one() / BigUint::zero();
}

#[test]
fn test_divide_by_word_in_place() {
    let mut x = BigUint::from_words(&[0, 0, 1]);
    assert_eq!(x.divide_by_word(3), Ok(1));
    assert_eq!(x.words(), &[0x5555555555555555, 0x5555555555555555]);
    check_division(&BigUint::from_words(&[7, 8, 9, 10]), &BigUint::from_word(Word::MAX));
}

#[test]
fn test_knuth_division() {
    let x = BigUint::from_words(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let y = BigUint::from_words(&[9, 10, 11]);
    check_division(&x, &y);
    check_division(&y, &x);
    check_division(&x, &x);

    // normalized divisor, no shift needed
    check_division(&x, &BigUint::from_words(&[Word::MAX, Word::MAX, 1 << 63]));
    // quotient digit estimate needs correcting
    check_division(
        &BigUint::from_words(&[0, 0, 0, 1 << 63, 0x7FFF_FFFF_FFFF_FFFF]),
        &BigUint::from_words(&[1, 0, 1 << 63]),
    );
    check_division(
        &BigUint::from_words(&[Word::MAX, Word::MAX, Word::MAX, Word::MAX]),
        &BigUint::from_words(&[Word::MAX, Word::MAX - 1, Word::MAX]),
    );
}

#[test]
fn test_division_many_shapes() {
    use super::multiplication::sample_words;

    for xl in 1..12 {
        for yl in 1..=xl {
            let x = BigUint::from_words(&sample_words(xl, xl as u64));
            let mut y = BigUint::from_words(&sample_words(yl, 31 * yl as u64));
            if y.is_zero() {
                y = BigUint::one();
            }
            check_division(&x, &y);
            let shorter = &y >> 7u32;
            if !shorter.is_zero() {
                check_division(&x, &shorter);
            }
        }
    }
}

#[test]
fn test_normalized_divisor_reuse() {
    let modulus = BigUint::from_words(&[3, 5, 7]);
    let divisor = NormalizedDivisor::new(&modulus);
    for seed in 0..10 {
        let mut x = BigUint::from_words(&super::multiplication::sample_words(6, seed));
        let expected = x.remainder(&modulus).unwrap();
        assert_eq!(divisor.div_rem(&x).1, expected);
        divisor.reduce(&mut x);
        assert_eq!(x, expected);
    }
    assert_eq!(divisor.divisor(), &modulus);
}
