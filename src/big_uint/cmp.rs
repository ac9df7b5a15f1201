use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::big_num_constants::*;
use super::BigUint;

/// Compares two trimmed word slices.
pub(crate) fn cmp_words(a: &[Word], b: &[Word]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

// 实现大小比较
impl PartialEq for BigUint {
    fn eq(&self, other: &Self) -> bool {
        self.words() == other.words()
    }
}

impl Eq for BigUint {}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_words(self.words(), other.words())
    }
}

impl Hash for BigUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words().hash(state);
    }
}

// 实现比特查询
impl BigUint {
    /// Number of bits needed to write the value, zero for zero.
    pub fn bit_width(&self) -> usize {
        match self.words().last() {
            None => 0,
            Some(top) => self.count() * WORD_BITS - top.leading_zeros() as usize,
        }
    }

    /// Leading zero bits of the most significant word. Zero has none.
    pub fn leading_zeros(&self) -> u32 {
        self.words().last().map_or(0, |top| top.leading_zeros())
    }

    /// Trailing zero bits. Zero has none, rather than infinitely many.
    pub fn trailing_zeros(&self) -> usize {
        self.words()
            .iter()
            .position(|&w| w != 0)
            .map_or(0, |i| i * WORD_BITS + self.word(i).trailing_zeros() as usize)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.word(0) & 1 == 1
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    pub fn bit(&self, index: usize) -> bool {
        self.word(index / WORD_BITS) >> (index % WORD_BITS) & 1 == 1
    }

    pub fn set_bit(&mut self, index: usize, value: bool) {
        let i = index / WORD_BITS;
        let mask: Word = 1 << (index % WORD_BITS);
        let old = self.word(i);
        let new = if value { old | mask } else { old & !mask };
        if new != old {
            self.set_word(i, new);
        }
    }
}

#[test]
fn test_compare() {
    let a = BigUint::from_words(&[1, 2, 3]);
    let b = BigUint::from_words(&[3, 2, 1]);
    let c = BigUint::from_words(&[Word::MAX, Word::MAX]);
    assert!(a > b);
    assert!(c < b);
    assert!(BigUint::zero() < BigUint::one());
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    assert_eq!(BigUint::from_words(&[5, 0, 0]), BigUint::from_word(5));
}

#[test]
fn test_equal_values_in_different_storage() {
    use std::collections::hash_map::DefaultHasher;

    let array = BigUint::from_words(&[9, 8, 7, 6, 5]);
    let slice = array.extract(2..);
    let owned = BigUint::from_words(&[7, 6, 5]);
    assert_eq!(slice, owned);

    let hash = |b: &BigUint| {
        let mut hasher = DefaultHasher::new();
        b.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&slice), hash(&owned));
}

#[test]
fn test_bit_width() {
    assert_eq!(BigUint::zero().bit_width(), 0);
    assert_eq!(BigUint::one().bit_width(), 1);
    assert_eq!(BigUint::from_word(Word::MAX).bit_width(), 64);
    assert_eq!(BigUint::from_words(&[Word::MAX, 1]).bit_width(), 65);
    assert_eq!(BigUint::from_words(&[0, 0, 1 << 63]).bit_width(), 192);
}

#[test]
fn test_leading_and_trailing_zeros() {
    assert_eq!(BigUint::zero().leading_zeros(), 0);
    assert_eq!(BigUint::one().leading_zeros(), 63);
    assert_eq!(BigUint::from_words(&[Word::MAX, 1]).leading_zeros(), 63);

    assert_eq!(BigUint::zero().trailing_zeros(), 0);
    assert_eq!(BigUint::one().trailing_zeros(), 0);
    assert_eq!(BigUint::from_word(8).trailing_zeros(), 3);
    assert_eq!(BigUint::from_words(&[0, 0, 4]).trailing_zeros(), 130);
}

#[test]
fn test_bits() {
    let mut b = BigUint::zero();
    b.set_bit(200, true);
    assert_eq!(b.bit_width(), 201);
    assert!(b.bit(200));
    assert!(!b.bit(199));
    assert!(!b.bit(1000));
    b.set_bit(3, true);
    b.set_bit(200, false);
    assert_eq!(b, BigUint::from_word(8));
    assert!(b.is_even());
    b.set_bit(0, true);
    assert!(b.is_odd());
}
