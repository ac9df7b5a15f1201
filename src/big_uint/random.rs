//! Randomization of big numbers. Every function draws from the generator it is
//! handed, so a seeded generator reproduces its results.

use log::trace;
use rand::prelude::*;

use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::*;
use super::BigUint;

fn gen_words<R: Rng + ?Sized>(rng: &mut R, width: usize) -> Vec<Word> {
    let len = width.div_ceil(WORD_BITS);
    let mut words = vec![0 as Word; len];
    rng.fill(&mut words[..]);
    let rem = width % WORD_BITS;
    if rem > 0 {
        words[len - 1] &= (1 << rem) - 1;
    }
    words
}

impl BigUint {
    /// A uniformly random value of at most `width` bits.
    pub fn random_with_maximum_width<R: Rng + ?Sized>(width: usize, rng: &mut R) -> BigUint {
        if width == 0 {
            return BigUint::zero();
        }
        BigUint::from_vec(gen_words(rng, width))
    }

    /// A random value of exactly `width` bits; the top bit is always set.
    pub fn random_with_exact_width<R: Rng + ?Sized>(width: usize, rng: &mut R) -> BigUint {
        if width == 0 {
            return BigUint::zero();
        }
        let mut words = gen_words(rng, width);
        let top = (width - 1) % WORD_BITS;
        words[(width - 1) / WORD_BITS] |= 1 << top;
        BigUint::from_vec(words)
    }

    /// A uniformly random value below `limit`, by rejection sampling.
    ///
    /// # Panics
    /// If `limit` is zero.
    pub fn random_below<R: Rng + ?Sized>(limit: &BigUint, rng: &mut R) -> BigUint {
        assert!(!limit.is_zero(), "limit must be positive");
        let width = limit.bit_width();
        let mut rejected = 0;
        loop {
            let candidate = BigUint::random_with_maximum_width(width, rng);
            if candidate < *limit {
                if rejected > 0 {
                    trace!("random_below: {} candidates rejected", rejected);
                }
                return candidate;
            }
            rejected += 1;
        }
    }
}

/// A trait for sampling random big numbers from any [`Rng`].
pub trait RandBigNum {
    /// A random [`BigUint`] of at most `max_width` bits.
    fn gen_big_uint(&mut self, max_width: usize) -> BigUint;

    /// A random [`BigUint`] of exactly `width` bits.
    fn gen_big_uint_exact(&mut self, width: usize) -> BigUint;

    /// A random [`BigUint`] below `limit`. Panics when `limit` is zero.
    fn gen_big_uint_below(&mut self, limit: &BigUint) -> BigUint;

    /// A random [`BigUint`] in `low..high`. Panics unless `low < high`.
    fn gen_big_uint_range(&mut self, low: &BigUint, high: &BigUint) -> BigUint;

    /// A random [`BigInt`] whose magnitude has at most `max_width` bits.
    fn gen_big_int(&mut self, max_width: usize) -> BigInt;

    /// A random prime of exactly `width` bits. Panics when `width < 2`.
    fn gen_prime(&mut self, width: usize) -> BigUint;
}

impl<R: Rng + ?Sized> RandBigNum for R {
    fn gen_big_uint(&mut self, max_width: usize) -> BigUint {
        BigUint::random_with_maximum_width(max_width, self)
    }

    fn gen_big_uint_exact(&mut self, width: usize) -> BigUint {
        BigUint::random_with_exact_width(width, self)
    }

    fn gen_big_uint_below(&mut self, limit: &BigUint) -> BigUint {
        BigUint::random_below(limit, self)
    }

    fn gen_big_uint_range(&mut self, low: &BigUint, high: &BigUint) -> BigUint {
        assert!(*low < *high, "empty range");
        let span = high.subtracting(low);
        BigUint::random_below(&span, self).adding(low)
    }

    fn gen_big_int(&mut self, max_width: usize) -> BigInt {
        loop {
            let magnitude = self.gen_big_uint(max_width);
            // zero has a single sign, retry half the time to keep it as likely as any other value
            if magnitude.is_zero() && self.random::<bool>() {
                continue;
            }
            let sign = if self.random::<bool>() { Sign::Plus } else { Sign::Minus };
            return BigInt::new(sign, magnitude);
        }
    }

    fn gen_prime(&mut self, width: usize) -> BigUint {
        assert!(width >= 2, "a prime needs at least two bits");
        let mut attempts = 0;
        loop {
            let mut candidate = self.gen_big_uint_exact(width);
            candidate.set_bit(0, true);
            attempts += 1;
            if candidate.is_prime() {
                trace!("gen_prime: {}-bit prime after {} candidates", width, attempts);
                return candidate;
            }
        }
    }
}

#[test]
fn test_random_width() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for width in [0, 1, 2, 63, 64, 65, 127, 128, 129, 1000] {
        for _ in 0..20 {
            assert!(rng.gen_big_uint(width).bit_width() <= width);
            assert_eq!(rng.gen_big_uint_exact(width).bit_width(), width);
        }
    }
    assert_eq!(rng.gen_big_uint_exact(1), BigUint::one());
}

#[test]
fn test_random_below() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(11);
    let limit = BigUint::from_words(&[0, 0, 3]);
    for _ in 0..100 {
        assert!(rng.gen_big_uint_below(&limit) < limit);
    }
    for _ in 0..20 {
        assert_eq!(rng.gen_big_uint_below(&BigUint::one()), BigUint::zero());
    }

    let low = BigUint::from_word(1000);
    let high = BigUint::from_word(1010);
    for _ in 0..100 {
        let value = rng.gen_big_uint_range(&low, &high);
        assert!(low <= value && value < high);
    }
}

#[test]
fn test_random_is_reproducible() {
    let mut a = rand::rngs::StdRng::seed_from_u64(42);
    let mut b = rand::rngs::StdRng::seed_from_u64(42);
    for width in [10, 100, 1000] {
        assert_eq!(a.gen_big_uint(width), b.gen_big_uint(width));
        assert_eq!(a.gen_big_int(width), b.gen_big_int(width));
    }
}

#[test]
fn test_gen_prime() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    for width in [2, 8, 64, 130] {
        let p = rng.gen_prime(width);
        assert_eq!(p.bit_width(), width);
        assert!(p.is_prime());
    }
    let n = rng.gen_prime(256);
    assert!(n.is_prime_with_rng(&mut rng, 5));
    assert!(!(&n * &rng.gen_prime(64)).is_prime_with_rng(&mut rng, 5));
}
