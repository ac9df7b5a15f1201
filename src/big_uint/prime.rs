use log::debug;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use super::{BigUint, NormalizedDivisor};

// 实现素性检验
impl BigUint {
    /// One round of Miller-Rabin: whether `self` is a strong probable prime to `base`.
    ///
    /// `self` should be odd and `base` below `self`; other inputs give meaningless
    /// answers rather than failing.
    ///
    /// # Panics
    /// If `base <= 1` or `self <= 2`.
    pub fn is_strong_probable_prime(&self, base: &BigUint) -> bool {
        assert!(*base > BigUint::one(), "base must be greater than one");
        assert!(*self > BigUint::from_word(2), "value must be greater than two");
        let modulus = NormalizedDivisor::new(self);
        self.is_spp_normalized(base, &modulus)
    }

    fn is_spp_normalized(&self, base: &BigUint, modulus: &NormalizedDivisor) -> bool {
        let one = BigUint::one();
        let dec = self.subtracting(&one);
        // self - 1 = 2^r * d with d odd
        let r = dec.trailing_zeros();
        let d = dec.shifted_right(r);

        let mut test = base.modpow_normalized(&d, modulus);
        if test == one || test == dec {
            return true;
        }
        for _ in 1..r {
            test = test.square();
            modulus.reduce(&mut test);
            if test == dec {
                return true;
            }
            if test == one {
                return false;
            }
        }
        false
    }

    /// Trial division, then Miller-Rabin rounds with the fixed witness bases.
    ///
    /// Exact below 3317044064679887385961981. Above that a composite passes all
    /// thirteen rounds with probability at most `4^-13`.
    pub fn is_prime(&self) -> bool {
        if let Some(small) = self.to_double() {
            if small < 4 {
                return small >= 2;
            }
        }
        if self.is_even() {
            return false;
        }
        for &p in SMALL_PRIMES.iter() {
            if *self == BigUint::from_word(p) {
                return true;
            }
            if self % p == 0 {
                debug!("trial division: {} divides the candidate", p);
                return false;
            }
        }

        let modulus = NormalizedDivisor::new(self);
        if *self < *PROBABILISTIC_BOUND {
            for (&base, bound) in WITNESS_BASES.iter().zip(PSEUDO_PRIME_BOUNDS.iter()) {
                if !self.is_spp_normalized(&BigUint::from_word(base), &modulus) {
                    return false;
                }
                if self < bound {
                    debug!("deterministic Miller-Rabin: prime after bases up to {}", base);
                    return true;
                }
            }
        }
        debug!("probabilistic Miller-Rabin for a {}-bit candidate", self.bit_width());
        WITNESS_BASES
            .iter()
            .all(|&base| self.is_spp_normalized(&BigUint::from_word(base), &modulus))
    }

    /// `is_prime` followed by `rounds` extra Miller-Rabin rounds with random bases.
    #[cfg(feature = "rand")]
    pub fn is_prime_with_rng<R: rand::Rng + ?Sized>(&self, rng: &mut R, rounds: usize) -> bool {
        if !self.is_prime() {
            return false;
        }
        if *self < *PROBABILISTIC_BOUND {
            return true;
        }
        let modulus = NormalizedDivisor::new(self);
        // bases in 2..self - 1
        let limit = self.subtracting(&BigUint::from_word(3));
        (0..rounds).all(|_| {
            let base = BigUint::random_below(&limit, rng).adding_word(2, 0);
            self.is_spp_normalized(&base, &modulus)
        })
    }

    /// The smallest prime strictly greater than `self`.
    pub fn next_prime(&self) -> BigUint {
        let two = BigUint::from_word(2);
        if *self < two {
            return two;
        }
        let mut candidate = self.adding_word(1, 0);
        if candidate.is_even() {
            candidate.increment();
        }
        while !candidate.is_prime() {
            candidate.add_word(2, 0);
        }
        candidate
    }
}

#[test]
fn test_strong_probable_prime() {
    let m = |e: usize| (BigUint::one() << e) - 1u64;
    let two = BigUint::from_word(2);
    assert!(!m(606).is_strong_probable_prime(&two));
    assert!(m(607).is_strong_probable_prime(&two));
    assert!(m(521).is_strong_probable_prime(&BigUint::from_word(5)));
    assert!(m(89).is_strong_probable_prime(&BigUint::from_word(128)));
    assert!(!BigUint::from_word(217).is_strong_probable_prime(&BigUint::from_word(129)));
    // 2047 = 23 * 89 fools base 2 but not base 3
    assert!(BigUint::from_word(2047).is_strong_probable_prime(&two));
    assert!(!BigUint::from_word(2047).is_strong_probable_prime(&BigUint::from_word(3)));
}

#[test]
fn test_is_prime_small() {
    let primes: Vec<u64> = (0..200u64).filter(|&n| BigUint::from_word(n).is_prime()).collect();
    let expected: Vec<u64> = (0..200u64)
        .filter(|&n| n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0))
        .collect();
    assert_eq!(primes, expected);
}

#[test]
fn test_is_prime_pseudoprimes() {
    for n in [2_047u128, 1_373_653, 25_326_001, 3_215_031_751, 2_152_302_898_747, 3_474_749_660_383] {
        assert!(!BigUint::from(n).is_prime(), "{} is composite", n);
    }
    assert!(!BigUint::from(341_550_071_728_321u128).is_prime());
    assert!(!BigUint::from(3_825_123_056_546_413_051u128).is_prime());
    assert!(!BigUint::from(318_665_857_834_031_151_167_461u128).is_prime());
    assert!(BigUint::from(18_446_744_073_709_551_557u128).is_prime());
}

#[test]
fn test_mersenne_primes() {
    let exponents: Vec<usize> = (1..200)
        .filter(|&e: &usize| ((BigUint::one() << e) - 1u64).is_prime())
        .collect();
    assert_eq!(exponents, vec![2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127]);
    assert!(((BigUint::one() << 607u32) - 1u64).is_prime());
    assert!(!((BigUint::one() << 606u32) - 1u64).is_prime());
}

#[test]
fn test_next_prime() {
    assert_eq!(BigUint::zero().next_prime(), BigUint::from_word(2));
    assert_eq!(BigUint::from_word(2).next_prime(), BigUint::from_word(3));
    assert_eq!(BigUint::from_word(100).next_prime(), BigUint::from_word(101));
    assert_eq!(BigUint::from_word(1000).next_prime(), BigUint::from_word(1009));
    assert_eq!(BigUint::from_word(100_000_000_000).next_prime(), BigUint::from_word(100_000_000_003));
    assert_eq!((BigUint::one() << 64u32).next_prime(), (BigUint::one() << 64u32) + 13u64);
}
