use log::trace;

use crate::error::{BigNumError, Result};
use super::{BigUint, NormalizedDivisor};

// 实现乘方
impl BigUint {
    /// `self^exponent` by repeated squaring. `0^0` is defined as 1.
    pub fn pow(&self, exponent: usize) -> BigUint {
        if exponent == 0 {
            return BigUint::one();
        }
        if exponent == 1 || self.bit_width() <= 1 {
            return self.clone();
        }
        if self.count_ones() == 1 {
            return BigUint::one().shifted_left(self.trailing_zeros() * exponent);
        }
        let mut result = BigUint::one();
        let mut base = self.clone();
        let mut e = exponent;
        loop {
            if e & 1 == 1 {
                result *= &base;
            }
            e >>= 1;
            if e == 0 {
                return result;
            }
            base = base.square();
        }
    }

    /// `self^exponent mod modulus` by the right-to-left binary method.
    ///
    /// A zero modulus is an `InvalidModulus` error; a modulus of one gives zero.
    pub fn modpow(&self, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
        if modulus.is_zero() {
            return Err(BigNumError::InvalidModulus);
        }
        if *modulus == BigUint::one() {
            return Ok(BigUint::zero());
        }
        Ok(self.modpow_normalized(exponent, &NormalizedDivisor::new(modulus)))
    }

    /// Same as `modpow`, for a modulus greater than one that is already normalized.
    pub(crate) fn modpow_normalized(&self, exponent: &BigUint, modulus: &NormalizedDivisor) -> BigUint {
        let bits = exponent.bit_width();
        trace!("modpow: {}-bit exponent, {}-bit modulus", bits, modulus.divisor().bit_width());
        let mut result = BigUint::one();
        let mut base = self.clone();
        modulus.reduce(&mut base);
        for i in 0..bits {
            if exponent.bit(i) {
                result *= &base;
                modulus.reduce(&mut result);
            }
            if i + 1 < bits {
                base = base.square();
                modulus.reduce(&mut base);
            }
        }
        result
    }

    pub(crate) fn count_ones(&self) -> usize {
        self.words().iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[test]
fn test_pow() {
    assert_eq!(BigUint::zero().pow(0), BigUint::one());
    assert_eq!(BigUint::zero().pow(5), BigUint::zero());
    assert_eq!(BigUint::one().pow(1000), BigUint::one());
    assert_eq!(BigUint::from_word(7).pow(0), BigUint::one());
    assert_eq!(BigUint::from_word(7).pow(1), BigUint::from_word(7));
    assert_eq!(BigUint::from_word(3).pow(4), BigUint::from_word(81));
    assert_eq!(BigUint::from_word(2).pow(200), BigUint::one() << 200u32);
    assert_eq!(BigUint::from_word(12).pow(2), BigUint::from_word(144));

    let x = BigUint::from_word(10);
    assert_eq!(x.pow(40).to_string(), format!("1{}", "0".repeat(40)));
    assert_eq!(x.pow(7 + 13), &x.pow(7) * &x.pow(13));
}

#[test]
fn test_modpow() {
    let two = BigUint::from_word(2);
    assert_eq!(two.modpow(&BigUint::from_word(11), &BigUint::from_word(1000)), Ok(BigUint::from_word(48)));
    assert_eq!(two.modpow(&BigUint::zero(), &BigUint::from_word(1000)), Ok(BigUint::one()));
    assert_eq!(BigUint::zero().modpow(&BigUint::zero(), &BigUint::from_word(7)), Ok(BigUint::one()));
    assert_eq!(two.modpow(&BigUint::from_word(5), &BigUint::one()), Ok(BigUint::zero()));
    assert_eq!(two.modpow(&BigUint::from_word(5), &BigUint::zero()), Err(BigNumError::InvalidModulus));
}

#[test]
fn test_modpow_fermat() {
    // Mersenne primes 2^61 - 1, 2^127 - 1 and 2^521 - 1
    for exponent in [61, 127, 521] {
        let p = (BigUint::one() << exponent) - 1u64;
        let p_minus_one = &p - 1u64;
        for a in [2u64, 3, 5, 7, 11, 13, 17, 19, 23] {
            assert_eq!(BigUint::from_word(a).modpow(&p_minus_one, &p), Ok(BigUint::one()));
        }
        let big_base = &p - 12345u64;
        assert_eq!(big_base.modpow(&p, &p), Ok(big_base.clone()));
    }
}
