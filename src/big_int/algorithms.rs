use crate::error::{BigNumError, Result};
use crate::BigUint;
use super::{BigInt, Sign};

// 实现乘方
impl BigInt {
    /// `self` raised to `exponent`. Negative exponents give the truncated reciprocal,
    /// which is zero unless the magnitude is one.
    ///
    /// # Panics
    /// If `self` is zero and `exponent` is negative.
    pub fn pow(&self, exponent: i64) -> BigInt {
        let odd = exponent % 2 != 0;
        let sign = if self.is_negative() && odd { Sign::Minus } else { Sign::Plus };
        if exponent >= 0 {
            return BigInt::new(sign, self.magnitude.pow(exponent as usize));
        }
        assert!(!self.is_zero(), "attempt to raise zero to a negative power");
        if self.magnitude == BigUint::one() {
            BigInt::new(sign, BigUint::one())
        } else {
            BigInt::zero()
        }
    }

    pub fn pow10(exponent: usize) -> BigInt {
        BigInt::from(BigUint::pow10(exponent))
    }

    /// `self^exponent mod modulus`, in `0..|modulus|`.
    ///
    /// # Panics
    /// If `self` is zero and `exponent` is negative.
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        if modulus.is_zero() {
            return Err(BigNumError::InvalidModulus);
        }
        let m = modulus.magnitude();
        if *m == BigUint::one() {
            return Ok(BigInt::zero());
        }
        if exponent.is_zero() {
            return Ok(BigInt::one());
        }
        if exponent.magnitude == BigUint::one() && !exponent.is_negative() {
            return self.modulus(modulus);
        }
        if exponent.is_negative() {
            assert!(!self.is_zero(), "attempt to raise zero to a negative power");
            if self.magnitude != BigUint::one() {
                return Ok(BigInt::zero());
            }
            if !self.is_negative() || exponent.is_even() {
                return Ok(BigInt::one());
            }
            return Ok(BigInt::from(m.subtracting(&BigUint::one())));
        }
        let power = self.magnitude.modpow(&exponent.magnitude, m)?;
        if !self.is_negative() || exponent.is_even() || power.is_zero() {
            Ok(BigInt::from(power))
        } else {
            Ok(BigInt::from(m.subtracting(&power)))
        }
    }
}

// 数论
impl BigInt {
    /// Always non-negative.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        BigInt::from(self.magnitude.gcd(&other.magnitude))
    }

    /// The inverse of `self` modulo `|modulus|`, in `0..|modulus|`.
    ///
    /// # Panics
    /// If `|modulus| <= 1`.
    pub fn mod_inverse(&self, modulus: &BigInt) -> Option<BigInt> {
        assert!(modulus.magnitude > BigUint::one(), "modulus must be greater than one");
        let reduced = self.modulus(modulus).ok()?;
        reduced.magnitude.mod_inverse(&modulus.magnitude).map(BigInt::from)
    }

    /// # Panics
    /// If `self` is negative.
    pub fn sqrt(&self) -> BigInt {
        assert!(!self.is_negative(), "square root of a negative number");
        BigInt::from(self.magnitude.sqrt())
    }

    /// Negative values are never strong probable primes.
    ///
    /// # Panics
    /// If `base` is not greater than one, or `self` is positive and not greater than two.
    pub fn is_strong_probable_prime(&self, base: &BigInt) -> bool {
        assert!(
            !base.is_negative() && base.magnitude > BigUint::one(),
            "base must be greater than one"
        );
        !self.is_negative() && self.magnitude.is_strong_probable_prime(&base.magnitude)
    }

    /// Negative values are never prime.
    pub fn is_prime(&self) -> bool {
        !self.is_negative() && self.magnitude.is_prime()
    }
}

#[cfg(test)]
fn int(val: i128) -> BigInt {
    BigInt::from(val)
}

#[test]
fn test_pow() {
    assert_eq!(int(0).pow(0), int(1));
    assert_eq!(int(0).pow(2), int(0));
    for e in -2..=2 {
        assert_eq!(int(1).pow(e), int(1));
    }
    for e in -4..=4i64 {
        let expected = if e % 2 == 0 { 1 } else { -1 };
        assert_eq!(int(-1).pow(e), int(expected), "-1^{}", e);
    }
    for e in -4..0 {
        assert_eq!(int(2).pow(e), int(0));
        assert_eq!(int(-2).pow(e), int(0));
    }
    for e in 0..=4i64 {
        assert_eq!(int(2).pow(e), int(2i128.pow(e as u32)));
        assert_eq!(int(-2).pow(e), int((-2i128).pow(e as u32)));
    }
}

#[test]
fn test_pow10() {
    assert_eq!(BigInt::pow10(0), int(1));
    assert_eq!(BigInt::pow10(3), int(1000));
    assert_eq!(BigInt::pow10(30).to_string(), format!("1{}", "0".repeat(30)));
    assert_eq!(-BigInt::pow10(2) * int(7), int(-700));
}

#[test]
#[should_panic(expected = "attempt to raise zero to a negative power")]
fn test_zero_to_negative_power() {
    let _ = int(0).pow(-1);
}

#[test]
fn test_modpow_agrees_with_pow() {
    for i in -5..=5i128 {
        for j in -5..=5i64 {
            for m in [-7i128, -5, -3, -2, -1, 1, 2, 3, 5, 7] {
                if i == 0 && j < 0 {
                    continue;
                }
                let expected = int(i).pow(j).modulus(&int(m)).unwrap();
                let actual = int(i).modpow(&BigInt::from(j), &int(m)).unwrap();
                assert_eq!(actual, expected, "{}^{} mod {}", i, j, m);
            }
        }
    }
    assert_eq!(int(3).modpow(&int(4), &BigInt::zero()), Err(BigNumError::InvalidModulus));
}

#[test]
fn test_number_theory() {
    assert_eq!(int(12).gcd(&int(15)), int(3));
    assert_eq!(int(-12).gcd(&int(15)), int(3));
    assert_eq!(int(12).gcd(&int(-15)), int(3));
    assert_eq!(int(-12).gcd(&int(-15)), int(3));

    for base in -100..=100i128 {
        for m in [2i128, 3, 4, 5] {
            let (base, m) = (int(base), int(m));
            match base.mod_inverse(&m) {
                Some(inverse) => assert_eq!((&base * &inverse).modulus(&m), Ok(int(1)), "{} {}", base, m),
                None => assert!(base.gcd(&m) > int(1), "{} {}", base, m),
            }
        }
    }
    assert_eq!(int(3).mod_inverse(&int(-7)), Some(int(5)));

    for (value, root) in [(0, 0), (1, 1), (2, 1), (3, 1), (4, 2), (5, 2), (9, 3)] {
        assert_eq!(int(value).sqrt(), int(root));
    }
}

#[test]
fn test_primes() {
    assert!(!int(-7).is_prime());
    assert!(int(103).is_prime());
    assert!(!int(-3_215_031_751).is_strong_probable_prime(&int(7)));
    assert!(int(3_215_031_751).is_strong_probable_prime(&int(7)));
    assert!(!int(3_215_031_751).is_prime());
}

#[test]
#[should_panic(expected = "base must be greater than one")]
fn test_strong_probable_prime_rejects_base_one() {
    let _ = int(7).is_strong_probable_prime(&int(1));
}

#[test]
#[should_panic(expected = "base must be greater than one")]
fn test_strong_probable_prime_rejects_negative_base() {
    let _ = int(-7).is_strong_probable_prime(&int(-2));
}
