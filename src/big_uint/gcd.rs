use std::mem;

use crate::big_int::BigInt;
use super::BigUint;

// 实现最大公约数
impl BigUint {
    /// Binary GCD (Stein's algorithm). `gcd(0, 0)` is 0.
    pub fn gcd(&self, b: &BigUint) -> BigUint {
        if self.is_zero() {
            return b.clone();
        }
        if b.is_zero() {
            return self.clone();
        }
        let (az, bz) = (self.trailing_zeros(), b.trailing_zeros());
        let twos = az.min(bz);
        let mut x = self.shifted_right(az);
        let mut y = b.shifted_right(bz);
        if x < y {
            mem::swap(&mut x, &mut y);
        }
        // both odd from here on
        while !x.is_zero() {
            x.shift_right(x.trailing_zeros());
            if x < y {
                mem::swap(&mut x, &mut y);
            }
            x.subtract(&y, 0);
        }
        y.shifted_left(twos)
    }

    pub fn lcm(&self, b: &BigUint) -> BigUint {
        if self.is_zero() || b.is_zero() {
            return BigUint::zero();
        }
        self.div_or_panic(&self.gcd(b)).multiplied(b)
    }

    /// The inverse of `self` modulo `modulus`, or `None` when they share a factor.
    ///
    /// # Panics
    /// If `modulus <= 1`.
    pub fn mod_inverse(&self, modulus: &BigUint) -> Option<BigUint> {
        assert!(*modulus > BigUint::one(), "modulus must be greater than one");
        let mut t1 = BigInt::zero();
        let mut t2 = BigInt::one();
        let mut r1 = modulus.clone();
        let mut r2 = self.clone();
        while !r2.is_zero() {
            let (quotient, remainder) = r1.div_rem(&r2).ok()?;
            let t = &t1 - &(&BigInt::from(quotient) * &t2);
            t1 = mem::replace(&mut t2, t);
            r1 = mem::replace(&mut r2, remainder);
        }
        if r1 > BigUint::one() {
            return None;
        }
        if t1.is_negative() {
            return Some(modulus.subtracting(t1.magnitude()));
        }
        Some(t1.into_magnitude())
    }
}

#[test]
fn test_gcd() {
    let gcd = |a: u64, b: u64| BigUint::from_word(a).gcd(&BigUint::from_word(b));
    assert_eq!(gcd(0, 0), BigUint::zero());
    assert_eq!(gcd(0, 7), BigUint::from_word(7));
    assert_eq!(gcd(7, 0), BigUint::from_word(7));
    assert_eq!(gcd(1, 1), BigUint::one());
    assert_eq!(gcd(8 * 3 * 25 * 7, 2 * 9 * 5 * 49), BigUint::from_word(210));
    assert_eq!(gcd(2 * 9 * 5 * 49, 8 * 3 * 25 * 7), BigUint::from_word(210));
    assert_eq!(gcd(1 << 40, 1 << 20), BigUint::from_word(1 << 20));
}

#[test]
fn test_gcd_of_fibonacci_numbers() {
    // gcd(F(m), F(n)) = F(gcd(m, n))
    let mut fibo = vec![BigUint::zero(), BigUint::one()];
    for i in 2..300 {
        let next = &fibo[i - 1] + &fibo[i - 2];
        fibo.push(next);
    }
    let small_gcd = |mut a: usize, mut b: usize| {
        while b != 0 {
            let t = a % b;
            a = b;
            b = t;
        }
        a
    };
    for (m, n) in [(299, 298), (240, 180), (288, 192), (297, 264), (150, 0)] {
        assert_eq!(fibo[m].gcd(&fibo[n]), fibo[small_gcd(m, n)]);
    }
}

#[test]
fn test_lcm() {
    assert_eq!(BigUint::from_word(4).lcm(&BigUint::from_word(6)), BigUint::from_word(12));
    assert_eq!(BigUint::zero().lcm(&BigUint::from_word(6)), BigUint::zero());
}

#[test]
fn test_mod_inverse() {
    let inverse = |a: u64, m: u64| BigUint::from_word(a).mod_inverse(&BigUint::from_word(m));
    assert_eq!(inverse(13, 15), Some(BigUint::from_word(7)));
    assert_eq!(inverse(4, 8), None);
    assert_eq!(inverse(251, 1023), Some(BigUint::from_word(269)));
    assert_eq!(inverse(2, 1023), Some(BigUint::from_word(512)));
    assert_eq!(inverse(252, 1023), None);
    assert_eq!(inverse(12, 15), None);
    assert_eq!(inverse(0, 15), None);
    assert_eq!(inverse(16, 15), Some(BigUint::one()));

    let p = (BigUint::one() << 127u32) - 1u64;
    let a = BigUint::from_words(&[0x1234_5678_9abc_def0, 0x0fed_cba9]);
    let inv = a.mod_inverse(&p).unwrap();
    assert_eq!((&a * &inv) % &p, BigUint::one());
}

#[test]
#[should_panic(expected = "modulus must be greater than one")]
fn test_mod_inverse_rejects_small_modulus() {
    let _ = BigUint::from_word(3).mod_inverse(&BigUint::one());
}
