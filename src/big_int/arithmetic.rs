use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::error::Result;
use super::{BigInt, Sign};
#[cfg(test)]
use crate::error::BigNumError;

// 实现加减法
impl BigInt {
    /// `self + other`, with `other` taken to have sign `other_sign`.
    fn add_with_sign(&self, other: &BigInt, other_sign: Sign) -> BigInt {
        if self.sign == other_sign {
            return BigInt::new(self.sign, self.magnitude.adding(&other.magnitude));
        }
        match self.magnitude.cmp(&other.magnitude) {
            Ordering::Less => BigInt::new(other_sign, other.magnitude.subtracting(&self.magnitude)),
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::new(self.sign, self.magnitude.subtracting(&other.magnitude)),
        }
    }

    pub(crate) fn adding(&self, other: &BigInt) -> BigInt {
        self.add_with_sign(other, other.sign)
    }

    pub(crate) fn subtracting(&self, other: &BigInt) -> BigInt {
        if other.is_zero() {
            return self.clone();
        }
        self.add_with_sign(other, -other.sign)
    }

    pub(crate) fn multiplied(&self, other: &BigInt) -> BigInt {
        let sign = if self.sign == other.sign { Sign::Plus } else { Sign::Minus };
        BigInt::new(sign, self.magnitude.multiplied(&other.magnitude))
    }

    pub fn square(&self) -> BigInt {
        BigInt::from(self.magnitude.square())
    }

    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
    }
}

// 实现步进
impl BigInt {
    /// `self + n`.
    pub fn advanced_by(&self, n: &BigInt) -> BigInt {
        self.adding(n)
    }

    /// `other - self`.
    pub fn distance_to(&self, other: &BigInt) -> BigInt {
        other.subtracting(self)
    }
}

forward_binop!(impl Add, add for BigInt => adding);
forward_binop!(impl Sub, sub for BigInt => subtracting);
forward_binop!(impl Mul, mul for BigInt => multiplied);
forward_assign_op!(impl AddAssign, add_assign for BigInt => adding);
forward_assign_op!(impl SubAssign, sub_assign for BigInt => subtracting);
forward_assign_op!(impl MulAssign, mul_assign for BigInt => multiplied);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.clone().neg()
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| &acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| &acc * &x)
    }
}

// 实现除法
impl BigInt {
    /// Truncating division: the quotient rounds toward zero and the remainder takes the
    /// sign of `self`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let (quotient, remainder) = self.magnitude.div_rem(&divisor.magnitude)?;
        let quotient_sign = if self.sign == divisor.sign { Sign::Plus } else { Sign::Minus };
        Ok((BigInt::new(quotient_sign, quotient), BigInt::new(self.sign, remainder)))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(_, r)| r)
    }

    /// The remainder of `self` modulo `modulus`, always in `0..|modulus|`.
    pub fn modulus(&self, modulus: &BigInt) -> Result<BigInt> {
        let remainder = self.magnitude.remainder(&modulus.magnitude)?;
        if self.is_negative() && !remainder.is_zero() {
            return Ok(BigInt::from(modulus.magnitude.subtracting(&remainder)));
        }
        Ok(BigInt::from(remainder))
    }

    fn div_or_panic(&self, divisor: &BigInt) -> BigInt {
        match self.div_rem(divisor) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("{}", err),
        }
    }

    fn rem_or_panic(&self, divisor: &BigInt) -> BigInt {
        match self.div_rem(divisor) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(impl Div, div for BigInt => div_or_panic);
forward_binop!(impl Rem, rem for BigInt => rem_or_panic);
forward_assign_op!(impl DivAssign, div_assign for BigInt => div_or_panic);
forward_assign_op!(impl RemAssign, rem_assign for BigInt => rem_or_panic);

#[cfg(test)]
fn int(val: i128) -> BigInt {
    BigInt::from(val)
}

#[test]
fn test_add_sub() {
    let cases = [(0i128, 0i128), (5, 3), (5, -3), (-5, 3), (-5, -3), (3, -5), (-3, 5), (7, -7)];
    for (a, b) in cases {
        assert_eq!(int(a) + int(b), int(a + b), "{} + {}", a, b);
        assert_eq!(int(a) - int(b), int(a - b), "{} - {}", a, b);
    }
    let big = int(1 << 100);
    assert_eq!(&big - &(&big + &int(1)), int(-1));
    assert_eq!(&int(-1) + &big, int((1 << 100) - 1));

    let mut x = int(10);
    x += int(-15);
    assert_eq!(x, int(-5));
    x -= &int(-5);
    assert_eq!(x, BigInt::zero());
}

#[test]
fn test_mul() {
    for (a, b) in [(0i128, -5i128), (3, 4), (-3, 4), (3, -4), (-3, -4)] {
        assert_eq!(int(a) * int(b), int(a * b));
    }
    assert_eq!((int(0) * int(-5)).sign(), Sign::Plus);
    assert_eq!(int(-7).square(), int(49));
    let product: BigInt = [int(-2), int(3), int(-4)].into_iter().product();
    assert_eq!(product, int(24));
    let sum: BigInt = [int(-2), int(3), int(-4)].iter().sum();
    assert_eq!(sum, int(-3));
}

#[test]
fn test_div_rem_truncates() {
    for (a, b) in [(7i128, 2i128), (-7, 2), (7, -2), (-7, -2), (6, 3), (-6, 3), (1, 5), (-1, 5)] {
        let (q, r) = int(a).div_rem(&int(b)).unwrap();
        assert_eq!(q, int(a / b), "{} / {}", a, b);
        assert_eq!(r, int(a % b), "{} % {}", a, b);
        assert_eq!(int(a) / int(b), int(a / b));
        assert_eq!(int(a) % int(b), int(a % b));
    }
    assert_eq!(int(5).div_rem(&BigInt::zero()), Err(BigNumError::DivisionByZero));
    assert_eq!(int(5).checked_div(&BigInt::zero()), None);
    assert_eq!(int(-5).checked_rem(&int(3)), Some(int(-2)));
}

#[test]
fn test_modulus() {
    assert_eq!(int(22).modulus(&int(5)), Ok(int(2)));
    assert_eq!(int(-22).modulus(&int(5)), Ok(int(3)));
    assert_eq!(int(22).modulus(&int(-5)), Ok(int(2)));
    assert_eq!(int(-22).modulus(&int(-5)), Ok(int(3)));
    assert_eq!(int(-20).modulus(&int(5)), Ok(BigInt::zero()));
    assert_eq!(int(1).modulus(&BigInt::zero()), Err(BigNumError::DivisionByZero));
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_by_zero_panics() {
    let _ = int(1) / BigInt::zero();
}

#[test]
fn test_stride() {
    assert_eq!(int(5).advanced_by(&int(-8)), int(-3));
    assert_eq!(int(-5).advanced_by(&int(5)), BigInt::zero());
    assert_eq!(int(-5).distance_to(&int(3)), int(8));
    assert_eq!(int(3).distance_to(&int(-5)), int(-8));
    let big = BigInt::one() << 130u32;
    let start = int(-7);
    assert_eq!(start.advanced_by(&start.distance_to(&big)), big);
    assert_eq!((0..4).map(|i| int(-2).advanced_by(&int(i * 3))).collect::<Vec<_>>(), [int(-2), int(1), int(4), int(7)]);
}
