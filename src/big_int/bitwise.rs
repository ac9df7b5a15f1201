use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::big_num_constants::*;
use crate::BigUint;
use super::{BigInt, Sign};

// 实现移位
impl BigInt {
    pub fn shifted_left(&self, amount: usize) -> BigInt {
        BigInt::new(self.sign, self.magnitude.shifted_left(amount))
    }

    /// Shifts the magnitude and keeps the sign. A negative value whose magnitude is
    /// shifted out entirely becomes `-1`.
    pub fn shifted_right(&self, amount: usize) -> BigInt {
        let mut magnitude = self.magnitude.shifted_right(amount);
        if self.sign == Sign::Minus && magnitude.is_zero() {
            magnitude = BigUint::one();
        }
        BigInt::new(self.sign, magnitude)
    }
}

macro_rules! impl_shift_by_unsigned {
    ($($a: ty),*) => {
        $(
            impl Shl<$a> for BigInt {
                type Output = BigInt;

                fn shl(self, n: $a) -> BigInt {
                    self.shifted_left(n as usize)
                }
            }

            impl Shl<$a> for &BigInt {
                type Output = BigInt;

                fn shl(self, n: $a) -> BigInt {
                    self.shifted_left(n as usize)
                }
            }

            impl ShlAssign<$a> for BigInt {
                fn shl_assign(&mut self, n: $a) {
                    *self = self.shifted_left(n as usize);
                }
            }

            impl Shr<$a> for BigInt {
                type Output = BigInt;

                fn shr(self, n: $a) -> BigInt {
                    self.shifted_right(n as usize)
                }
            }

            impl Shr<$a> for &BigInt {
                type Output = BigInt;

                fn shr(self, n: $a) -> BigInt {
                    self.shifted_right(n as usize)
                }
            }

            impl ShrAssign<$a> for BigInt {
                fn shr_assign(&mut self, n: $a) {
                    *self = self.shifted_right(n as usize);
                }
            }
        )*
    };
}

/// A negative amount shifts the other way.
macro_rules! impl_shift_by_signed {
    ($($a: ty),*) => {
        $(
            impl Shl<$a> for BigInt {
                type Output = BigInt;

                fn shl(self, n: $a) -> BigInt {
                    &self << n
                }
            }

            impl Shl<$a> for &BigInt {
                type Output = BigInt;

                fn shl(self, n: $a) -> BigInt {
                    if n < 0 {
                        self.shifted_right(n.unsigned_abs() as usize)
                    } else {
                        self.shifted_left(n as usize)
                    }
                }
            }

            impl ShlAssign<$a> for BigInt {
                fn shl_assign(&mut self, n: $a) {
                    *self = &*self << n;
                }
            }

            impl Shr<$a> for BigInt {
                type Output = BigInt;

                fn shr(self, n: $a) -> BigInt {
                    &self >> n
                }
            }

            impl Shr<$a> for &BigInt {
                type Output = BigInt;

                fn shr(self, n: $a) -> BigInt {
                    if n < 0 {
                        self.shifted_left(n.unsigned_abs() as usize)
                    } else {
                        self.shifted_right(n as usize)
                    }
                }
            }

            impl ShrAssign<$a> for BigInt {
                fn shr_assign(&mut self, n: $a) {
                    *self = &*self >> n;
                }
            }
        )*
    };
}

impl_shift_by_unsigned!(u8, u16, u32, u64, usize);
impl_shift_by_signed!(i8, i16, i32, i64, isize);

// 实现位运算
impl BigInt {
    /// Applies `op` to the two's complement words of both operands, one word past the
    /// longer magnitude so the top word carries only sign bits.
    fn combine_words(&self, other: &BigInt, op: impl Fn(Word, Word) -> Word) -> BigInt {
        let count = self.magnitude.count().max(other.magnitude.count()) + 1;
        let mut a = self.twos_complement_words();
        a.resize(count, self.fill_word());
        let mut b = other.twos_complement_words();
        b.resize(count, other.fill_word());
        let words = a.iter().zip(&b).map(|(&x, &y)| op(x, y)).collect::<Vec<_>>();
        BigInt::from_twos_complement_words(&words)
    }

    fn and_bits(&self, other: &BigInt) -> BigInt {
        self.combine_words(other, |a, b| a & b)
    }

    fn or_bits(&self, other: &BigInt) -> BigInt {
        self.combine_words(other, |a, b| a | b)
    }

    fn xor_bits(&self, other: &BigInt) -> BigInt {
        self.combine_words(other, |a, b| a ^ b)
    }

    /// `!x == -x - 1`.
    fn not_bits(&self) -> BigInt {
        match self.sign {
            Sign::Plus => BigInt::new(Sign::Minus, self.magnitude.adding_word(1, 0)),
            Sign::Minus => BigInt::from(self.magnitude.subtracting(&BigUint::one())),
        }
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        self.not_bits()
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        self.not_bits()
    }
}

forward_binop!(impl BitAnd, bitand for BigInt => and_bits);
forward_assign_op!(impl BitAndAssign, bitand_assign for BigInt => and_bits);
forward_binop!(impl BitOr, bitor for BigInt => or_bits);
forward_assign_op!(impl BitOrAssign, bitor_assign for BigInt => or_bits);
forward_binop!(impl BitXor, bitxor for BigInt => xor_bits);
forward_assign_op!(impl BitXorAssign, bitxor_assign for BigInt => xor_bits);

#[cfg(test)]
fn int(val: i128) -> BigInt {
    BigInt::from(val)
}

#[test]
fn test_shift_left() {
    assert_eq!(int(1) << 64u32, int(1 << 64));
    assert_eq!(int(-3) << 2u32, int(-12));
    assert_eq!(int(1) >> -64i32, int(1 << 64));
    assert_eq!(int(-5) << 0u8, int(-5));
    let mut x = int(-1);
    x <<= 100usize;
    assert_eq!(x, -(BigInt::one() << 100u32));
}

#[test]
fn test_shift_right() {
    for value in [0i128, 1, 7, 12345, (1 << 70) + 1] {
        for amount in [0u32, 1, 2, 3, 63, 64, 65, 127] {
            assert_eq!(int(value) >> amount, int(value >> amount), "{} >> {}", value, amount);
        }
    }
    assert_eq!(int(-7) >> 1u32, int(-3));
    assert_eq!(int(-3) >> 1u32, int(-1));
    assert_eq!(int(-8) >> 2u32, int(-2));
    assert_eq!(int(-9) >> 2u32, int(-2));
    assert_eq!(int(-12345) >> 4u8, int(-771));
    assert_eq!(int(-(1 << 70) - 1) >> 64u32, int(-64));
    assert_eq!(int(-1) >> 1u32, int(-1));
    assert_eq!(int(-1) >> 64u32, int(-1));
    assert_eq!(int(-5) >> 0u32, int(-5));
    assert_eq!(BigInt::from_twos_complement_words(&[0, Word::MAX]) >> 64u32, int(-1));
    assert_eq!(int(-(1 << 64)) >> 1000usize, int(-1));
    assert_eq!(int(12) >> -2i8, int(48));
    let mut y = int(-9);
    y >>= 1u32;
    assert_eq!(y, int(-4));
}

#[test]
fn test_bitwise() {
    let values = [0i128, 1, -1, 6, -6, 0x1234_5678_9abc_def0_1234, -0x1234_5678_9abc_def0_1234, i128::MIN + 1, i128::MAX];
    for &a in &values {
        assert_eq!(!int(a), int(!a), "!{}", a);
        for &b in &values {
            assert_eq!(int(a) & int(b), int(a & b), "{} & {}", a, b);
            assert_eq!(int(a) | int(b), int(a | b), "{} | {}", a, b);
            assert_eq!(int(a) ^ int(b), int(a ^ b), "{} ^ {}", a, b);
        }
    }
    let mut x = int(-1);
    x &= int(0xff);
    assert_eq!(x, int(0xff));
    x |= &int(-256);
    assert_eq!(x, int(-1));
    x ^= int(-1);
    assert_eq!(x, BigInt::zero());
}
