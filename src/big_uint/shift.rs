use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::big_num_constants::*;
use super::BigUint;

// 实现左移
impl BigUint {
    pub fn shifted_left(&self, amount: usize) -> BigUint {
        if amount == 0 || self.is_zero() {
            return self.clone();
        }
        if let Some(value) = self.to_double() {
            if self.bit_width() + amount <= 2 * WORD_BITS {
                return Self::from_double(value << amount);
            }
        }
        let (ext, up) = (amount / WORD_BITS, (amount % WORD_BITS) as u32);
        let src = self.words();
        let mut words = Vec::with_capacity(ext + src.len() + 1);
        words.resize(ext, 0);
        if up == 0 {
            words.extend_from_slice(src);
        } else {
            let mut spill = 0;
            for &w in src {
                words.push((w << up) | spill);
                spill = w >> (WORD_BITS as u32 - up);
            }
            if spill != 0 {
                words.push(spill);
            }
        }
        Self::from_vec(words)
    }

    pub fn shift_left(&mut self, amount: usize) {
        if amount == 0 || self.is_zero() {
            return;
        }
        if let Some(value) = self.inline_double() {
            if self.bit_width() + amount <= 2 * WORD_BITS {
                *self = Self::from_double(value << amount);
                return;
            }
        }
        let (ext, up) = (amount / WORD_BITS, (amount % WORD_BITS) as u32);
        let words = self.words_mut();
        if up != 0 {
            let mut spill = 0;
            for w in words.iter_mut() {
                let next = *w >> (WORD_BITS as u32 - up);
                *w = (*w << up) | spill;
                spill = next;
            }
            if spill != 0 {
                words.push(spill);
            }
        }
        if ext != 0 {
            words.splice(0..0, std::iter::repeat(0).take(ext));
        }
    }

    #[inline]
    pub fn shift_left_words(&mut self, amount: usize) {
        self.shift_left(amount * WORD_BITS);
    }
}

// 实现右移
impl BigUint {
    /// Whole-word right shifts share the source's words instead of copying them.
    pub fn shifted_right(&self, amount: usize) -> BigUint {
        if amount >= self.bit_width() {
            return Self::zero();
        }
        let (ext, down) = (amount / WORD_BITS, (amount % WORD_BITS) as u32);
        if down == 0 {
            return self.extract(ext..);
        }
        if let Some(value) = self.to_double() {
            return Self::from_double(value >> amount);
        }
        let src = &self.words()[ext..];
        let words = (0..src.len())
            .map(|i| {
                let spill = src.get(i + 1).map_or(0, |&w| w << (WORD_BITS as u32 - down));
                (src[i] >> down) | spill
            })
            .collect();
        Self::from_vec(words)
    }

    pub fn shift_right(&mut self, amount: usize) {
        if amount >= self.bit_width() {
            self.clear();
            return;
        }
        if let Some(value) = self.inline_double() {
            *self = Self::from_double(value >> amount);
            return;
        }
        let (ext, down) = (amount / WORD_BITS, (amount % WORD_BITS) as u32);
        let words = self.words_mut();
        if ext != 0 {
            words.drain(..ext);
        }
        if down != 0 {
            for i in 0..words.len() {
                let spill = words.get(i + 1).map_or(0, |&w| w << (WORD_BITS as u32 - down));
                words[i] = (words[i] >> down) | spill;
            }
        }
        self.trim();
    }

    #[inline]
    pub fn shift_right_words(&mut self, amount: usize) {
        self.shift_right(amount.saturating_mul(WORD_BITS));
    }
}

macro_rules! impl_shift_by_unsigned {
    ($($a: ty),*) => {
        $(
            impl Shl<$a> for BigUint {
                type Output = BigUint;

                fn shl(mut self, n: $a) -> BigUint {
                    self.shift_left(n as usize);
                    self
                }
            }

            impl Shl<$a> for &BigUint {
                type Output = BigUint;

                fn shl(self, n: $a) -> BigUint {
                    self.shifted_left(n as usize)
                }
            }

            impl ShlAssign<$a> for BigUint {
                fn shl_assign(&mut self, n: $a) {
                    self.shift_left(n as usize);
                }
            }

            impl Shr<$a> for BigUint {
                type Output = BigUint;

                fn shr(mut self, n: $a) -> BigUint {
                    self.shift_right(n as usize);
                    self
                }
            }

            impl Shr<$a> for &BigUint {
                type Output = BigUint;

                fn shr(self, n: $a) -> BigUint {
                    self.shifted_right(n as usize)
                }
            }

            impl ShrAssign<$a> for BigUint {
                fn shr_assign(&mut self, n: $a) {
                    self.shift_right(n as usize);
                }
            }
        )*
    };
}

/// A negative amount shifts the other way.
macro_rules! impl_shift_by_signed {
    ($($a: ty),*) => {
        $(
            impl Shl<$a> for BigUint {
                type Output = BigUint;

                fn shl(mut self, n: $a) -> BigUint {
                    self <<= n;
                    self
                }
            }

            impl Shl<$a> for &BigUint {
                type Output = BigUint;

                fn shl(self, n: $a) -> BigUint {
                    if n < 0 {
                        self.shifted_right(n.unsigned_abs() as usize)
                    } else {
                        self.shifted_left(n as usize)
                    }
                }
            }

            impl ShlAssign<$a> for BigUint {
                fn shl_assign(&mut self, n: $a) {
                    if n < 0 {
                        self.shift_right(n.unsigned_abs() as usize);
                    } else {
                        self.shift_left(n as usize);
                    }
                }
            }

            impl Shr<$a> for BigUint {
                type Output = BigUint;

                fn shr(mut self, n: $a) -> BigUint {
                    self >>= n;
                    self
                }
            }

            impl Shr<$a> for &BigUint {
                type Output = BigUint;

                fn shr(self, n: $a) -> BigUint {
                    if n < 0 {
                        self.shifted_left(n.unsigned_abs() as usize)
                    } else {
                        self.shifted_right(n as usize)
                    }
                }
            }

            impl ShrAssign<$a> for BigUint {
                fn shr_assign(&mut self, n: $a) {
                    if n < 0 {
                        self.shift_left(n.unsigned_abs() as usize);
                    } else {
                        self.shift_right(n as usize);
                    }
                }
            }
        )*
    };
}

impl_shift_by_unsigned!(u8, u16, u32, u64, usize);
impl_shift_by_signed!(i8, i16, i32, i64, isize);

#[test]
fn test_shift_left() {
    let one = BigUint::one();
    assert_eq!((&one << 64u32).words(), &[0, 1]);
    assert_eq!((&one << 200u32).words(), &[0, 0, 0, 1 << 8]);
    assert_eq!((&one << 0u32), one);

    let x = BigUint::from_words(&[Word::MAX, 1, 1 << 63]);
    assert_eq!((&x << 1u32).words(), &[Word::MAX - 1, 3, 0, 1]);
    assert_eq!((&x << 65u32).words(), &[0, Word::MAX - 1, 3, 0, 1]);

    let mut y = x.clone();
    y <<= 65u32;
    assert_eq!(y, &x << 65u32);
    assert_eq!(x.words(), &[Word::MAX, 1, 1 << 63]);

    let mut z = BigUint::from_word(3);
    z.shift_left_words(2);
    assert_eq!(z.words(), &[0, 0, 3]);
}

#[test]
fn test_shift_right() {
    let x = BigUint::from_words(&[Word::MAX, 1, 1 << 63]);
    assert_eq!((&x >> 1u32).words(), &[Word::MAX, 0, 1 << 62]);
    assert_eq!((&x >> 64u32).words(), &[1, 1 << 63]);
    assert_eq!((&x >> 191u32), BigUint::one());
    assert_eq!((&x >> 192u32), BigUint::zero());
    assert_eq!((&x >> 1000u32), BigUint::zero());

    let mut y = x.clone();
    y >>= 65u32;
    assert_eq!(y, &x >> 65u32);
    assert_eq!(y.words(), &[0, 1 << 62]);
    y.shift_right_words(1);
    assert_eq!(y, BigUint::from_word(1 << 62));
    y.shift_right_words(1);
    assert_eq!(y, BigUint::zero());
}

#[test]
fn test_whole_word_right_shift_shares_storage() {
    use super::Representation;

    let x = BigUint::from_words(&[1, 2, 3, 4, 5]);
    let shifted = &x >> 128u32;
    assert_eq!(shifted.words(), &[3, 4, 5]);
    assert_eq!(shifted.representation(), Representation::Slice { start: 2, end: 5 });
}

#[test]
fn test_negative_shift_amount() {
    let one = BigUint::one();
    assert_eq!((&one >> -64i32).words(), &[0, 1]);
    assert_eq!((&one << -1i32), BigUint::zero());
    let mut x = BigUint::from_word(4);
    x <<= -2i64;
    assert_eq!(x, BigUint::one());
}
