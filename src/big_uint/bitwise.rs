use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::BigUint;

// 实现位运算
impl BigUint {
    /// Inverts every stored word; high words that become zero are dropped.
    pub fn ones_complement(&self) -> BigUint {
        BigUint::from_vec(self.words().iter().map(|w| !w).collect())
    }

    pub(crate) fn and_bits(&self, other: &BigUint) -> BigUint {
        BigUint::from_vec(self.words().iter().zip(other.words()).map(|(a, b)| a & b).collect())
    }

    pub(crate) fn or_bits(&self, other: &BigUint) -> BigUint {
        let (long, short) = if self.count() >= other.count() { (self, other) } else { (other, self) };
        let mut words = long.words().to_vec();
        for (w, s) in words.iter_mut().zip(short.words()) {
            *w |= s;
        }
        BigUint::from_vec(words)
    }

    pub(crate) fn xor_bits(&self, other: &BigUint) -> BigUint {
        let (long, short) = if self.count() >= other.count() { (self, other) } else { (other, self) };
        let mut words = long.words().to_vec();
        for (w, s) in words.iter_mut().zip(short.words()) {
            *w ^= s;
        }
        BigUint::from_vec(words)
    }
}

impl Not for BigUint {
    type Output = BigUint;

    fn not(self) -> BigUint {
        self.ones_complement()
    }
}

impl Not for &BigUint {
    type Output = BigUint;

    fn not(self) -> BigUint {
        self.ones_complement()
    }
}

forward_binop!(impl BitAnd, bitand for BigUint => and_bits);
forward_assign_op!(impl BitAndAssign, bitand_assign for BigUint => and_bits);
forward_binop!(impl BitOr, bitor for BigUint => or_bits);
forward_assign_op!(impl BitOrAssign, bitor_assign for BigUint => or_bits);
forward_binop!(impl BitXor, bitxor for BigUint => xor_bits);
forward_assign_op!(impl BitXorAssign, bitxor_assign for BigUint => xor_bits);

#[test]
fn test_bitwise() {
    let a = BigUint::from_str_radix("1234567890ABCDEF13579BDF2468ACE", 16).unwrap();
    let b = BigUint::from_str_radix("ECA8642FDB97531FEDCBA0987654321", 16).unwrap();

    assert_eq!((!&a).to_string_radix(16), "fedcba9876f543210eca86420db97531");
    assert_eq!((&a | &b).to_string_radix(16), "febc767fdbbfdfffffdfbbdf767cbef");
    assert_eq!((&a & &b).to_string_radix(16), "2044289083410f014380982440200");
    assert_eq!((&a ^ &b).to_string_radix(16), "fe9c32574b3c9ef0fe9c3b47523c9ef");

    let mut c = a.clone();
    c |= &b;
    c &= &a;
    assert_eq!(c, a);
    c ^= a.clone();
    assert!(c.is_zero());
}

#[test]
fn test_bitwise_different_lengths() {
    let long = BigUint::from_words(&[0b1100, 0, 1]);
    let short = BigUint::from_word(0b1010);
    assert_eq!((&long & &short).words(), &[0b1000]);
    assert_eq!((&long | &short).words(), &[0b1110, 0, 1]);
    assert_eq!((&short ^ &long).words(), &[0b0110, 0, 1]);
    assert_eq!(!BigUint::from_words(&[0, u64::MAX]), BigUint::from_word(u64::MAX));
}
