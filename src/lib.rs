//! Big Number \
//! This crate provides:
//! - [`BigUint`]: arbitrary-precision non-negative integers. Small values are stored inline,
//!   large ones in a shared word buffer that is copied only on write.
//! - [`BigInt`]: a sign and a [`BigUint`] magnitude. Bitwise operations behave as if the
//!   value were represented in two's-complement notation.
//!
//! Operators panic on division by zero and on unsigned underflow, like the primitive
//! integers do. The named methods (`div_rem`, `try_sub`, `modpow`, ...) report those
//! conditions through [`BigNumError`] instead.

#[macro_use]
mod macros;
mod big_num_cache;
mod big_num_constants;
mod error;
mod big_uint;
mod big_int;

pub use big_uint::{BigUint, Representation};
#[cfg(feature = "rand")]
pub use big_uint::RandBigNum;
pub use big_int::{BigInt, Sign};
pub use error::{BigNumError, ParseBigNumError, Result};
pub use big_num_constants::{DoubleWord, Word, KARATSUBA_THRESHOLD, WORD_BITS};

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BigInt, BigUint, Word};

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".into();
        let b: BigInt = "-900000000000".into();
        assert_eq!((&a + &b).to_string(), "9100000000000");
        assert_eq!((&a - &b).to_string(), "10900000000000");
        assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "-11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10u32).to_string(), "10240000000000000");
        assert_eq!((&b >> 10u32).to_string(), "-878906250");
    }

    fn big_uint() -> impl Strategy<Value = BigUint> {
        prop::collection::vec(any::<Word>(), 0..12).prop_map(BigUint::from)
    }

    fn nonzero_big_uint() -> impl Strategy<Value = BigUint> {
        big_uint().prop_filter("nonzero", |x| !x.is_zero())
    }

    fn big_int() -> impl Strategy<Value = BigInt> {
        (any::<bool>(), big_uint()).prop_map(|(negative, magnitude)| {
            let value = BigInt::from(magnitude);
            if negative { -value } else { value }
        })
    }

    proptest! {
        #[test]
        fn prop_add_sub(a in big_uint(), b in big_uint()) {
            let sum = &a + &b;
            prop_assert_eq!(&sum - &b, a.clone());
            prop_assert_eq!(&sum - &a, b.clone());
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn prop_subtract_reports_underflow(a in big_uint(), b in big_uint()) {
            prop_assert_eq!(a.checked_sub(&b).is_none(), a < b);
            let (difference, overflow) = a.subtracting_reporting_overflow(&b, 0);
            prop_assert_eq!(overflow, a < b);
            if !overflow {
                prop_assert_eq!(difference + &b, a);
            }
        }

        #[test]
        fn prop_mul_distributes(a in big_uint(), b in big_uint(), c in big_uint()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn prop_div_rem(a in big_uint(), b in nonzero_big_uint()) {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r < b);
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert_eq!(a.remainder(&b).unwrap(), r);
        }

        #[test]
        fn prop_sqrt(a in big_uint()) {
            let root = a.sqrt();
            prop_assert!(root.square() <= a);
            let next = &root + 1u64;
            prop_assert!(next.square() > a);
        }

        #[test]
        fn prop_gcd_divides(a in big_uint(), b in big_uint()) {
            let g = a.gcd(&b);
            if g.is_zero() {
                prop_assert!(a.is_zero() && b.is_zero());
            } else {
                prop_assert!((&a % &g).is_zero());
                prop_assert!((&b % &g).is_zero());
            }
        }

        #[test]
        fn prop_mod_inverse(a in big_uint(), m in big_uint()) {
            prop_assume!(m > BigUint::one());
            match a.mod_inverse(&m) {
                Some(inverse) => {
                    prop_assert!(inverse < m);
                    prop_assert_eq!((&a * &inverse) % &m, BigUint::one());
                }
                None => prop_assert!(a.gcd(&m) != BigUint::one()),
            }
        }

        #[test]
        fn prop_radix_round_trip(a in big_uint(), radix in 2u32..=36) {
            let text = a.to_string_radix(radix);
            prop_assert_eq!(BigUint::from_str_radix(&text, radix).unwrap(), a.clone());
            let upper = a.to_string_radix_upper(radix);
            prop_assert_eq!(BigUint::from_str_radix(&upper, radix).unwrap(), a);
        }

        #[test]
        fn prop_bytes_round_trip(a in big_uint(), b in big_int()) {
            prop_assert_eq!(BigUint::from_bytes_be(&a.to_bytes_be()), a.clone());
            prop_assert_eq!(BigUint::from_bytes_le(&a.to_bytes_le()), a);
            prop_assert_eq!(BigInt::from_bytes_be(&b.to_bytes_be()), b);
        }

        #[test]
        fn prop_shift_is_mul_div_by_power_of_two(a in big_uint(), n in 0usize..300) {
            let power = BigUint::one() << n;
            prop_assert_eq!(&a << n, &a * &power);
            prop_assert_eq!(&a >> n, &a / &power);
            prop_assert_eq!(&(&a << n) >> n, a);
        }

        #[test]
        fn prop_pow_laws(a in big_uint(), m in 0usize..6, n in 0usize..6) {
            prop_assert_eq!(&a.pow(m) * &a.pow(n), a.pow(m + n));
            prop_assert_eq!(a.pow(m).pow(n), a.pow(m * n));
        }

        #[test]
        fn prop_modpow_matches_pow(a in big_uint(), e in 0usize..8, m in nonzero_big_uint()) {
            let expected = &a.pow(e) % &m;
            prop_assert_eq!(a.modpow(&BigUint::from(e), &m).unwrap(), expected);
        }

        #[test]
        fn prop_signed_div_rem(a in big_int(), b in big_int()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.magnitude() < b.magnitude());
            prop_assert!(r.is_zero() || r.sign() == a.sign());
            let m = a.modulus(&b).unwrap();
            prop_assert!(!m.is_negative() && m.magnitude() < b.magnitude());
            prop_assert!((&a - &m).modulus(&b).unwrap().is_zero());
        }

        #[test]
        fn prop_twos_complement_round_trip(a in big_int()) {
            prop_assert_eq!(BigInt::from_twos_complement_words(&a.twos_complement_words()), a.clone());
            prop_assert_eq!(!!a.clone(), a.clone());
            prop_assert_eq!(&a ^ &a, BigInt::zero());
            prop_assert_eq!(&a & &!&a, BigInt::zero());
            prop_assert_eq!(&a | &!&a, BigInt::from(-1i64));
        }

        #[test]
        fn prop_signed_string_round_trip(a in big_int()) {
            prop_assert_eq!(a.to_string().parse::<BigInt>().unwrap(), a);
        }
    }
}
