use lazy_static::*;

use crate::big_num_constants::*;
use crate::BigUint;

lazy_static! {
    /// `RADIX_CHUNKS[r] = (k, r^k)` where `k` is the largest digit count whose value range
    /// still fits a single word. Strings are parsed and printed `k` digits at a time.
    pub static ref RADIX_CHUNKS: [(usize, Word); 37] = {
        let mut chunks = [(0_usize, 0 as Word); 37];
        for radix in MIN_RADIX..=MAX_RADIX {
            let mut digits = 1;
            let mut power = radix as Word;
            while let Some(next) = power.checked_mul(radix as Word) {
                power = next;
                digits += 1;
            }
            chunks[radix as usize] = (digits, power);
        }
        chunks
    };
    pub static ref PSEUDO_PRIME_BOUNDS: Vec<BigUint> = PSEUDO_PRIMES
        .iter()
        .map(|&p| BigUint::from(p))
        .collect();
    pub static ref PROBABILISTIC_BOUND: BigUint = BigUint::from(PSEUDO_PRIMES[PSEUDO_PRIMES.len() - 1]);
}

#[test]
fn test_radix_chunks() {
    assert_eq!(RADIX_CHUNKS[2], (63, 1 << 63));
    assert_eq!(RADIX_CHUNKS[10], (19, 10_000_000_000_000_000_000));
    assert_eq!(RADIX_CHUNKS[16], (15, 1 << 60));
    for radix in MIN_RADIX..=MAX_RADIX {
        let (digits, power) = RADIX_CHUNKS[radix as usize];
        assert_eq!((radix as Word).checked_pow(digits as u32), Some(power));
        assert_eq!(power.checked_mul(radix as Word), None);
    }
}
