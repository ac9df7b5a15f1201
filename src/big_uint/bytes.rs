use crate::big_num_constants::*;
use super::BigUint;

const WORD_BYTES: usize = WORD_BITS / 8;

// 实现字节序列转换
impl BigUint {
    /// Big-endian bytes without leading zeros. Zero encodes as an empty vector.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes = self.to_bytes_le();
        bytes.reverse();
        bytes
    }

    /// Little-endian bytes without trailing zeros. Zero encodes as an empty vector.
    pub fn to_bytes_le(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.count() * WORD_BYTES);
        for word in self.words() {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        bytes
    }

    /// Leading zero bytes are accepted and ignored.
    pub fn from_bytes_be(bytes: &[u8]) -> BigUint {
        let words = bytes
            .rchunks(WORD_BYTES)
            .map(|chunk| chunk.iter().fold(0 as Word, |acc, &b| (acc << 8) | b as Word))
            .collect::<Vec<_>>();
        BigUint::from_vec(words)
    }

    pub fn from_bytes_le(bytes: &[u8]) -> BigUint {
        let words = bytes
            .chunks(WORD_BYTES)
            .map(|chunk| chunk.iter().rev().fold(0 as Word, |acc, &b| (acc << 8) | b as Word))
            .collect::<Vec<_>>();
        BigUint::from_vec(words)
    }
}

#[test]
fn test_bytes() {
    assert_eq!(BigUint::zero().to_bytes_be(), Vec::<u8>::new());
    assert_eq!(BigUint::from_bytes_be(&[]), BigUint::zero());
    assert_eq!(BigUint::from_bytes_be(&[0, 0, 0]), BigUint::zero());

    let x = BigUint::from_word(66051);
    assert_eq!(x.to_bytes_be(), vec![1, 2, 3]);
    assert_eq!(x.to_bytes_le(), vec![3, 2, 1]);
    assert_eq!(BigUint::from_bytes_be(&[1, 2, 3]), x);
    assert_eq!(BigUint::from_bytes_be(&[0, 0, 1, 2, 3]), x);
    assert_eq!(BigUint::from_bytes_le(&[3, 2, 1, 0]), x);
}

#[test]
fn test_bytes_multi_word() {
    let x = BigUint::from_low_high(0x0807060504030201, 0x0a09);
    let be = x.to_bytes_be();
    assert_eq!(be, vec![0x0a, 0x09, 8, 7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(BigUint::from_bytes_be(&be), x);
    assert_eq!(BigUint::from_bytes_le(&x.to_bytes_le()), x);

    let y = BigUint::from_words(&[u64::MAX, 0, 0, 1]);
    assert_eq!(y.to_bytes_be().len(), 25);
    assert_eq!(BigUint::from_bytes_be(&y.to_bytes_be()), y);
}
