use super::BigUint;

impl BigUint {
    /// `floor(sqrt(self))` by Newton's iteration from `2^ceil(bit_width / 2)`.
    pub fn sqrt(&self) -> BigUint {
        if self.is_zero() {
            return BigUint::zero();
        }
        let mut x = BigUint::one().shifted_left((self.bit_width() + 1) / 2);
        loop {
            let mut y = self.div_or_panic(&x);
            y.add_shifted(&x, 0);
            y.shift_right(1);
            // the iterate either settles or flips between x and x + 1
            if y == x || y == x.adding_word(1, 0) {
                return x;
            }
            x = y;
        }
    }
}

#[test]
fn test_sqrt() {
    assert_eq!(BigUint::zero().sqrt(), BigUint::zero());
    for n in 0..=1000u64 {
        let root = BigUint::from_word(n).sqrt();
        let r = root.words().first().copied().unwrap_or(0);
        assert!(r * r <= n && (r + 1) * (r + 1) > n, "sqrt({}) = {}", n, r);
    }
}

#[test]
fn test_sqrt_large() {
    let x = (BigUint::one() << 400u32) + BigUint::from_word(12345);
    assert_eq!(x.sqrt(), BigUint::one() << 200u32);

    let y = (BigUint::one() << 400u32) - 1u64;
    let root = y.sqrt();
    assert_eq!(root, (BigUint::one() << 200u32) - 1u64);

    let z = BigUint::from_words(&[0x0123_4567_89ab_cdef, 0xfedc_ba98, 0x1111, 0x2222_3333]);
    let root = z.sqrt();
    assert!(root.square() <= z);
    assert!((&root + 1u64).square() > z);
}
