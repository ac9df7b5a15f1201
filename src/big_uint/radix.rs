use std::fmt;
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::ParseBigNumError;
use super::BigUint;

fn check_radix(radix: u32) {
    assert!((MIN_RADIX..=MAX_RADIX).contains(&radix), "radix must lie in the range 2..=36, got {}", radix);
}

/// Appends the digits of `value`, left padded with zeros to `width`.
fn push_digits(out: &mut String, mut value: Word, radix: u32, width: usize, uppercase: bool) {
    let mut buf = ['0'; WORD_BITS];
    let mut i = buf.len();
    while value != 0 {
        i -= 1;
        let digit = DIGITS[(value % radix as Word) as usize];
        buf[i] = if uppercase { digit.to_ascii_uppercase() } else { digit };
        value /= radix as Word;
    }
    let start = i.min(buf.len() - width);
    out.extend(&buf[start..]);
}

// 实现打印
impl BigUint {
    pub fn to_string_radix(&self, radix: u32) -> String {
        self.format_radix(radix, false)
    }

    pub fn to_string_radix_upper(&self, radix: u32) -> String {
        self.format_radix(radix, true)
    }

    fn format_radix(&self, radix: u32, uppercase: bool) -> String {
        check_radix(radix);
        if self.is_zero() {
            return String::from("0");
        }
        let (digits_per_group, group_radix) = RADIX_CHUNKS[radix as usize];

        // Translate number to string, a digit group at a time
        let mut groups = Vec::with_capacity(self.count() + 1);
        let mut tmp = self.clone();
        while !tmp.is_zero() {
            groups.push(tmp.div_rem_word_in_place(group_radix));
        }

        let mut result = String::with_capacity(groups.len() * digits_per_group);
        let mut groups = groups.into_iter().rev();
        if let Some(first) = groups.next() {
            push_digits(&mut result, first, radix, 0, uppercase);
        }
        // Append remaining digit groups padded with leading zeros
        for group in groups {
            push_digits(&mut result, group, radix, digits_per_group, uppercase);
        }
        result
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_string_radix(10))
    }
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_string_radix(16))
    }
}

impl fmt::UpperHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_string_radix_upper(16))
    }
}

impl fmt::Octal for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &self.to_string_radix(8))
    }
}

impl fmt::Binary for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_string_radix(2))
    }
}

// 实现解析
impl BigUint {
    /// Parses digits in `radix`, case-insensitively, with an optional leading `+`.
    ///
    /// # Panics
    /// If `radix` is not in `2..=36`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigUint, ParseBigNumError> {
        check_radix(radix);
        let text = text.strip_prefix('+').unwrap_or(text);
        if text.is_empty() {
            return Err(ParseBigNumError::Empty);
        }
        let digits = text
            .chars()
            .map(|c| c.to_digit(radix).ok_or(ParseBigNumError::InvalidDigit { digit: c, radix }))
            .collect::<Result<Vec<u32>, _>>()?;

        let (digits_per_group, group_radix) = RADIX_CHUNKS[radix as usize];
        let mut first_group_len = digits.len() % digits_per_group;
        if first_group_len == 0 {
            first_group_len = digits_per_group;
        }
        let (first, rest) = digits.split_at(first_group_len);

        let mut result = BigUint::zero();
        for group in std::iter::once(first).chain(rest.chunks(digits_per_group)) {
            let group_val = group.iter().fold(0 as Word, |acc, &d| acc * radix as Word + d as Word);
            result.multiply_by_word(group_radix);
            result.add_word(group_val, 0);
        }
        Ok(result)
    }
}

impl FromStr for BigUint {
    type Err = ParseBigNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str_radix(s, 10)
    }
}

/// Literal-style construction from decimal text known to be valid.
///
/// # Panics
/// If `val` is not a decimal number.
impl From<&str> for BigUint {
    fn from(val: &str) -> Self {
        match BigUint::from_str_radix(val, 10) {
            Ok(value) => value,
            Err(err) => panic!("invalid number literal {:?}: {}", val, err),
        }
    }
}

#[cfg(test)]
const SAMPLE_HEX: &str = "123456789ABCDEFEDCBA98765432123456789ABCDEF";

#[test]
fn test_to_string() {
    let sample = BigUint::from_str_radix(SAMPLE_HEX, 16).unwrap();
    assert_eq!(BigUint::zero().to_string(), "0");
    assert_eq!(BigUint::one().to_string(), "1");
    assert_eq!(BigUint::from_word(100).to_string(), "100");
    assert_eq!(BigUint::from_word(123456789).to_string(), "123456789");
    assert_eq!(sample.to_string(), "425693205796080237694414176550132631862392541400559");

    assert_eq!(BigUint::from_word(0x1001).to_string_radix(16), "1001");
    assert_eq!(BigUint::from_word(0x0102030405060708).to_string_radix(16), "102030405060708");
    assert_eq!(sample.to_string_radix(16), "123456789abcdefedcba98765432123456789abcdef");
    assert_eq!(sample.to_string_radix_upper(16), SAMPLE_HEX);

    assert_eq!(BigUint::from_word(12).to_string_radix(2), "1100");
    assert_eq!(BigUint::from_word(1234).to_string_radix(2), "10011010010");
    assert_eq!(
        sample.to_string_radix(2),
        "1001000110100010101100111100010011010101111001101111011111110110111001011101010011000011101100101010000110010000100100011010001010110011110001001101010111100110111101111"
    );

    assert_eq!(BigUint::from_word(30).to_string_radix(31), "u");
    assert_eq!(BigUint::from_word(31).to_string_radix(31), "10");
    assert_eq!((BigUint::one() << 64u32).to_string_radix(31), "nd075ib45k86g");
    assert_eq!(BigUint::from_str_radix("2908B5129F59DB6A41", 16).unwrap().to_string_radix(31), "100000000000000");
    assert_eq!(sample.to_string_radix(31), "ptf96helfaqi7ogc3jbonmccrhmnc2b61s");
}

#[test]
fn test_from_str() {
    let sample = BigUint::from_str_radix(SAMPLE_HEX, 16).unwrap();
    assert_eq!("1".parse::<BigUint>(), Ok(BigUint::one()));
    assert_eq!("+17".parse::<BigUint>(), Ok(BigUint::from_word(17)));
    assert_eq!(BigUint::from_str_radix("123456789ABCDEF", 16), Ok(BigUint::from_word(0x123456789ABCDEF)));
    assert_eq!(
        "1000000000000000000000".parse::<BigUint>(),
        BigUint::from_str_radix("3635C9ADC5DEA00000", 16)
    );
    assert_eq!("18446744073709551616".parse::<BigUint>(), Ok(BigUint::one() << 64u32));
    assert_eq!("425693205796080237694414176550132631862392541400559".parse::<BigUint>(), Ok(sample.clone()));
    assert_eq!(BigUint::from_str_radix("ptf96helfaqi7ogc3jbonmccrhmnc2b61s", 31), Ok(sample.clone()));
    assert_eq!(BigUint::from_str_radix("PTF96HELFAQI7OGC3JBONMCCRHMNC2B61S", 31), Ok(sample));
    assert_eq!(
        "1512366075204170947332355369683137040".parse::<BigUint>(),
        Ok(BigUint::from_low_high(0xFEDCBA9876543210, 0x0123456789ABCDEF))
    );
    assert_eq!("0000000000000000000000000000000000042".parse::<BigUint>(), Ok(BigUint::from_word(42)));
    assert!(BigUint::from_str_radix(&SAMPLE_HEX.repeat(100), 16).is_ok());
}

#[test]
fn test_from_str_rejects_garbage() {
    for text in [
        "Not a number",
        "X",
        "12349A",
        "000000000000000000000000A000",
        "00A0000000000000000000000000",
        "00 0000000000000000000000000",
        "\u{4e00}\u{4e03}",
        "1+1",
        "-1",
        "+",
    ] {
        assert!(text.parse::<BigUint>().is_err(), "{:?} should not parse", text);
    }
    assert_eq!("".parse::<BigUint>(), Err(ParseBigNumError::Empty));
    assert_eq!(
        "12x".parse::<BigUint>(),
        Err(ParseBigNumError::InvalidDigit { digit: 'x', radix: 10 })
    );
}

#[test]
#[should_panic(expected = "invalid number literal")]
fn test_literal_panics_on_garbage() {
    let _ = BigUint::from("12a");
}

#[test]
fn test_radix_round_trip() {
    let value = BigUint::from_words(&[0x0123_4567_89ab_cdef, 0xdead_beef, 0, 0xffff_ffff_0000_0001]);
    for radix in MIN_RADIX..=MAX_RADIX {
        let text = value.to_string_radix(radix);
        assert_eq!(BigUint::from_str_radix(&text, radix), Ok(value.clone()), "radix {}", radix);
    }
}

#[test]
fn test_format_traits() {
    let x = BigUint::from_word(255);
    assert_eq!(format!("{:x}", x), "ff");
    assert_eq!(format!("{:#X}", x), "0xFF");
    assert_eq!(format!("{:o}", x), "377");
    assert_eq!(format!("{:#b}", x), "0b11111111");
    assert_eq!(format!("{:>6}", x), "   255");
    assert_eq!(format!("{:06}", x), "000255");
    assert_eq!(format!("{:?}", x), "255");
}
