use std::fmt;

use serde::de::{Error as SerdeError, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::BigInt;

const INVALID_NUMBER: &str = "Invalid number";

/// Encodes as a decimal string.
impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct BigIntVisitor;

impl Visitor<'_> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "an integer or a decimal string")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: SerdeError,
    {
        Ok(BigInt::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: SerdeError,
    {
        Ok(BigInt::from(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: SerdeError,
    {
        v.parse().map_err(|_| E::custom(INVALID_NUMBER))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}

#[test]
fn test_serde_json() {
    let values = [
        BigInt::zero(),
        BigInt::one(),
        BigInt::from(-1i64),
        BigInt::from(0x0102030405060708i64),
        BigInt::from(-0x0102030405060708i64),
        BigInt::one() << 64u32,
        -(BigInt::one() << 64u32),
        BigInt::from(crate::BigUint::from_words(&[1, 2, 3, 4, 5, 6, 7])),
        -BigInt::from(crate::BigUint::from_words(&[1, 2, 3, 4, 5, 6, 7])),
    ];
    for value in values {
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!("\"{}\"", value));
        assert_eq!(serde_json::from_str::<BigInt>(&json).unwrap(), value);
    }
    for n in [0i64, 1, -1, -44444444] {
        assert_eq!(serde_json::from_str::<BigInt>(&n.to_string()).unwrap(), BigInt::from(n));
    }
    let err = serde_json::from_str::<BigInt>("\"zz\"").unwrap_err();
    assert!(err.to_string().contains("Invalid number"));
}
