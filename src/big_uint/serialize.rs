use std::fmt;

use serde::de::{Error as SerdeError, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::BigUint;

const INVALID_NUMBER: &str = "Invalid number";
const NEGATIVE_NUMBER: &str = "Number cannot hold a negative value";

/// Encodes as a decimal string.
impl Serialize for BigUint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct BigUintVisitor;

impl Visitor<'_> for BigUintVisitor {
    type Value = BigUint;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a non-negative integer or a decimal string")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: SerdeError,
    {
        Ok(BigUint::from_word(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: SerdeError,
    {
        if v < 0 {
            return Err(E::custom(NEGATIVE_NUMBER));
        }
        Ok(BigUint::from_word(v as u64))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: SerdeError,
    {
        if v.starts_with('-') {
            return Err(E::custom(NEGATIVE_NUMBER));
        }
        v.parse().map_err(|_| E::custom(INVALID_NUMBER))
    }
}

impl<'de> Deserialize<'de> for BigUint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigUintVisitor)
    }
}

#[test]
fn test_serde_json() {
    let x: BigUint = "340282366920938463463374607431768211456".into();
    let json = serde_json::to_string(&x).unwrap();
    assert_eq!(json, "\"340282366920938463463374607431768211456\"");
    assert_eq!(serde_json::from_str::<BigUint>(&json).unwrap(), x);
    assert_eq!(serde_json::from_str::<BigUint>("42").unwrap(), BigUint::from_word(42));
    assert_eq!(serde_json::from_str::<BigUint>("\"0\"").unwrap(), BigUint::zero());
}

#[test]
fn test_serde_json_errors() {
    let negative = serde_json::from_str::<BigUint>("-1").unwrap_err();
    assert!(negative.to_string().contains("Number cannot hold a negative value"));
    let negative = serde_json::from_str::<BigUint>("\"-12\"").unwrap_err();
    assert!(negative.to_string().contains("Number cannot hold a negative value"));
    let garbage = serde_json::from_str::<BigUint>("\"12ab\"").unwrap_err();
    assert!(garbage.to_string().contains("Invalid number"));
    assert!(serde_json::from_str::<BigUint>("1.5").is_err());
}
