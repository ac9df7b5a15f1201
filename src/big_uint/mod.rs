//! # BigUint
//! Arbitrary-precision non-negative integers stored as little-endian 64-bit words.
//!
//! Values below `2^128` live inline without touching the heap. Larger values own a
//! reference counted word array that is copied only when a shared buffer is about
//! to be written, and halves of a value can be taken without copying any words.
//! # Example
//! ```
//! use big_number::BigUint;
//!
//! let a: BigUint = "10000000000000000000000000".into();
//! let b: BigUint = "900000000000".into();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10u32);
//! println!("sqrt(a) = {}", a.sqrt());
//! ```

mod storage;
mod cmp;
mod addition;
mod subtraction;
mod shift;
mod multiplication;
mod division;
mod power;
mod gcd;
mod sqrt;
mod prime;
#[cfg(feature = "rand")]
mod random;
mod bitwise;
mod radix;
mod bytes;
mod convert;
#[cfg(feature = "serde")]
mod serialize;

pub use storage::Representation;
#[cfg(feature = "rand")]
pub use random::RandBigNum;

pub(crate) use division::NormalizedDivisor;
pub(crate) use storage::Storage;

#[derive(Clone)]
pub struct BigUint {
    pub(crate) storage: Storage,
}
