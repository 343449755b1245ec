//! Signature type and message encoding.

use group::BigUint;
use serde::{Deserialize, Serialize};

/// A Schnorr signature consisting of a group element and a scalar.
///
/// The signature is a pair `(R, s)` where:
/// - `R` is an element of the order-`Q` subgroup (the commitment)
/// - `s` is a scalar modulo `Q` (the response)
///
/// It satisfies `g^s == R * y^c` with `c = H(R || m) mod Q`, for plain and
/// blind signatures alike.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The commitment `R`; `g^r` for a plain signature, the blinded
    /// `g^r * g^alpha * y^beta` for a blind one.
    pub r: BigUint,
    /// The response scalar `s`.
    pub s: BigUint,
}

/// Encodes a byte string as the big-endian integer that gets signed.
pub fn encode_message(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}
