//! Schnorr signatures over a prime-order subgroup of `(Z/PZ)^*`.
//!
//! This library implements the Schnorr signature scheme using:
//! - A safe-prime modulus `P = 2Q + 1` and the order-`Q` subgroup of
//!   quadratic residues (see the `group` crate)
//! - SHA-256 for the Fiat-Shamir challenge `c = H(R || m) mod Q`
//! - Arbitrary-precision integers as messages
//!
//! Besides plain signatures it supports blind signatures, either through the
//! explicit three-move exchange in [`blind`] or in one call through
//! [`SchnorrScheme::sign_blind`]. Both kinds verify under the same equation
//! `g^s == R * y^c`.
//!
//! # Example
//!
//! ```
//! use group::BigUint;
//! use schnorr::SchnorrScheme;
//!
//! let mut rng = rand::rng();
//! let scheme = SchnorrScheme::new(&mut rng, 64).expect("scheme");
//! let signing_key = scheme.generate_signing_key();
//! let verifying_key = scheme.generate_public_key();
//!
//! let message = BigUint::from(2132145423432u64);
//! let signature = signing_key.sign(&mut rng, &message);
//! assert!(verifying_key.verify(&message, &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Randomized operations require a cryptographically secure generator
//! - Arithmetic is not constant time
//! - Small moduli, such as the 12-bit default of the demonstration, are for
//!   illustration only

pub mod blind;
mod constants;
mod errors;
mod keys;
mod scheme;
mod signatures;


pub use blind::sign_blind;
pub use constants::{DEFAULT_BITS, DEFAULT_MESSAGE};
pub use errors::SchnorrError;
pub use keys::{SigningKey, VerifyingKey};
pub use scheme::SchnorrScheme;
pub use signatures::{Signature, encode_message};
