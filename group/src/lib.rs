//! Prime-order subgroups of `(Z/PZ)^*` for safe primes `P = 2Q + 1`.
//!
//! This crate provides probable-prime and safe-prime generation, the
//! [`GroupParameters`] describing the order-`Q` subgroup together with a
//! validated generator, secure sampling of scalars and subgroup elements,
//! and the SHA-256 challenge hash used by Fiat-Shamir style schemes.

mod challenge;
mod constants;
mod errors;
mod multiexp;
mod parameters;
mod prime;
mod random;

pub use constants::{MILLER_RABIN_ROUNDS, MIN_BITS};
pub use errors::GroupError;
pub use num_bigint::BigUint;
pub use parameters::GroupParameters;
pub use prime::{is_probable_prime, random_prime, random_safe_prime};
pub use random::{random_bits, random_range};
