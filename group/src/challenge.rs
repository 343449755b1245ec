//! Fiat-Shamir challenge derivation.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::GroupParameters;

impl GroupParameters {
    /// Computes the challenge `c = H(R || m) mod Q` with SHA-256.
    ///
    /// `R` is written big-endian and left-padded to the byte width of the
    /// modulus so that the boundary between commitment and message is fixed;
    /// the message follows as its minimal big-endian encoding. The digest is
    /// read as a big-endian integer and reduced modulo the subgroup order.
    pub fn hash(&self, commitment: &BigUint, message: &BigUint) -> BigUint {
        let commitment_bytes = commitment.to_bytes_be();
        let width = self.element_len();

        let mut hasher = Sha256::new();
        if commitment_bytes.len() < width {
            hasher.update(vec![0u8; width - commitment_bytes.len()]);
        }
        hasher.update(&commitment_bytes);
        hasher.update(message.to_bytes_be());

        BigUint::from_bytes_be(&hasher.finalize()) % self.order()
    }
}
