//! A Schnorr scheme instance bound to one group and one secret.

use core::fmt;
use std::sync::Arc;

use group::{BigUint, GroupParameters};
use rand::CryptoRng;
use tracing::debug;

use crate::blind;
use crate::errors::SchnorrError;
use crate::keys::{SigningKey, VerifyingKey};
use crate::signatures::Signature;

/// Owns the group parameters and a single secret scalar `x`, sampled once
/// when the scheme is created.
///
/// [`SchnorrScheme::generate_signing_key`] and
/// [`SchnorrScheme::generate_public_key`] always hand out keys derived from
/// that same `x`. Supporting several keys per scheme would need a registry
/// from key identifiers to secrets.
///
/// # Example
///
/// ```
/// use group::BigUint;
/// use schnorr::SchnorrScheme;
///
/// let mut rng = rand::rng();
/// let scheme = SchnorrScheme::new(&mut rng, 64).expect("scheme");
/// let signing_key = scheme.generate_signing_key();
/// let public_key = scheme.generate_public_key();
/// let message = BigUint::from(2132145423432u64);
///
/// let plain = scheme.sign_non_blind(&mut rng, &message, &signing_key);
/// let blind = scheme
///     .sign_blind(&mut rng, &message, &signing_key, &public_key)
///     .expect("blind signature");
///
/// assert!(scheme.verify(&message, &plain, &public_key));
/// assert!(scheme.verify(&message, &blind, &public_key));
/// ```
#[derive(Clone)]
pub struct SchnorrScheme {
    params: Arc<GroupParameters>,
    secret: SigningKey,
}

impl SchnorrScheme {
    /// Generates group parameters with a `bits`-bit modulus and samples the
    /// scheme secret.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    /// * `bits` - Bit length of the safe-prime modulus
    ///
    /// # Errors
    ///
    /// Returns [`SchnorrError::Group`] if the parameters cannot be built.
    pub fn new<R: CryptoRng + ?Sized>(rng: &mut R, bits: u64) -> Result<Self, SchnorrError> {
        let params = GroupParameters::generate(rng, bits)?;
        debug!(bits, "generated group parameters");
        Ok(Self::from_parameters(rng, Arc::new(params)))
    }

    /// Samples a scheme secret over existing parameters.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    /// * `params` - Parameters shared with every key the scheme hands out
    pub fn from_parameters<R: CryptoRng + ?Sized>(
        rng: &mut R,
        params: Arc<GroupParameters>,
    ) -> Self {
        let secret = SigningKey::random(rng, Arc::clone(&params));
        Self { params, secret }
    }

    /// The group the scheme operates in.
    pub fn parameters(&self) -> &Arc<GroupParameters> {
        &self.params
    }

    /// Returns the signing key holding the scheme secret.
    ///
    /// Every call returns a key for the same secret `x`.
    pub fn generate_signing_key(&self) -> SigningKey {
        self.secret.clone()
    }

    /// Returns the public key `g^x mod P` of the scheme secret.
    ///
    /// Every call returns the same element.
    pub fn generate_public_key(&self) -> VerifyingKey {
        self.secret.verifying_key()
    }

    /// Produces a plain Schnorr signature. See [`SigningKey::sign`].
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator for the nonce
    /// * `message` - The message to sign, encoded as an integer
    /// * `signing_key` - The key to sign with
    ///
    /// # Returns
    ///
    /// The signature `(R, s)`.
    pub fn sign_non_blind<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        message: &BigUint,
        signing_key: &SigningKey,
    ) -> Signature {
        signing_key.sign(rng, message)
    }

    /// Produces a blind signature. See [`blind::sign_blind`].
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator for the
    ///   nonce and the blinding factors
    /// * `message` - The message to sign, encoded as an integer
    /// * `signing_key` - The signer's key
    /// * `public_key` - The public key the requester blinds against
    ///
    /// # Returns
    ///
    /// The blinded signature `(R', s + alpha mod Q)`, which verifies under
    /// `public_key` like a plain signature.
    ///
    /// # Errors
    ///
    /// Returns [`SchnorrError::SigningIntegrity`] if the integrity check
    /// fails and [`SchnorrError::ParameterMismatch`] if the keys belong to
    /// different groups.
    pub fn sign_blind<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        message: &BigUint,
        signing_key: &SigningKey,
        public_key: &VerifyingKey,
    ) -> Result<Signature, SchnorrError> {
        blind::sign_blind(rng, message, signing_key, public_key)
    }

    /// Verifies a plain or blind signature. See [`VerifyingKey::verify`].
    ///
    /// # Arguments
    ///
    /// * `message` - The message that was signed
    /// * `signature` - The signature to check
    /// * `public_key` - The signer's public key
    ///
    /// # Returns
    ///
    /// `true` iff `g^s == R * y^c`; never an error.
    pub fn verify(&self, message: &BigUint, signature: &Signature, public_key: &VerifyingKey) -> bool {
        public_key.verify(message, signature)
    }
}

impl fmt::Debug for SchnorrScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchnorrScheme")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
