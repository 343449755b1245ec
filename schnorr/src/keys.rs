//! Signing and verifying keys for the Schnorr signature scheme.

use core::fmt;
use std::sync::Arc;

use group::{BigUint, GroupParameters};
use num_traits::{One, Zero};
use rand::CryptoRng;
use serde::{Deserialize, Serialize};

use crate::errors::SchnorrError;
use crate::signatures::Signature;

/// A secret signing key for creating Schnorr signatures.
///
/// The signing key is a scalar `x` in `[1, Q)` together with the group it
/// was sampled for. It must be kept secret; its `Debug` output omits `x`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use group::GroupParameters;
/// use schnorr::SigningKey;
///
/// let mut rng = rand::rng();
/// let params = Arc::new(GroupParameters::generate(&mut rng, 64).expect("parameters"));
/// let signing_key = SigningKey::random(&mut rng, params);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    scalar: BigUint,
    params: Arc<GroupParameters>,
}

/// A public verifying key for verifying Schnorr signatures.
///
/// The verifying key is the subgroup element `y = g^x mod P`, derived from
/// the signing key by exponentiating the generator with the secret scalar.
///
/// Deserialization applies the same checks as [`VerifyingKey::from_element`]
/// on top of the validation of the embedded group parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedVerifyingKey")]
pub struct VerifyingKey {
    element: BigUint,
    params: Arc<GroupParameters>,
}

/// Wire shape of [`VerifyingKey`] before the element check.
#[derive(Deserialize)]
struct UncheckedVerifyingKey {
    element: BigUint,
    params: Arc<GroupParameters>,
}

impl TryFrom<UncheckedVerifyingKey> for VerifyingKey {
    type Error = SchnorrError;

    fn try_from(unchecked: UncheckedVerifyingKey) -> Result<Self, Self::Error> {
        Self::from_element(unchecked.params, unchecked.element)
    }
}

impl SigningKey {
    /// Generates a random signing key over `params`.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    /// * `params` - The group the key is sampled for
    ///
    /// # Returns
    ///
    /// A key whose secret scalar is uniform in `[1, Q)`.
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R, params: Arc<GroupParameters>) -> Self {
        Self {
            scalar: params.random_scalar(rng),
            params,
        }
    }

    /// Wraps an existing secret scalar.
    ///
    /// # Arguments
    ///
    /// * `params` - The group the scalar belongs to
    /// * `scalar` - The secret exponent `x`
    ///
    /// # Errors
    ///
    /// Returns [`SchnorrError::InvalidScalar`] unless `1 <= scalar < Q`.
    pub fn from_scalar(params: Arc<GroupParameters>, scalar: BigUint) -> Result<Self, SchnorrError> {
        if scalar.is_zero() || !params.is_scalar(&scalar) {
            return Err(SchnorrError::InvalidScalar);
        }
        Ok(Self { scalar, params })
    }

    /// Derives the public verifying key from this signing key.
    ///
    /// The verifying key is computed as `y = g^x mod P` where `g` is the
    /// subgroup generator and `x` is the secret scalar. It shares the
    /// parameters of this key.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            element: self.params.exp_generator(&self.scalar),
            params: Arc::clone(&self.params),
        }
    }

    /// The group this key was generated for.
    pub fn parameters(&self) -> &Arc<GroupParameters> {
        &self.params
    }

    pub(crate) fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Signs a message using this signing key.
    ///
    /// The signature is computed as follows:
    /// 1. Draw a random nonce `r` in `[1, Q)`
    /// 2. Compute the commitment `R = g^r mod P`
    /// 3. Compute the challenge `c = H(R || m) mod Q`
    /// 4. Compute the response `s = (c * x + r) mod Q`
    /// 5. Return `(R, s)`
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator for the nonce
    /// * `message` - The message to sign, encoded as an integer
    ///
    /// # Returns
    ///
    /// The signature `(R, s)`. Signing cannot fail for a well-formed key.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use group::{BigUint, GroupParameters};
    /// use schnorr::SigningKey;
    ///
    /// let mut rng = rand::rng();
    /// let params = Arc::new(GroupParameters::generate(&mut rng, 64).expect("parameters"));
    /// let signing_key = SigningKey::random(&mut rng, params);
    /// let message = BigUint::from(2132145423432u64);
    ///
    /// let signature = signing_key.sign(&mut rng, &message);
    /// assert!(signing_key.verifying_key().verify(&message, &signature));
    /// ```
    pub fn sign<R: CryptoRng + ?Sized>(&self, rng: &mut R, message: &BigUint) -> Signature {
        let params = &self.params;
        let nonce = params.random_scalar(rng);
        let r = params.exp_generator(&nonce);

        let c = params.hash(&r, message);
        let s = (c * &self.scalar + nonce) % params.order();

        Signature { r, s }
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl VerifyingKey {
    /// Wraps an existing public element.
    ///
    /// # Arguments
    ///
    /// * `params` - The group the element belongs to
    /// * `element` - The public element `y`
    ///
    /// # Errors
    ///
    /// Returns [`SchnorrError::InvalidElement`] if `element` is not a
    /// non-identity element of the order-`Q` subgroup.
    pub fn from_element(
        params: Arc<GroupParameters>,
        element: BigUint,
    ) -> Result<Self, SchnorrError> {
        if !params.is_element(&element) || element.is_one() {
            return Err(SchnorrError::InvalidElement);
        }
        Ok(Self { element, params })
    }

    /// The public element `y`.
    pub fn element(&self) -> &BigUint {
        &self.element
    }

    /// The group this key belongs to.
    pub fn parameters(&self) -> &Arc<GroupParameters> {
        &self.params
    }

    /// Verifies a signature on a message using this verifying key.
    ///
    /// The signature is accepted iff `g^s == R * y^c` where
    /// `c = H(R || m) mod Q`. The check is evaluated as `g^s * y^(Q - c) == R`
    /// in a single pass over both exponents.
    ///
    /// Commitments outside the subgroup and responses not reduced modulo `Q`
    /// are rejected, so every valid signature has exactly one encoding.
    ///
    /// # Arguments
    ///
    /// * `message` - The message that was signed, encoded as an integer
    /// * `signature` - The signature to verify, plain or blind
    ///
    /// # Returns
    ///
    /// - `true` if the signature is valid
    /// - `false` otherwise, including for malformed signatures
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
    /// let verifying_key = scheme.generate_public_key();
    /// let message = BigUint::from(7u32);
    ///
    /// let signature = signing_key.sign(&mut rng, &message);
    /// assert!(verifying_key.verify(&message, &signature));
    /// assert!(!verifying_key.verify(&BigUint::from(8u32), &signature));
    /// ```
    pub fn verify(&self, message: &BigUint, signature: &Signature) -> bool {
        let params = &self.params;
        if !params.is_element(&self.element)
            || !params.is_element(&signature.r)
            || !params.is_scalar(&signature.s)
        {
            return false;
        }

        let c = params.hash(&signature.r, message);
        let neg_c = (params.order() - c) % params.order();
        let lhs = params.double_exp(&signature.s, &neg_c, &self.element);

        lhs == signature.r
    }

    pub(crate) fn same_group(&self, signing_key: &SigningKey) -> bool {
        Arc::ptr_eq(&self.params, &signing_key.params) || self.params == signing_key.params
    }
}

impl From<&SigningKey> for VerifyingKey {
    /// Converts a reference to a signing key into a verifying key.
    ///
    /// This is equivalent to calling `signing_key.verifying_key()`.
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}
