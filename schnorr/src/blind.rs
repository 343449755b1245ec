//! Blind Schnorr signatures.
//!
//! A requester obtains a signature on a message the signer never sees,
//! through three moves:
//!
//! 1. The signer commits to a nonce: `R = g^r` ([`SigningKey::commit`]).
//! 2. The requester blinds the commitment with `alpha, beta`,
//!    `R' = R * g^alpha * y^beta`, and sends the blinded challenge
//!    `c = H(R' || m) + beta mod Q` ([`BlindRequest::new`]).
//! 3. The signer answers `s = c * x + r mod Q` ([`SignerSession::respond`]).
//!
//! The requester then checks `g^s == y^c * R` and releases the signature
//! `(R', s + alpha mod Q)` ([`BlindRequest::unblind`]), which verifies under
//! the ordinary verification equation.

use group::BigUint;
use rand::CryptoRng;
use tracing::{debug, warn};

use crate::errors::SchnorrError;
use crate::keys::{SigningKey, VerifyingKey};
use crate::signatures::Signature;

/// The signer's commitment `R = g^r`, sent to the requester.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment(pub BigUint);

/// The blinded challenge `c`, sent from the requester to the signer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlindChallenge(pub BigUint);

/// The signer's response `s`, sent back to the requester.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlindResponse(pub BigUint);

/// Signer-side state of one blind signing run.
///
/// Holds the secret nonce behind a [`Commitment`]. Responding consumes the
/// session, so a nonce answers exactly one challenge.
pub struct SignerSession<'a> {
    signing_key: &'a SigningKey,
    nonce: BigUint,
}

impl SigningKey {
    /// Opens a blind signing session and returns the commitment to send.
    pub fn commit<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> (SignerSession<'_>, Commitment) {
        let nonce = self.parameters().random_scalar(rng);
        let commitment = Commitment(self.parameters().exp_generator(&nonce));
        (
            SignerSession {
                signing_key: self,
                nonce,
            },
            commitment,
        )
    }
}

impl SignerSession<'_> {
    /// Answers a blinded challenge with `s = (c * x + r) mod Q`.
    pub fn respond(self, challenge: &BlindChallenge) -> BlindResponse {
        let order = self.signing_key.parameters().order();
        let c = &challenge.0 % order;
        BlindResponse((c * self.signing_key.scalar() + self.nonce) % order)
    }
}

/// Requester-side state of one blind signing run.
///
/// Keeps the blinding factors and the blinded commitment until the
/// signer's response arrives.
pub struct BlindRequest<'a> {
    verifying_key: &'a VerifyingKey,
    commitment: BigUint,
    blinded_commitment: BigUint,
    challenge: BigUint,
    alpha: BigUint,
}

impl<'a> BlindRequest<'a> {
    /// Blinds the signer's commitment for `message` and derives the
    /// challenge to send.
    ///
    /// # Errors
    ///
    /// Returns [`SchnorrError::InvalidElement`] if the commitment is not an
    /// element of the subgroup.
    pub fn new<R: CryptoRng + ?Sized>(
        rng: &mut R,
        verifying_key: &'a VerifyingKey,
        commitment: &Commitment,
        message: &BigUint,
    ) -> Result<(Self, BlindChallenge), SchnorrError> {
        let params = verifying_key.parameters();
        if !params.is_element(&commitment.0) {
            return Err(SchnorrError::InvalidElement);
        }

        let alpha = params.random_scalar(rng);
        let beta = params.random_scalar(rng);

        // R' = R * g^alpha * y^beta
        let blinding = params.double_exp(&alpha, &beta, verifying_key.element());
        let blinded_commitment = params.mul(&commitment.0, &blinding);

        let blinded_challenge = params.hash(&blinded_commitment, message);
        let challenge = (blinded_challenge + beta) % params.order();

        let request = Self {
            verifying_key,
            commitment: commitment.0.clone(),
            blinded_commitment,
            challenge: challenge.clone(),
            alpha,
        };
        Ok((request, BlindChallenge(challenge)))
    }

    /// Checks the signer's response and releases the unblinded signature.
    ///
    /// # Errors
    ///
    /// Returns [`SchnorrError::SigningIntegrity`] if `g^s != y^c * R`; no
    /// signature is produced in that case.
    pub fn unblind(self, response: &BlindResponse) -> Result<Signature, SchnorrError> {
        let params = self.verifying_key.parameters();
        let s = &response.0;

        let expected = params.mul(
            &params.pow(self.verifying_key.element(), &self.challenge),
            &self.commitment,
        );
        if !params.is_scalar(s) || params.exp_generator(s) != expected {
            warn!("blind response failed the integrity check");
            return Err(SchnorrError::SigningIntegrity);
        }

        debug!("released blind signature");
        Ok(Signature {
            r: self.blinded_commitment,
            s: (s + self.alpha) % params.order(),
        })
    }
}

/// Runs the whole blind signing exchange in one call, playing both the
/// signer (holding `signing_key`) and the requester (holding
/// `verifying_key`).
///
/// # Errors
///
/// Returns [`SchnorrError::ParameterMismatch`] if the keys were built over
/// different groups, and [`SchnorrError::SigningIntegrity`] if the
/// response does not check out against `verifying_key`.
pub fn sign_blind<R: CryptoRng + ?Sized>(
    rng: &mut R,
    message: &BigUint,
    signing_key: &SigningKey,
    verifying_key: &VerifyingKey,
) -> Result<Signature, SchnorrError> {
    if !verifying_key.same_group(signing_key) {
        return Err(SchnorrError::ParameterMismatch);
    }

    let (session, commitment) = signing_key.commit(rng);
    let (request, challenge) = BlindRequest::new(rng, verifying_key, &commitment, message)?;
    let response = session.respond(&challenge);
    request.unblind(&response)
}
