//! Error types for the Schnorr signature scheme.

use group::GroupError;
use thiserror::Error;

/// Errors that can occur during key handling and signing.
///
/// Verification never returns an error: a signature that does not verify
/// is reported as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchnorrError {
    /// Group parameters could not be generated or failed validation.
    #[error(transparent)]
    Group(#[from] GroupError),

    /// The blind response did not satisfy `g^s == y^c * R`.
    ///
    /// Raised before anything is released, so no partially formed signature
    /// escapes. A corrupted nonce, a response computed for a different
    /// commitment, or a verifying key that does not belong to the signer
    /// all end here.
    #[error("blind signature failed the integrity check")]
    SigningIntegrity,

    /// A value expected to be an element of the order-`Q` subgroup is not.
    #[error("value is not an element of the prime-order subgroup")]
    InvalidElement,

    /// A secret scalar lies outside `[1, Q)`.
    #[error("scalar is outside [1, Q)")]
    InvalidScalar,

    /// Two keys passed to one operation were built over different groups.
    #[error("keys belong to different group parameters")]
    ParameterMismatch,
}
