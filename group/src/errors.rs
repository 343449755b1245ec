//! Error types for group parameter construction.

use thiserror::Error;

/// Errors that can occur while building or validating [`GroupParameters`].
///
/// [`GroupParameters`]: crate::GroupParameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The requested modulus is shorter than the supported minimum.
    #[error("modulus of {bits} bits is below the minimum of {min} bits")]
    BitsTooSmall { bits: u64, min: u64 },

    /// The modulus is not of the form `2Q + 1` with both `P` and `Q` prime.
    #[error("modulus is not a safe prime")]
    NotSafePrime,

    /// The generator does not generate the order-`Q` subgroup.
    ///
    /// Returned when `g` is out of range, equals one, does not satisfy
    /// `g^Q mod P == 1`, or is not derived from the recorded seed.
    #[error("generator does not generate the prime-order subgroup")]
    InvalidGenerator,
}
