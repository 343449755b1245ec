//! Constants used when generating group parameters.

/// Smallest modulus bit length accepted by [`GroupParameters::generate`].
///
/// The smallest safe primes leave a subgroup too small to sample distinct
/// nonces from, so anything below a byte is refused.
///
/// [`GroupParameters::generate`]: crate::GroupParameters::generate
pub const MIN_BITS: u64 = 8;

/// Number of Miller-Rabin witnesses tried per primality test.
pub const MILLER_RABIN_ROUNDS: usize = 32;

/// Primes used for trial division ahead of Miller-Rabin.
pub(crate) const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];
