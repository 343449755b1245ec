//! Constants used by the Schnorr scheme and its demonstration driver.

/// Modulus bit length used when no security parameter is given.
///
/// Twelve bits is a toy size that keeps a demonstration run instant; it
/// offers no security.
pub const DEFAULT_BITS: u64 = 12;

/// Message signed by the demonstration driver when none is given.
pub const DEFAULT_MESSAGE: u64 = 2_132_145_423_432;
