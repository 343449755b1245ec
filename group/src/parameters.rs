//! Safe-prime group parameters and subgroup sampling.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::CryptoRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::MIN_BITS;
use crate::errors::GroupError;
use crate::prime::{is_safe_prime, random_safe_prime};
use crate::random::{random_bits, random_range};

/// A cyclic subgroup of prime order `Q` inside `(Z/PZ)^*`.
///
/// The modulus is a safe prime `P = 2Q + 1`, so the subgroup is the set of
/// quadratic residues and the cofactor `r = (P - 1) / Q` is 2. The generator
/// is derived from a random seed `h` as `g = h^r mod P`.
///
/// Parameters are immutable once built and are meant to be shared between
/// every key and signature of one scheme instance.
///
/// Deserialized parameters go through [`GroupParameters::validate`] and are
/// refused if any invariant fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedParameters")]
pub struct GroupParameters {
    modulus: BigUint,
    order: BigUint,
    cofactor: BigUint,
    seed: BigUint,
    generator: BigUint,
}

/// Wire shape of [`GroupParameters`] before validation.
#[derive(Deserialize)]
struct UncheckedParameters {
    modulus: BigUint,
    order: BigUint,
    cofactor: BigUint,
    seed: BigUint,
    generator: BigUint,
}

impl TryFrom<UncheckedParameters> for GroupParameters {
    type Error = GroupError;

    fn try_from(unchecked: UncheckedParameters) -> Result<Self, Self::Error> {
        let params = Self {
            modulus: unchecked.modulus,
            order: unchecked.order,
            cofactor: unchecked.cofactor,
            seed: unchecked.seed,
            generator: unchecked.generator,
        };
        params.validate(&mut rand::rng())?;
        Ok(params)
    }
}

impl GroupParameters {
    /// Generates fresh parameters with a modulus of exactly `bits` bits.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::BitsTooSmall`] if `bits` is below [`MIN_BITS`].
    ///
    /// # Example
    ///
    /// ```
    /// use group::GroupParameters;
    ///
    /// let mut rng = rand::rng();
    /// let params = GroupParameters::generate(&mut rng, 64).expect("parameters");
    /// assert_eq!(params.bits(), 64);
    /// ```
    pub fn generate<R: CryptoRng + ?Sized>(rng: &mut R, bits: u64) -> Result<Self, GroupError> {
        if bits < MIN_BITS {
            return Err(GroupError::BitsTooSmall {
                bits,
                min: MIN_BITS,
            });
        }

        let (modulus, order) = random_safe_prime(rng, bits);
        Ok(Self::with_subgroup(rng, modulus, order))
    }

    /// Builds parameters over a caller-supplied safe prime, sampling only
    /// the generator.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::BitsTooSmall`] for moduli below [`MIN_BITS`] and
    /// [`GroupError::NotSafePrime`] if `modulus` is not a safe prime.
    pub fn from_safe_prime<R: CryptoRng + ?Sized>(
        rng: &mut R,
        modulus: BigUint,
    ) -> Result<Self, GroupError> {
        let bits = modulus.bits();
        if bits < MIN_BITS {
            return Err(GroupError::BitsTooSmall {
                bits,
                min: MIN_BITS,
            });
        }
        if !is_safe_prime(&modulus, rng) {
            return Err(GroupError::NotSafePrime);
        }

        let order = (&modulus - 1u32) >> 1u32;
        Ok(Self::with_subgroup(rng, modulus, order))
    }

    fn with_subgroup<R: CryptoRng + ?Sized>(rng: &mut R, modulus: BigUint, order: BigUint) -> Self {
        let cofactor = (&modulus - 1u32) / &order;
        let bits = modulus.bits();

        // Seeds that collapse to the identity under the cofactor would
        // yield a degenerate generator.
        let mut attempts = 0u64;
        let seed = loop {
            attempts += 1;
            let h = random_bits(rng, bits);
            if h > BigUint::one() && h < modulus && !h.modpow(&cofactor, &modulus).is_one() {
                break h;
            }
        };
        let generator = seed.modpow(&cofactor, &modulus);
        debug!(bits, attempts, "sampled subgroup generator");

        Self {
            modulus,
            order,
            cofactor,
            seed,
            generator,
        }
    }

    /// Re-checks every invariant of the parameters.
    ///
    /// Useful for parameters obtained through deserialization rather than
    /// [`GroupParameters::generate`].
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NotSafePrime`] if `P` or `Q` is not prime or
    /// `P != 2Q + 1`, and [`GroupError::InvalidGenerator`] if the cofactor,
    /// seed or generator are inconsistent.
    pub fn validate<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<(), GroupError> {
        if self.modulus.bits() < MIN_BITS {
            return Err(GroupError::BitsTooSmall {
                bits: self.modulus.bits(),
                min: MIN_BITS,
            });
        }
        if !is_safe_prime(&self.modulus, rng) || (&self.order << 1u32) + 1u32 != self.modulus {
            return Err(GroupError::NotSafePrime);
        }
        if &self.cofactor * &self.order + 1u32 != self.modulus {
            return Err(GroupError::InvalidGenerator);
        }
        if self.generator <= BigUint::one()
            || self.generator >= self.modulus
            || !self.generator.modpow(&self.order, &self.modulus).is_one()
            || self.seed.modpow(&self.cofactor, &self.modulus) != self.generator
        {
            return Err(GroupError::InvalidGenerator);
        }
        Ok(())
    }

    /// The prime modulus `P`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The prime subgroup order `Q`.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// The cofactor `r = (P - 1) / Q`.
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// The seed `h` the generator was derived from.
    pub fn seed(&self) -> &BigUint {
        &self.seed
    }

    /// The subgroup generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Byte width of an encoded group element.
    pub fn element_len(&self) -> usize {
        self.bits().div_ceil(8) as usize
    }

    /// Returns `true` if `element` lies in `[1, P)` and has order dividing `Q`.
    pub fn is_element(&self, element: &BigUint) -> bool {
        !element.is_zero()
            && element < &self.modulus
            && element.modpow(&self.order, &self.modulus).is_one()
    }

    /// Returns `true` if `scalar` lies in `[0, Q)`.
    pub fn is_scalar(&self, scalar: &BigUint) -> bool {
        scalar < &self.order
    }

    /// Samples a uniformly random element of the order-`Q` subgroup.
    ///
    /// Candidates are drawn from `[0, 2^bits)` and rejected until one lies in
    /// `(0, P)` and satisfies `x^Q mod P == 1`.
    pub fn random_element<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> BigUint {
        let bits = self.bits();
        let mut rejected = 0u64;
        loop {
            let candidate = random_bits(rng, bits);
            if self.is_element(&candidate) {
                trace!(rejected, "sampled subgroup element");
                return candidate;
            }
            rejected += 1;
        }
    }

    /// Samples a uniformly random non-zero scalar in `[1, Q)`.
    pub fn random_scalar<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> BigUint {
        // Every constructed value has Q >= 2^(MIN_BITS - 2), so the range is
        // never empty.
        random_range(rng, &BigUint::one(), &self.order).unwrap_or_else(BigUint::one)
    }

    /// Computes `base^exponent mod P`.
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// Computes `g^exponent mod P`.
    pub fn exp_generator(&self, exponent: &BigUint) -> BigUint {
        self.generator.modpow(exponent, &self.modulus)
    }

    /// Computes `a * b mod P`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }
}
