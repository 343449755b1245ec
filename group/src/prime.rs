//! Probable-prime and safe-prime generation.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::CryptoRng;
use tracing::debug;

use crate::constants::{MILLER_RABIN_ROUNDS, SMALL_PRIMES};
use crate::random::{random_bits, random_range};

/// Tests `n` for primality with trial division followed by `rounds`
/// Miller-Rabin witnesses drawn from `rng`.
///
/// A composite passes with probability at most `4^-rounds`.
pub fn is_probable_prime<R: CryptoRng + ?Sized>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if n.is_multiple_of(&p) {
            return false;
        }
    }
    if n < &BigUint::from(2u32) {
        return false;
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    let two = BigUint::from(2u32);

    'witness: for _ in 0..rounds {
        let Some(a) = random_range(rng, &two, &n_minus_one) else {
            return false;
        };
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// Samples a probable prime of exactly `bits` bits.
///
/// # Panics
///
/// Panics if `bits < 2`.
pub fn random_prime<R: CryptoRng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    assert!(bits >= 2, "a prime needs at least two bits");

    let top = BigUint::one() << (bits - 1);
    loop {
        let candidate = random_bits(rng, bits) | &top | BigUint::one();
        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS, rng) {
            return candidate;
        }
    }
}

/// Samples a safe prime `P = 2Q + 1` of exactly `bits` bits.
///
/// Returns `(P, Q)`.
///
/// # Panics
///
/// Panics if `bits < 3`.
pub fn random_safe_prime<R: CryptoRng + ?Sized>(rng: &mut R, bits: u64) -> (BigUint, BigUint) {
    assert!(bits >= 3, "a safe prime needs at least three bits");

    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let order = random_prime(rng, bits - 1);
        let modulus = (&order << 1u32) + 1u32;
        if is_probable_prime(&modulus, MILLER_RABIN_ROUNDS, rng) {
            debug!(bits, attempts, "found safe prime");
            return (modulus, order);
        }
    }
}

/// Returns `true` when `modulus` is odd and both it and `(modulus - 1) / 2`
/// are probable primes.
pub(crate) fn is_safe_prime<R: CryptoRng + ?Sized>(modulus: &BigUint, rng: &mut R) -> bool {
    if modulus.is_even() || modulus.is_zero() {
        return false;
    }
    let order: BigUint = (modulus - 1u32) >> 1u32;
    is_probable_prime(modulus, MILLER_RABIN_ROUNDS, rng)
        && is_probable_prime(&order, MILLER_RABIN_ROUNDS, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_small_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let primes: Vec<u32> = (0..200u32)
            .filter(|n| is_probable_prime(&BigUint::from(*n), 16, &mut rng))
            .collect();
        let expected: Vec<u32> = (0..200u32)
            .filter(|n| *n >= 2 && (2..*n).all(|d| n % d != 0))
            .collect();
        assert_eq!(primes, expected);
    }

    #[test]
    fn test_known_primes_and_composites() {
        let mut rng = StdRng::seed_from_u64(2);
        // 2^61 - 1 is a Mersenne prime.
        let mersenne = (BigUint::one() << 61u32) - 1u32;
        assert!(is_probable_prime(&mersenne, 32, &mut rng));

        // Carmichael number 561 = 3 * 11 * 17 and a large semiprime.
        assert!(!is_probable_prime(&BigUint::from(561u32), 32, &mut rng));
        let semiprime = BigUint::from(1_000_003u64) * BigUint::from(998_244_353u64);
        assert!(!is_probable_prime(&semiprime, 32, &mut rng));
    }

    #[test]
    fn test_random_prime_bit_length() {
        let mut rng = StdRng::seed_from_u64(3);
        for bits in [8u64, 16, 33, 64] {
            let p = random_prime(&mut rng, bits);
            assert_eq!(p.bits(), bits);
            assert!(is_probable_prime(&p, 32, &mut rng));
        }
    }

    #[test]
    fn test_random_safe_prime() {
        let mut rng = StdRng::seed_from_u64(4);
        let (p, q) = random_safe_prime(&mut rng, 12);
        assert_eq!(p.bits(), 12);
        assert_eq!(p, &q * 2u32 + 1u32);
        assert!(is_safe_prime(&p, &mut rng));
    }

    #[test]
    fn test_is_safe_prime() {
        let mut rng = StdRng::seed_from_u64(5);
        // 2063 = 2 * 1031 + 1
        assert!(is_safe_prime(&BigUint::from(2063u32), &mut rng));
        // 2069 is prime but 1034 is not
        assert!(!is_safe_prime(&BigUint::from(2069u32), &mut rng));
        assert!(!is_safe_prime(&BigUint::from(2064u32), &mut rng));
    }
}
