use num_bigint::BigUint;
use num_traits::Zero;
use rand::CryptoRng;

/// Samples a uniform integer in `[0, 2^bits)`.
pub fn random_bits<R: CryptoRng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    if bits == 0 {
        return BigUint::zero();
    }

    let len = bits.div_ceil(8) as usize;
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);

    // Clear the bits above `bits` in the most significant byte.
    let excess = (len as u64) * 8 - bits;
    bytes[0] &= 0xffu8 >> excess;

    BigUint::from_bytes_be(&bytes)
}

/// Samples a uniform integer in `[low, high)` by rejection.
///
/// Returns `None` if the range is empty.
pub fn random_range<R: CryptoRng + ?Sized>(
    rng: &mut R,
    low: &BigUint,
    high: &BigUint,
) -> Option<BigUint> {
    if low >= high {
        return None;
    }

    let span = high - low;
    let bits = span.bits();
    loop {
        let candidate = random_bits(rng, bits);
        if candidate < span {
            return Some(low + candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_bits_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let bound = BigUint::from(1u32) << 13u32;
        for _ in 0..256 {
            assert!(random_bits(&mut rng, 13) < bound);
        }
    }

    #[test]
    fn test_random_bits_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_bits(&mut rng, 0).is_zero());
    }

    #[test]
    fn test_random_range_empty() {
        let mut rng = StdRng::seed_from_u64(11);
        let one = BigUint::from(1u32);
        assert_eq!(random_range(&mut rng, &one, &one), None);
        assert_eq!(random_range(&mut rng, &one, &BigUint::zero()), None);
    }

    #[test]
    fn test_random_range_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        let low = BigUint::from(1000u32);
        let high = BigUint::from(1003u32);
        for _ in 0..256 {
            let v = random_range(&mut rng, &low, &high).expect("non-empty range");
            assert!(v >= low && v < high);
        }
    }
}
