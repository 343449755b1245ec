use num_bigint::BigUint;
use num_traits::One;

use crate::GroupParameters;

impl GroupParameters {
    /// Compute `g^a * base^b mod P` with a single square-and-multiply pass
    /// over both exponents.
    pub fn double_exp(&self, a: &BigUint, b: &BigUint, base: &BigUint) -> BigUint {
        let modulus = self.modulus();
        let generator = self.generator();
        let both = (generator * base) % modulus;

        let mut result = BigUint::one();
        for i in (0..a.bits().max(b.bits())).rev() {
            result = (&result * &result) % modulus;
            match (a.bit(i), b.bit(i)) {
                (true, true) => result = (&result * &both) % modulus,
                (true, false) => result = (&result * generator) % modulus,
                (false, true) => result = (&result * base) % modulus,
                (false, false) => {}
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use num_traits::{One, Zero};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::GroupParameters;

    #[test]
    fn test_double_exp_matches_separate_exponentiations() {
        let mut rng = StdRng::seed_from_u64(42);
        let params = GroupParameters::generate(&mut rng, 64).expect("parameters");
        let base = params.random_element(&mut rng);

        for _ in 0..16 {
            let a = params.random_scalar(&mut rng);
            let b = params.random_scalar(&mut rng);
            let expected = params.mul(&params.exp_generator(&a), &params.pow(&base, &b));
            assert_eq!(params.double_exp(&a, &b, &base), expected);
        }
    }

    #[test]
    fn test_double_exp_zero_exponents() {
        let mut rng = StdRng::seed_from_u64(43);
        let params = GroupParameters::generate(&mut rng, 32).expect("parameters");
        let base = params.random_element(&mut rng);
        let zero = BigUint::zero();

        assert_eq!(params.double_exp(&zero, &zero, &base), BigUint::one());
    }
}
