//! Property-based tests for plain and blind Schnorr signatures.
//!
//! Covers round trips, tamper rejection on each signature field and the
//! determinism of the challenge hash.

use group::BigUint;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{SchnorrScheme, Signature, encode_message};

fn scheme(seed: u64) -> SchnorrScheme {
    let mut rng = StdRng::seed_from_u64(seed);
    SchnorrScheme::new(&mut rng, 64).expect("scheme")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Sign then verify succeeds for any message.
    #[test]
    fn non_blind_roundtrip(message in prop::collection::vec(any::<u8>(), 0..256), seed in any::<u64>()) {
        let scheme = scheme(seed % 8);
        let mut rng = StdRng::seed_from_u64(seed);
        let message = encode_message(&message);

        let sig = scheme.sign_non_blind(&mut rng, &message, &scheme.generate_signing_key());
        prop_assert!(scheme.verify(&message, &sig, &scheme.generate_public_key()));
    }

    /// Blind signing with consistent keys succeeds and the result verifies.
    #[test]
    fn blind_roundtrip(message in prop::collection::vec(any::<u8>(), 0..256), seed in any::<u64>()) {
        let scheme = scheme(seed % 8);
        let mut rng = StdRng::seed_from_u64(seed);
        let message = encode_message(&message);
        let sk = scheme.generate_signing_key();
        let pk = scheme.generate_public_key();

        let result = scheme.sign_blind(&mut rng, &message, &sk, &pk);
        prop_assert!(matches!(result, Ok(_)), "consistent keys must pass the integrity check");
        let sig = result.expect("checked above");
        prop_assert!(scheme.verify(&message, &sig, &pk));
    }

    /// Verification fails for a different message.
    #[test]
    fn wrong_message_rejected(m1 in any::<u128>(), m2 in any::<u128>(), seed in any::<u64>()) {
        prop_assume!(m1 != m2);

        let scheme = scheme(seed % 8);
        let mut rng = StdRng::seed_from_u64(seed);
        let sig = scheme.sign_non_blind(&mut rng, &BigUint::from(m1), &scheme.generate_signing_key());

        prop_assert!(!scheme.verify(&BigUint::from(m2), &sig, &scheme.generate_public_key()));
    }

    /// Changing either signature field breaks verification.
    #[test]
    fn tampered_fields_rejected(m in any::<u128>(), delta in 1u64..1_000_000, seed in any::<u64>()) {
        let scheme = scheme(seed % 8);
        let params = scheme.parameters();
        let mut rng = StdRng::seed_from_u64(seed);
        let message = BigUint::from(m);
        let pk = scheme.generate_public_key();
        let sig = scheme.sign_non_blind(&mut rng, &message, &scheme.generate_signing_key());

        let delta = BigUint::from(delta);
        let tampered_s = Signature { r: sig.r.clone(), s: (&sig.s + &delta) % params.order() };
        prop_assert!(!scheme.verify(&message, &tampered_s, &pk));

        let shifted = params.mul(&sig.r, &params.exp_generator(&delta));
        let tampered_r = Signature { r: shifted, s: sig.s.clone() };
        prop_assert!(!scheme.verify(&message, &tampered_r, &pk));
    }

    /// The challenge is a pure function of commitment and message.
    #[test]
    fn challenge_is_deterministic(m in any::<u128>(), seed in any::<u64>()) {
        let scheme = scheme(seed % 8);
        let params = scheme.parameters();
        let mut rng = StdRng::seed_from_u64(seed);
        let commitment = params.random_element(&mut rng);
        let message = BigUint::from(m);

        let c = params.hash(&commitment, &message);
        prop_assert_eq!(&c, &params.hash(&commitment, &message));
        prop_assert!(&c < params.order());
    }
}
