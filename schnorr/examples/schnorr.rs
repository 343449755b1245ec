//! Generate a group, sign one message plainly and blindly, and verify both.
//!
//! ```sh
//! cargo run --example schnorr -- --bits 12 --message 2132145423432
//! RUST_LOG=debug cargo run --example schnorr -- --bits 256 --text "hello schnorr"
//! ```

use clap::{Arg, Command, value_parser};
use group::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{DEFAULT_BITS, DEFAULT_MESSAGE, SchnorrScheme, encode_message};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse arguments
    let matches = Command::new("schnorr")
        .about("sign a message with plain and blind Schnorr signatures")
        .arg(
            Arg::new("bits")
                .long("bits")
                .required(false)
                .value_parser(value_parser!(u64))
                .help("Bit length of the safe-prime modulus"),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .required(false)
                .conflicts_with("text")
                .value_parser(value_parser!(BigUint))
                .help("Message to sign, as a decimal integer"),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .required(false)
                .help("Message to sign, as UTF-8 text"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .required(false)
                .value_parser(value_parser!(u64))
                .help("Seed for a reproducible run (otherwise the OS generator is used)"),
        )
        .get_matches();

    // Create logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bits = matches
        .get_one::<u64>("bits")
        .copied()
        .unwrap_or(DEFAULT_BITS);
    let message = match (
        matches.get_one::<BigUint>("message"),
        matches.get_one::<String>("text"),
    ) {
        (Some(message), _) => message.clone(),
        (None, Some(text)) => encode_message(text.as_bytes()),
        (None, None) => BigUint::from(DEFAULT_MESSAGE),
    };
    let mut rng = match matches.get_one::<u64>("seed") {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let scheme = SchnorrScheme::new(&mut rng, bits).expect("Unable to build scheme");
    let params = scheme.parameters();
    info!(
        modulus = %params.modulus(),
        order = %params.order(),
        generator = %params.generator(),
        "generated group"
    );

    let signing_key = scheme.generate_signing_key();
    let public_key = scheme.generate_public_key();
    info!(public_key = %public_key.element(), "derived keys");

    let non_blind = scheme.sign_non_blind(&mut rng, &message, &signing_key);
    let blind = scheme
        .sign_blind(&mut rng, &message, &signing_key, &public_key)
        .expect("Blind signing failed");

    println!(
        "nonBlind result: {}",
        scheme.verify(&message, &non_blind, &public_key)
    );
    println!(
        "blind result: {}",
        scheme.verify(&message, &blind, &public_key)
    );
}
