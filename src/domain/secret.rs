//! Manager password generation.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Literal manager password that requests a generated one.
pub const GENERATE_SENTINEL: &str = "generate";

/// Shortest generated secret.
pub const MIN_GENERATED_LENGTH: usize = 8;
/// Longest generated secret.
pub const MAX_GENERATED_LENGTH: usize = 15;

/// Generate an alphanumeric secret seeded from the current time.
pub fn generate_secret() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    generate_secret_with(&mut ChaCha20Rng::seed_from_u64(nanos as u64))
}

/// Generate a secret from the given random source.
pub fn generate_secret_with<R: Rng>(rng: &mut R) -> String {
    loop {
        let length = rng.gen_range(MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH);
        let secret: String =
            (&mut *rng).sample_iter(&Alphanumeric).take(length).map(char::from).collect();
        if secret != GENERATE_SENTINEL {
            return secret;
        }
    }
}
