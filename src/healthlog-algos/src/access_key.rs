use healthlog_types::AccessKey;
use rand::{CryptoRng, Rng};

const KEY_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const GROUP_LEN: usize = 4;
const GROUP_COUNT: usize = 4;
const HASH_BYTES: usize = 32;

/// Produces shareable access keys. Persistence, uniqueness and expiry belong
/// to the caller.
pub struct AccessKeyGenerator;

impl AccessKeyGenerator {
    /// Uses the thread-local CSPRNG.
    pub fn generate() -> AccessKey {
        Self::generate_with(&mut rand::rng())
    }

    pub fn generate_with<R>(rng: &mut R) -> AccessKey
    where
        R: Rng + CryptoRng,
    {
        let display_key = (0..GROUP_COUNT)
            .map(|_| Self::random_group(rng))
            .collect::<Vec<_>>()
            .join("-");

        let mut hash = [0u8; HASH_BYTES];
        rng.fill(&mut hash);

        AccessKey {
            display_key,
            opaque_hash: hex::encode(hash),
        }
    }

    fn random_group<R>(rng: &mut R) -> String
    where
        R: Rng,
    {
        (0..GROUP_LEN)
            .map(|_| char::from(KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())]))
            .collect()
    }
}
