use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::seed::SeedPhrase;

const PBKDF2_SALT: &[u8] = b"TON default seed";
const PBKDF2_ROUNDS: u32 = 100_000;

/// Derived ed25519 key material. The secret half is wiped when the pair is
/// dropped; nothing outside the explicit display/report step should copy it.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    secret: [u8; 64],
    #[zeroize(skip)]
    public: [u8; 32],
}

impl KeyPair {
    pub fn public_key(&self) -> &[u8; 32] {
        &self.public
    }

    /// Expanded 64-byte private key: ed25519 seed followed by the public key.
    pub fn secret_key(&self) -> &[u8; 64] {
        &self.secret
    }
}

/// Derives the key pair from a seed phrase using the standard TON pipeline:
/// HMAC-SHA512 over the joined phrase, PBKDF2-HMAC-SHA512 with the fixed
/// salt and 100k rounds down to a 32-byte ed25519 seed, then key expansion.
/// Deterministic; must stay bit-for-bit stable to remain compatible with the
/// rest of the ecosystem.
pub fn derive_keypair(seed: &SeedPhrase) -> KeyPair {
    let phrase = seed.joined();

    let mac = Hmac::<Sha512>::new_from_slice(phrase.as_bytes())
        .expect("HMAC accepts keys of any length");
    let entropy = mac.finalize().into_bytes();

    let mut ed25519_seed = [0u8; 32];
    pbkdf2_hmac::<Sha512>(&entropy, PBKDF2_SALT, PBKDF2_ROUNDS, &mut ed25519_seed);

    let signing_key = SigningKey::from_bytes(&ed25519_seed);
    let public = signing_key.verifying_key().to_bytes();
    let secret = signing_key.to_keypair_bytes();
    ed25519_seed.zeroize();

    KeyPair { secret, public }
}
