use log::warn;
use nanoid::nanoid;
use rand::Rng;
use sha2::{Digest, Sha256};

static ARGON2_CONFIG: argon2::Config = argon2::Config {
    variant: argon2::Variant::Argon2id,
    version: argon2::Version::Version13,
    mem_cost: 19456,
    time_cost: 2,
    lanes: 1,
    thread_mode: argon2::ThreadMode::Sequential,
    secret: &[],
    ad: &[],
    hash_length: 32,
};

fn generate_16b_salt() -> [u8; 16] {
    rand::thread_rng().gen()
}

/// Hashes a password with a fresh random salt.
/// The returned string is the PHC encoding and carries its own salt and parameters.
pub fn hash(plaintext: &str) -> Result<String, argon2::Error> {
    let salt = generate_16b_salt();
    argon2::hash_encoded(plaintext.as_bytes(), &salt, &ARGON2_CONFIG)
}

/// Constant time check of a password against an encoded hash.
/// A malformed hash never matches.
pub fn verify(plaintext: &str, hash: &str) -> bool {
    match argon2::verify_encoded(hash, plaintext.as_bytes()) {
        Ok(matches) => matches,
        Err(e) => {
            warn!("could not verify against stored password hash: {}", e);
            false
        }
    }
}

/// Opaque session identifier handed to clients.
pub fn generate_session_token() -> String {
    nanoid!(64)
}

/// A PKCE verifier and its S256 challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkcePair {
    pub verifier: String,
    pub challenge: String,
}

impl PkcePair {
    pub fn generate() -> Self {
        // nanoid's alphabet is a subset of the unreserved characters allowed in a verifier
        let verifier = nanoid!(64);
        let challenge = pkce_challenge(&verifier);

        Self {
            verifier,
            challenge,
        }
    }
}

pub fn pkce_challenge(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    base64_url::encode(&digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let first = hash("pw123").unwrap();
        let second = hash("pw123").unwrap();

        assert_ne!(first, "pw123");
        assert_ne!(first, second);
        assert!(verify("pw123", &first));
        assert!(verify("pw123", &second));
        assert!(!verify("pw1234", &first));
    }

    #[test]
    fn malformed_hash_does_not_match() {
        assert!(!verify("pw123", "pw123"));
        assert!(!verify("pw123", ""));
    }

    #[test]
    fn pkce_challenge_matches_rfc_example() {
        // RFC 7636 appendix B
        let challenge = pkce_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
        assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
    }

    #[test]
    fn pkce_pair_is_fresh_each_time() {
        let a = PkcePair::generate();
        let b = PkcePair::generate();

        assert_ne!(a.verifier, b.verifier);
        assert_eq!(a.challenge, pkce_challenge(&a.verifier));
        assert!(a.verifier.len() >= 43 && a.verifier.len() <= 128);
    }

    #[test]
    fn session_tokens_do_not_repeat() {
        let a = generate_session_token();
        let b = generate_session_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }
}
