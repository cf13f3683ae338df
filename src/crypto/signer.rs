// src/crypto/signer.rs

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ed25519_dalek::pkcs8::DecodePrivateKey;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use log::debug;

use crate::error::SignError;

/// Default location of the PEM-encoded private key, relative to the
/// working directory.
pub const DEFAULT_KEY_PATH: &str = "private_key.pem";

/// Holds the Ed25519 signing key for one invocation.
#[derive(Debug, Clone)]
pub struct ChallengeSigner {
    signing_key: SigningKey,
}

impl ChallengeSigner {
    /// Loads an unencrypted PKCS#8 PEM Ed25519 private key from `path`.
    ///
    /// A PEM holding any other key type (RSA, ECDSA, ...) is rejected as
    /// `SignError::KeyParse`; the signing call below is Ed25519-only.
    pub fn from_pem_file(path: &Path) -> Result<ChallengeSigner, SignError> {
        let pem = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SignError::KeyNotFound {
                path: path.display().to_string(),
            },
            _ => SignError::Unexpected(e.to_string()),
        })?;
        let signer = Self::from_pem(&pem)?;
        debug!("loaded Ed25519 signing key from {}", path.display());
        Ok(signer)
    }

    pub fn from_pem(pem: &str) -> Result<ChallengeSigner, SignError> {
        let signing_key =
            SigningKey::from_pkcs8_pem(pem).map_err(|e| SignError::KeyParse(e.to_string()))?;
        Ok(ChallengeSigner { signing_key })
    }

    /// Plain Ed25519 over the raw message bytes: no pre-hash, no context
    /// string. Deterministic for a fixed (key, message) pair.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    pub fn verify_with_key(
        message: &[u8],
        signature: &Signature,
        public_key: &VerifyingKey,
    ) -> bool {
        public_key.verify(message, signature).is_ok()
    }
}

/// Signs a base64-encoded challenge with the key at `key_path` and
/// returns the base64-encoded 64-byte signature.
///
/// Callers pass [`DEFAULT_KEY_PATH`] unless they have a reason not to.
pub fn sign_challenge(challenge_b64: &str, key_path: &Path) -> Result<String, SignError> {
    let signer = ChallengeSigner::from_pem_file(key_path)?;

    let challenge = BASE64
        .decode(challenge_b64)
        .map_err(|e| SignError::InputDecode(e.to_string()))?;
    debug!("signing {}-byte challenge", challenge.len());

    let signature = signer.sign(&challenge);
    Ok(BASE64.encode(signature.to_bytes()))
}
