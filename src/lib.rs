// src/lib.rs

pub mod crypto;
pub mod error;

pub use crypto::signer::{sign_challenge, ChallengeSigner, DEFAULT_KEY_PATH};
pub use error::SignError;
