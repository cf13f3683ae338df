// src/crypto/mod.rs

pub mod signer;
