//! Cryptographic primitives for sealing and opening notes.
//!
//! Provides key derivation, authenticated encryption, and the password
//! validator digest.

pub mod aead;
pub mod kdf;
pub mod validator;

pub use aead::{decrypt, encrypt, generate_nonce, generate_salt};
pub use kdf::{KeyPair, derive_keys};

/// Length of the key-derivation salt (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the nonce (12 bytes for AES-256-GCM).
pub const NONCE_LEN: usize = 12;
/// Length of each derived key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the GCM authentication tag (16 bytes).
pub const TAG_LEN: usize = 16;
/// Length of the password validator (32 bytes, SHA-256 output).
pub const VALIDATOR_LEN: usize = 32;

/// PBKDF2-HMAC-SHA256 iteration count for password hardening.
///
/// Protocol constant; sealing and opening must agree on it.
pub const PBKDF2_ROUNDS: u32 = 100_000;

/// HKDF info label for the encryption key.
pub const INFO_ENCRYPT: &[u8] = b"key_encrypt";
/// HKDF info label for the authentication key.
pub const INFO_AUTH: &[u8] = b"key_auth";
