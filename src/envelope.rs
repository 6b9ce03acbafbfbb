//! The envelope record produced by sealing a note.
//!
//! Field layout (byte lengths before hex encoding):
//! ```text
//! salt (16) | encrypted_password (32) | encrypted_message (12 + N + 16)
//! ```
//! `encrypted_password` is the validator digest, `encrypted_message` is
//! nonce ‖ ciphertext-with-tag. All fields travel as hex text; the envelope
//! is created once at seal time and never mutated.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::crypto::{NONCE_LEN, SALT_LEN, TAG_LEN, VALIDATOR_LEN};
use crate::error::NoteError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    salt: String,
    encrypted_password: String,
    encrypted_message: String,
}

impl Envelope {
    pub(crate) fn new(
        salt: &[u8; SALT_LEN],
        validator: &[u8; VALIDATOR_LEN],
        nonce: &[u8; NONCE_LEN],
        ciphertext: &[u8],
    ) -> Self {
        let mut message = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        message.extend_from_slice(nonce);
        message.extend_from_slice(ciphertext);

        Self {
            salt: hex::encode(salt),
            encrypted_password: hex::encode(validator),
            encrypted_message: hex::encode(message),
        }
    }

    /// Hex-encoded key-derivation salt.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Hex-encoded password validator.
    pub fn encrypted_password(&self) -> &str {
        &self.encrypted_password
    }

    /// Hex-encoded nonce-prefixed ciphertext.
    pub fn encrypted_message(&self) -> &str {
        &self.encrypted_message
    }
}

/// Decode and validate the salt field.
pub(crate) fn decode_salt(salt_hex: &str) -> Result<[u8; SALT_LEN]> {
    let bytes = hex::decode(salt_hex)
        .map_err(|_| NoteError::MalformedInput("salt is not valid hex".into()))?;

    bytes
        .as_slice()
        .try_into()
        .map_err(|_| NoteError::MalformedInput(format!("salt must be {SALT_LEN} bytes")).into())
}

/// Decode and validate the validator field.
pub(crate) fn decode_validator(validator_hex: &str) -> Result<[u8; VALIDATOR_LEN]> {
    let bytes = hex::decode(validator_hex)
        .map_err(|_| NoteError::MalformedInput("validator is not valid hex".into()))?;

    bytes.as_slice().try_into().map_err(|_| {
        NoteError::MalformedInput(format!("validator must be {VALIDATOR_LEN} bytes")).into()
    })
}

/// Decode the message body and split off the leading nonce.
///
/// Rejects bodies too short to hold a nonce and a GCM tag before any
/// cryptographic work happens.
pub(crate) fn decode_message(message_hex: &str) -> Result<([u8; NONCE_LEN], Vec<u8>)> {
    let bytes = hex::decode(message_hex)
        .map_err(|_| NoteError::MalformedInput("message is not valid hex".into()))?;

    if bytes.len() < NONCE_LEN + TAG_LEN {
        return Err(NoteError::MalformedInput("message body is truncated".into()).into());
    }

    let (nonce, ciphertext) = bytes.split_at(NONCE_LEN);
    let nonce: [u8; NONCE_LEN] = nonce.try_into()?;

    Ok((nonce, ciphertext.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_encodes_all_fields_as_hex() {
        let env = Envelope::new(&[1u8; SALT_LEN], &[2u8; VALIDATOR_LEN], &[3u8; NONCE_LEN], &[4u8; 20]);

        assert_eq!(env.salt().len(), SALT_LEN * 2);
        assert_eq!(env.encrypted_password().len(), VALIDATOR_LEN * 2);
        assert_eq!(env.encrypted_message().len(), (NONCE_LEN + 20) * 2);
        assert!(env.salt().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn envelope_serde_roundtrip() {
        let env = Envelope::new(&[1u8; SALT_LEN], &[2u8; VALIDATOR_LEN], &[3u8; NONCE_LEN], &[4u8; 20]);

        let json = serde_json::to_string(&env).unwrap();
        let parsed: Envelope = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.salt(), env.salt());
        assert_eq!(parsed.encrypted_password(), env.encrypted_password());
        assert_eq!(parsed.encrypted_message(), env.encrypted_message());
    }

    #[test]
    fn message_splits_into_nonce_and_ciphertext() {
        let env = Envelope::new(&[1u8; SALT_LEN], &[2u8; VALIDATOR_LEN], &[3u8; NONCE_LEN], &[4u8; TAG_LEN]);

        let (nonce, ciphertext) = decode_message(env.encrypted_message()).unwrap();
        assert_eq!(nonce, [3u8; NONCE_LEN]);
        assert_eq!(ciphertext, vec![4u8; TAG_LEN]);
    }

    #[test]
    fn invalid_hex_fails() {
        assert!(decode_salt("not-hex").is_err());
        assert!(decode_validator("zz").is_err());
        assert!(decode_message("0x??").is_err());
    }

    #[test]
    fn wrong_field_length_fails() {
        assert!(decode_salt(&hex::encode([0u8; 8])).is_err());
        assert!(decode_validator(&hex::encode([0u8; 16])).is_err());
    }

    #[test]
    fn truncated_message_fails() {
        // one byte short of nonce + tag
        let short = hex::encode(vec![0u8; NONCE_LEN + TAG_LEN - 1]);
        assert!(decode_message(&short).is_err());
    }
}
