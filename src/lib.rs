mod crypto;
mod envelope;
mod error;

pub use crate::envelope::Envelope;
pub use crate::error::NoteError;

use anyhow::Result;
use zeroize::Zeroizing;

/// Seal a note under a password.
///
/// Generates a fresh salt and nonce, derives the per-operation key pair,
/// encrypts the note with AES-256-GCM, and packages salt, validator, and
/// nonce-prefixed ciphertext into an [`Envelope`]. Nothing is cached between
/// calls; two seals of the same inputs produce unrelated envelopes.
pub fn encrypt_note(password: &str, secret_text: &str) -> Result<Envelope> {
    if password.is_empty() {
        return Err(NoteError::MalformedInput("password cannot be empty".into()).into());
    }

    let salt = crypto::generate_salt()?;
    let keys = crypto::derive_keys(password, &salt)?;

    let (ciphertext, nonce) = crypto::encrypt(keys.encryption(), secret_text.as_bytes())?;
    let validator = crypto::validator::compute(keys.authentication());

    Ok(Envelope::new(&salt, &validator, &nonce, &ciphertext))
}

/// Open a sealed note.
///
/// Re-derives the key pair from the candidate password and the envelope's
/// salt, then checks the password validator in constant time. Only on a match
/// is decryption attempted, so a wrong-password attempt never touches the
/// cipher. Failures surface as [`NoteError`] values inside the anyhow chain:
/// `WrongPassword` on validator mismatch, `DecryptionFailure` when the
/// validator matched but the ciphertext does not authenticate, and
/// `MalformedInput` for anything rejected before key derivation.
pub fn unlock_secure_note(
    password: &str,
    salt_hex: &str,
    message_hex: &str,
    validator_hex: &str,
) -> Result<Zeroizing<String>> {
    if password.is_empty() {
        return Err(NoteError::MalformedInput("password cannot be empty".into()).into());
    }

    let salt = envelope::decode_salt(salt_hex)?;
    let validator = envelope::decode_validator(validator_hex)?;
    let (nonce, ciphertext) = envelope::decode_message(message_hex)?;

    let keys = crypto::derive_keys(password, &salt)?;

    if !crypto::validator::verify(keys.authentication(), &validator) {
        return Err(NoteError::WrongPassword.into());
    }

    let plaintext = crypto::decrypt(keys.encryption(), &nonce, &ciphertext)
        .map_err(|_| NoteError::DecryptionFailure)?;

    // Sealed notes are always UTF-8; anything else means a protocol mismatch.
    let text =
        String::from_utf8(plaintext.to_vec()).map_err(|_| NoteError::DecryptionFailure)?;

    Ok(Zeroizing::new(text))
}

/// Open a sealed note directly from an [`Envelope`].
pub fn unlock_envelope(password: &str, envelope: &Envelope) -> Result<Zeroizing<String>> {
    unlock_secure_note(
        password,
        envelope.salt(),
        envelope.encrypted_message(),
        envelope.encrypted_password(),
    )
}
