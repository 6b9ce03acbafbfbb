use anyhow::{Result, anyhow};
use hkdf::Hkdf;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use super::{INFO_AUTH, INFO_ENCRYPT, KEY_LEN, PBKDF2_ROUNDS, SALT_LEN};

/// The two purpose-bound keys derived from one password.
///
/// `encryption` drives the AES-256-GCM cipher; `authentication` is only ever
/// exported and digested to form the password validator, never used as a MAC
/// key directly. Both are zeroized on drop.
pub struct KeyPair {
    encryption: [u8; KEY_LEN],
    authentication: [u8; KEY_LEN],
}

impl KeyPair {
    pub fn encryption(&self) -> &[u8; KEY_LEN] {
        &self.encryption
    }

    pub fn authentication(&self) -> &[u8; KEY_LEN] {
        &self.authentication
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.encryption.zeroize();
        self.authentication.zeroize();
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("encryption", &"[REDACTED]")
            .field("authentication", &"[REDACTED]")
            .finish()
    }
}

/// Derive the encryption/authentication key pair from a password and salt.
///
/// Two stages: PBKDF2-HMAC-SHA256 with [`PBKDF2_ROUNDS`] iterations hardens
/// the password into a 256-bit master secret, then HKDF-SHA256 (empty salt)
/// expands it under the `key_encrypt` and `key_auth` info labels. The master
/// secret never leaves this function.
///
/// Deterministic: the same (password, salt) always yields the same pair.
pub fn derive_keys(password: &str, salt: &[u8; SALT_LEN]) -> Result<KeyPair> {
    let mut master = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ROUNDS, &mut *master);

    let hk = Hkdf::<Sha256>::new(None, &*master);

    let mut encryption = [0u8; KEY_LEN];
    hk.expand(INFO_ENCRYPT, &mut encryption)
        .map_err(|_| anyhow!("HKDF expansion failed for encryption key"))?;

    let mut authentication = [0u8; KEY_LEN];
    hk.expand(INFO_AUTH, &mut authentication)
        .map_err(|_| anyhow!("HKDF expansion failed for authentication key"))?;

    Ok(KeyPair {
        encryption,
        authentication,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kdf_is_deterministic() {
        let salt = [42u8; SALT_LEN];

        let k1 = derive_keys("password", &salt).unwrap();
        let k2 = derive_keys("password", &salt).unwrap();

        assert_eq!(k1.encryption(), k2.encryption());
        assert_eq!(k1.authentication(), k2.authentication());
    }

    #[test]
    fn derived_keys_are_separated() {
        let salt = [7u8; SALT_LEN];
        let keys = derive_keys("pw", &salt).unwrap();

        assert_ne!(keys.encryption(), keys.authentication());
    }

    #[test]
    fn salt_affects_both_keys() {
        let k1 = derive_keys("pw", &[1u8; SALT_LEN]).unwrap();
        let k2 = derive_keys("pw", &[2u8; SALT_LEN]).unwrap();

        assert_ne!(k1.encryption(), k2.encryption());
        assert_ne!(k1.authentication(), k2.authentication());
    }

    #[test]
    fn password_affects_both_keys() {
        let salt = [3u8; SALT_LEN];

        let k1 = derive_keys("pw1", &salt).unwrap();
        let k2 = derive_keys("pw2", &salt).unwrap();

        assert_ne!(k1.encryption(), k2.encryption());
        assert_ne!(k1.authentication(), k2.authentication());
    }

    #[test]
    fn debug_redacts_key_material() {
        let keys = derive_keys("pw", &[0u8; SALT_LEN]).unwrap();
        let dbg = format!("{keys:?}");

        assert!(dbg.contains("REDACTED"));
        assert!(!dbg.contains(&hex::encode(keys.encryption())));
    }
}
