use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::{KEY_LEN, VALIDATOR_LEN};

/// Compute the password validator: SHA-256 over the exported authentication
/// key bytes.
///
/// The validator tests password correctness before decryption is attempted.
/// It is one-way; the authentication key cannot be recovered from it.
pub fn compute(auth_key: &[u8; KEY_LEN]) -> [u8; VALIDATOR_LEN] {
    Sha256::digest(auth_key).into()
}

/// Compare a recomputed validator against the stored one in constant time.
pub fn verify(auth_key: &[u8; KEY_LEN], expected: &[u8; VALIDATOR_LEN]) -> bool {
    compute(auth_key).ct_eq(expected).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{SALT_LEN, derive_keys};

    #[test]
    fn validator_is_deterministic() {
        let keys = derive_keys("pw", &[5u8; SALT_LEN]).unwrap();

        assert_eq!(compute(keys.authentication()), compute(keys.authentication()));
        assert!(verify(keys.authentication(), &compute(keys.authentication())));
    }

    #[test]
    fn validator_differs_for_different_passwords() {
        let salt = [5u8; SALT_LEN];
        let k1 = derive_keys("pw1", &salt).unwrap();
        let k2 = derive_keys("pw2", &salt).unwrap();

        assert_ne!(compute(k1.authentication()), compute(k2.authentication()));
        assert!(!verify(k2.authentication(), &compute(k1.authentication())));
    }

    #[test]
    fn validator_does_not_leak_key_bytes() {
        let keys = derive_keys("pw", &[8u8; SALT_LEN]).unwrap();
        let validator = compute(keys.authentication());

        assert_ne!(&validator, keys.authentication());
    }
}
