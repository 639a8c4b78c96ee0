//! Password hashing for customer accounts
//!
//! Passwords are only ever stored as Argon2id hashes.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Password hashing failed")]
    HashingFailed,
}

/// Hash a password using Argon2id with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, CryptoError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| CryptoError::HashingFailed)
}

#[cfg(test)]
mod tests {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    use super::*;

    fn verify(password: &str, hash: &str) -> bool {
        let parsed = PasswordHash::new(hash).unwrap();
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    #[test]
    fn test_password_hash_is_argon2id_phc_string() {
        let hash = hash_password("secure_password_123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify("secure_password_123", &hash));
        assert!(!verify("wrong_password", &hash));
    }

    #[test]
    fn test_password_hash_produces_unique_hashes() {
        let password = "same_password";
        let hash1 = hash_password(password).unwrap();
        let hash2 = hash_password(password).unwrap();

        // Different salts, same verification
        assert_ne!(hash1, hash2);
        assert!(verify(password, &hash1));
        assert!(verify(password, &hash2));
    }
}
