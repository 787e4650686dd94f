/// Secret hashing module using Argon2id
///
/// Account secrets are stored as salted one-way hashes, never as plaintext.
/// The directory keeps the PHC string produced here; login re-derives the
/// hash from the presented secret and compares in constant time.
///
/// # Parameters
///
/// - **Algorithm**: Argon2id
/// - **Memory**: 64 MB (65536 KB)
/// - **Iterations**: 3 passes
/// - **Parallelism**: 4 lanes
/// - **Output**: 32-byte hash
///
/// # Example
///
/// ```
/// use taskwise_core::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("pw")?;
///
/// assert!(verify_password("pw", &hash)?);
/// assert!(!verify_password("guess", &hash)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder, Version,
};

/// Error type for secret hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash secret
    #[error("Failed to hash secret: {0}")]
    HashError(String),

    /// Failed to verify secret
    #[error("Failed to verify secret: {0}")]
    VerifyError(String),

    /// Invalid stored hash format
    #[error("Invalid stored hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a secret using Argon2id with a fresh random salt
///
/// Returns the PHC string form (algorithm, parameters, salt, and hash in one
/// self-describing value), which is what the directory stores.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails
pub fn hash_password(secret: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    // m_cost is in KB: 65536 KB = 64 MB
    let params = ParamsBuilder::new()
        .m_cost(65536)
        .t_cost(3)
        .p_cost(4)
        .output_len(32)
        .build()
        .map_err(|e| PasswordError::HashError(format!("Invalid parameters: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

    let hash = argon2
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Verifies a secret against a stored PHC hash
///
/// A wrong secret is `Ok(false)`, not an error; only a hash that cannot be
/// parsed or compared produces an `Err`. Comparison is constant-time.
pub fn verify_password(secret: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Failed to parse hash: {}", e)))?;

    // Parameters come from the hash itself
    let argon2 = Argon2::default();

    match argon2.verify_password(secret.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(format!(
            "Verification failed: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_format() {
        let hash = hash_password("test_secret_123").expect("Hash should succeed");

        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("v=19"));
        assert!(hash.contains("m=65536"));
        assert!(hash.contains("t=3"));
        assert!(hash.contains("p=4"));
    }

    #[test]
    fn test_hash_password_produces_different_salts() {
        let hash1 = hash_password("same_secret").expect("Hash 1 should succeed");
        let hash2 = hash_password("same_secret").expect("Hash 2 should succeed");

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password_correct() {
        let hash = hash_password("correct_secret").expect("Hash should succeed");

        let result = verify_password("correct_secret", &hash).expect("Verify should succeed");
        assert!(result, "Correct secret should verify");
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hash = hash_password("correct_secret").expect("Hash should succeed");

        let result = verify_password("wrong_secret", &hash).expect("Verify should succeed");
        assert!(!result, "Wrong secret should not verify");
    }

    #[test]
    fn test_verify_password_empty() {
        let hash = hash_password("secret").expect("Hash should succeed");

        let result = verify_password("", &hash).expect("Verify should succeed");
        assert!(!result, "Empty secret should not verify");
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        let result = verify_password("secret", "not_a_phc_string");
        assert!(result.is_err(), "Invalid hash should return error");
    }

    #[test]
    fn test_verify_password_malformed_hash() {
        let result = verify_password("secret", "$argon2id$broken");
        assert!(result.is_err(), "Malformed hash should return error");
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let secrets = vec![
            "pw",
            "with spaces",
            "with-special-chars!@#$%",
            "unicode-密码-パスワード",
        ];

        for secret in secrets {
            let hash = hash_password(secret).expect("Hash should succeed");
            let verified = verify_password(secret, &hash).expect("Verify should succeed");
            assert!(verified, "Secret '{}' should verify", secret);
        }
    }
}
