/// Authentication utilities
///
/// # Modules
///
/// - `password`: Argon2id secret hashing and verification

pub mod password;
