/// Account service
///
/// Stateless operations over the account directory and the session pointer.
/// Every function takes the store as its first argument and owns one
/// read-modify-write cycle against it.
///
/// # Operations
///
/// - `register`: Create an account; fails on a duplicate email
/// - `login`: Verify a secret and persist the session pointer
/// - `remember_session`: Persist the session pointer for a known user
/// - `logout`: Clear the session pointer (idempotent)
/// - `current_user`: Read the session pointer without side effects
///
/// # Example
///
/// ```
/// use taskwise_core::account;
/// use taskwise_core::store::MemoryStore;
///
/// # async fn example() -> Result<(), account::AccountError> {
/// let store = MemoryStore::new();
///
/// let user = account::register(&store, "ann@example.com", "pw", "Ann").await?;
/// let same = account::login(&store, "ann@example.com", "pw").await?;
/// assert_eq!(user.id, same.id);
/// # Ok(())
/// # }
/// ```

use crate::auth::password::{self, PasswordError};
use crate::models::user::{CredentialRecord, Directory, User};
use crate::store::{keys, Store, StoreError};

/// Account error types
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Email is already registered
    #[error("An account already exists for {email}")]
    DuplicateAccount { email: String },

    /// Unknown email or wrong secret
    ///
    /// The two cases are deliberately indistinguishable.
    #[error("Invalid email or secret")]
    InvalidCredentials,

    /// Secret hashing or verification failed
    #[error("Secret hashing failed: {0}")]
    Password(#[from] PasswordError),

    /// Store operation failed
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    /// Persisted record could not be parsed
    #[error("Corrupt persisted record: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Loads the account directory, treating an unwritten key as empty
async fn load_directory(store: &dyn Store) -> Result<Directory, AccountError> {
    match store.get(keys::USER_DIRECTORY_KEY).await? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Directory::default()),
    }
}

/// Persists the account directory
async fn save_directory(store: &dyn Store, directory: &Directory) -> Result<(), AccountError> {
    let raw = serde_json::to_string(directory)?;
    store.set(keys::USER_DIRECTORY_KEY, &raw).await?;
    Ok(())
}

/// Registers a new account
///
/// Hashes the secret, inserts the credential record under the email, and
/// returns the public user shape. Does not touch the session pointer; signing
/// the fresh account in is the caller's decision.
///
/// # Errors
///
/// - `AccountError::DuplicateAccount` if the email is already registered
pub async fn register(
    store: &dyn Store,
    email: &str,
    secret: &str,
    name: &str,
) -> Result<User, AccountError> {
    let mut directory = load_directory(store).await?;

    if directory.contains(email) {
        return Err(AccountError::DuplicateAccount {
            email: email.to_string(),
        });
    }

    let password_hash = password::hash_password(secret)?;
    let record = CredentialRecord::new(email, name, password_hash);
    let user = record.to_user();

    directory.insert(record);
    save_directory(store, &directory).await?;

    tracing::info!(user_id = %user.id, "Registered account");
    Ok(user)
}

/// Logs a user in
///
/// Verifies the secret against the stored hash and persists the public user
/// shape under the session pointer key. The returned user never carries
/// secret material.
///
/// # Errors
///
/// - `AccountError::InvalidCredentials` for an unknown email or wrong secret
pub async fn login(store: &dyn Store, email: &str, secret: &str) -> Result<User, AccountError> {
    let directory = load_directory(store).await?;

    let record = directory
        .find(email)
        .ok_or(AccountError::InvalidCredentials)?;

    let valid = password::verify_password(secret, &record.password_hash)?;
    if !valid {
        return Err(AccountError::InvalidCredentials);
    }

    let user = record.to_user();
    remember_session(store, &user).await?;

    tracing::info!(user_id = %user.id, "Logged in");
    Ok(user)
}

/// Persists the session pointer for a user
///
/// `login` calls this itself; the separate entry point lets a caller sign a
/// freshly registered user in without a second credential check.
pub async fn remember_session(store: &dyn Store, user: &User) -> Result<(), AccountError> {
    let raw = serde_json::to_string(user)?;
    store.set(keys::CURRENT_USER_KEY, &raw).await?;

    tracing::debug!(user_id = %user.id, "Persisted session pointer");
    Ok(())
}

/// Logs the current user out
///
/// Removes the session pointer. Succeeds whether or not anyone was logged
/// in.
pub async fn logout(store: &dyn Store) -> Result<(), AccountError> {
    store.remove(keys::CURRENT_USER_KEY).await?;

    tracing::debug!("Cleared session pointer");
    Ok(())
}

/// Reads the persisted session pointer
///
/// Pure read: never mutates anything, returns `None` when nobody is logged
/// in.
pub async fn current_user(store: &dyn Store) -> Result<Option<User>, AccountError> {
    match store.get(keys::CURRENT_USER_KEY).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}
