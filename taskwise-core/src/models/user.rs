/// User model and credential records
///
/// This module provides the public user shape, the internal credential
/// record, and the account directory that maps each email to exactly one
/// record.
///
/// # Persisted shape
///
/// The directory is stored as a single JSON object keyed by email:
///
/// ```json
/// {
///     "ann@example.com": {
///         "id": "0a4f...",
///         "email": "ann@example.com",
///         "name": "Ann",
///         "passwordHash": "$argon2id$v=19$..."
///     }
/// }
/// ```
///
/// The session pointer stores the public shape only, `{id, email, name}`.
/// Password hashes never leave this module's record type.
///
/// # Example
///
/// ```
/// use taskwise_core::models::user::{CredentialRecord, Directory};
///
/// let mut directory = Directory::default();
/// let record = CredentialRecord::new("ann@example.com", "Ann", "$argon2id$...");
/// directory.insert(record);
///
/// assert!(directory.contains("ann@example.com"));
/// assert!(!directory.contains("bob@example.com"));
/// ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Public user shape
///
/// This is what login returns, what the session pointer stores, and what the
/// controller hands to the rendering layer. It never carries secret material
/// and is immutable after registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Email address, the account's unique key
    pub email: String,

    /// Display name
    pub name: String,
}

/// Internal credential record stored in the account directory
///
/// Holds the public user fields plus the Argon2id password hash. Only the
/// account service reads or writes records; everything outward-facing gets
/// the stripped [`User`] via [`CredentialRecord::to_user`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Email address, matching this record's directory key
    pub email: String,

    /// Display name
    pub name: String,

    /// Argon2id password hash in PHC string format
    ///
    /// Never store plaintext secrets.
    pub password_hash: String,
}

impl CredentialRecord {
    /// Creates a record with a fresh user ID
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        CredentialRecord {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Returns the public user shape, stripping the password hash
    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Account directory mapping each email to exactly one credential record
///
/// Serialized as a single JSON object under the directory store key. Email
/// matching is exact; no normalization is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    entries: HashMap<String, CredentialRecord>,
}

impl Directory {
    /// Looks up the record registered under an email
    pub fn find(&self, email: &str) -> Option<&CredentialRecord> {
        self.entries.get(email)
    }

    /// Checks whether an email is already registered
    pub fn contains(&self, email: &str) -> bool {
        self.entries.contains_key(email)
    }

    /// Inserts a record under its own email, replacing any previous record
    pub fn insert(&mut self, record: CredentialRecord) {
        self.entries.insert(record.email.clone(), record);
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no account has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
