//! Account roster collection.
//!
//! Mock authentication: a fixed seed roster plus accounts registered during
//! this server run. Credentials are argon2-hashed at insertion; plaintext
//! passwords exist only for the duration of the request that carries them.

use std::sync::RwLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

use moma_core::{Email, EmailError, Gender, Role, User, UserId};

use super::StoreError;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// No account matches the email/password pair.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The email is already registered.
    #[error("email already in use")]
    EmailInUse,

    /// Missing or malformed registration fields.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Storage-layer fault.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password_hash: String,
}

/// The account roster.
#[derive(Debug)]
pub struct UserStore {
    inner: RwLock<Vec<Account>>,
}

impl UserStore {
    /// Build the seed roster: one admin, one regular user.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::PasswordHash`] if seed hashing fails.
    pub fn seeded() -> Result<Self, UserStoreError> {
        let store = Self {
            inner: RwLock::new(Vec::new()),
        };
        store.push_account(
            "Admin User",
            Email::parse("admin@example.com")?,
            "admin123",
            Role::Admin,
            Gender::Male,
        )?;
        store.push_account(
            "Regular User",
            Email::parse("user@example.com")?,
            "user123",
            Role::User,
            Gender::Male,
        )?;
        Ok(store)
    }

    fn push_account(
        &self,
        name: &str,
        email: Email,
        password: &str,
        role: Role,
        gender: Gender,
    ) -> Result<User, UserStoreError> {
        let password_hash = hash_password(password)?;
        let mut accounts = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let id = i32::try_from(accounts.len()).unwrap_or(i32::MAX).saturating_add(1);
        let user = User {
            id: UserId::new(id),
            email,
            name: name.to_owned(),
            role,
            gender,
        };
        accounts.push(Account {
            user: user.clone(),
            password_hash,
        });
        Ok(user)
    }

    /// Match an email/password pair against the roster.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::InvalidCredentials`] when no account
    /// matches.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, UserStoreError> {
        let accounts = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let account = accounts
            .iter()
            .find(|a| a.user.email.as_str() == email)
            .ok_or(UserStoreError::InvalidCredentials)?;
        verify_password(password, &account.password_hash)?;
        Ok(account.user.clone())
    }

    /// Register a new account with the default role.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::Validation`] for missing fields or a short
    /// password, [`UserStoreError::InvalidEmail`] for a malformed email,
    /// and [`UserStoreError::EmailInUse`] for a case-sensitive duplicate.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        gender: Gender,
    ) -> Result<User, UserStoreError> {
        if name.trim().is_empty() {
            return Err(UserStoreError::Validation("name is required".to_owned()));
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(UserStoreError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        let email = Email::parse(email)?;
        let password_hash = hash_password(password)?;

        // Uniqueness check and insert under one write lock, so two
        // concurrent registrations cannot both claim the same email.
        let mut accounts = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        if accounts.iter().any(|a| a.user.email == email) {
            return Err(UserStoreError::EmailInUse);
        }
        let id = i32::try_from(accounts.len()).unwrap_or(i32::MAX).saturating_add(1);
        let user = User {
            id: UserId::new(id),
            email,
            name: name.trim().to_owned(),
            role: Role::User,
            gender,
        };
        accounts.push(Account {
            user: user.clone(),
            password_hash,
        });
        Ok(user)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, UserStoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| UserStoreError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), UserStoreError> {
    let parsed = PasswordHash::new(hash).map_err(|_| UserStoreError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| UserStoreError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_credentials() {
        let store = UserStore::seeded().unwrap();
        let admin = store.authenticate("admin@example.com", "admin123").unwrap();
        assert_eq!(admin.role, Role::Admin);
        let user = store.authenticate("user@example.com", "user123").unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_authenticate_rejects_unknown_pair() {
        let store = UserStore::seeded().unwrap();
        assert!(matches!(
            store.authenticate("admin@example.com", "nope"),
            Err(UserStoreError::InvalidCredentials)
        ));
        assert!(matches!(
            store.authenticate("ghost@example.com", "admin123"),
            Err(UserStoreError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_register_then_authenticate() {
        let store = UserStore::seeded().unwrap();
        let user = store
            .register("John Smith", "john@example.com", "swordfish", Gender::Male)
            .unwrap();
        assert_eq!(user.id.as_i32(), 3);
        assert_eq!(user.role, Role::User);
        assert!(store.authenticate("john@example.com", "swordfish").is_ok());
    }

    #[test]
    fn test_register_duplicate_email() {
        let store = UserStore::seeded().unwrap();
        assert!(matches!(
            store.register("Dup", "admin@example.com", "longenough", Gender::Male),
            Err(UserStoreError::EmailInUse)
        ));
    }

    #[test]
    fn test_register_validation() {
        let store = UserStore::seeded().unwrap();
        assert!(matches!(
            store.register(" ", "a@b.c", "longenough", Gender::Male),
            Err(UserStoreError::Validation(_))
        ));
        assert!(matches!(
            store.register("Al", "a@b.c", "short", Gender::Male),
            Err(UserStoreError::Validation(_))
        ));
    }
}
