//! Session State Manager.
//!
//! Owns the current authenticated identity and the mock account roster.
//! Login and register are synchronous validations over the in-memory
//! roster; the adopted identity is persisted as a signed envelope through
//! the [`IdentityStore`] collaborator and restored (after signature
//! verification) on the next session start.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use moma_core::{Email, EmailError, Gender, Role, User, UserId};

use crate::envelope;
use crate::storage::IdentityStore;

/// Minimum password length accepted by the registration form.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// No roster account matches the email/password pair.
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
}

/// One roster entry: a sanitized identity plus its credential hash.
#[derive(Debug, Clone)]
struct RosterAccount {
    user: User,
    password_hash: String,
}

/// The fixed in-memory list of known accounts.
///
/// Seeded with one admin and one regular user. Registered accounts are
/// appended for the lifetime of the session; nothing is written to a
/// durable user store.
#[derive(Debug, Clone)]
pub struct Roster {
    accounts: Vec<RosterAccount>,
}

impl Roster {
    /// Build the seed roster (`admin@example.com` / `user@example.com`).
    ///
    /// Seed passwords are hashed at construction; plaintext never lives
    /// beyond this call.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PasswordHash`] if hashing fails.
    pub fn seeded() -> Result<Self, AuthError> {
        let mut roster = Self {
            accounts: Vec::new(),
        };
        roster.push_account(
            "Admin User",
            Email::parse("admin@example.com")?,
            "admin123",
            Role::Admin,
            Gender::Male,
        )?;
        roster.push_account(
            "Regular User",
            Email::parse("user@example.com")?,
            "user123",
            Role::User,
            Gender::Male,
        )?;
        Ok(roster)
    }

    /// Number of known accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the roster has no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn push_account(
        &mut self,
        name: &str,
        email: Email,
        password: &str,
        role: Role,
        gender: Gender,
    ) -> Result<User, AuthError> {
        let id = i32::try_from(self.accounts.len())
            .unwrap_or(i32::MAX)
            .saturating_add(1);
        let password_hash = hash_password(password)?;
        let user = User {
            id: UserId::new(id),
            email,
            name: name.to_owned(),
            role,
            gender,
        };
        self.accounts.push(RosterAccount {
            user: user.clone(),
            password_hash,
        });
        Ok(user)
    }

    /// Match an email/password pair against the roster.
    fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.user.email.as_str() == email)
            .ok_or(AuthError::InvalidCredentials)?;
        verify_password(password, &account.password_hash)?;
        Ok(account.user.clone())
    }

    /// Append a new account with the default role.
    ///
    /// Uniqueness is a case-sensitive exact match against current roster
    /// emails; nothing is revalidated against durable storage.
    fn register(
        &mut self,
        name: &str,
        email: Email,
        password: &str,
        gender: Gender,
    ) -> Result<User, AuthError> {
        if self.accounts.iter().any(|a| a.user.email == email) {
            return Err(AuthError::EmailInUse);
        }
        self.push_account(name, email, password, Role::User, gender)
    }
}

/// Session State Manager: the current identity and its lifecycle.
#[derive(Debug)]
pub struct SessionManager<S: IdentityStore> {
    roster: Roster,
    store: S,
    signing_key: SecretString,
    current: Option<User>,
}

impl<S: IdentityStore> SessionManager<S> {
    /// Create a manager over the seed roster.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PasswordHash`] if seeding the roster fails.
    pub fn new(store: S, signing_key: SecretString) -> Result<Self, AuthError> {
        Ok(Self {
            roster: Roster::seeded()?,
            store,
            signing_key,
            current: None,
        })
    }

    /// Adopt a persisted identity, if a valid signed envelope is present.
    ///
    /// The envelope's HMAC tag is verified before the identity is trusted;
    /// a missing, malformed, or tampered envelope leaves the session logged
    /// out. Credentials are not re-checked against the roster.
    pub fn restore_on_start(&mut self) {
        let raw = match self.store.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("failed to read persisted identity: {e}");
                return;
            }
        };
        match envelope::open(&raw, self.signing_key.expose_secret().as_bytes()) {
            Ok(user) => self.current = Some(user),
            Err(e) => {
                tracing::warn!("discarding persisted identity: {e}");
            }
        }
    }

    /// Authenticate against the roster and adopt the identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when no account matches;
    /// the current identity is left unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.roster.authenticate(email, password)?;
        self.adopt(user.clone());
        Ok(user)
    }

    /// Register a new account and adopt it as the current identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] for missing fields or a short
    /// password, [`AuthError::InvalidEmail`] for a malformed email, and
    /// [`AuthError::EmailInUse`] for a duplicate; the current identity is
    /// left unchanged on every failure.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        gender: Gender,
    ) -> Result<User, AuthError> {
        if name.trim().is_empty() {
            return Err(AuthError::Validation("name is required".to_owned()));
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        let email = Email::parse(email)?;
        let user = self.roster.register(name.trim(), email, password, gender)?;
        self.adopt(user.clone());
        Ok(user)
    }

    /// Clear the current identity and its persisted envelope.
    pub fn logout(&mut self) {
        self.current = None;
        if let Err(e) = self.store.clear() {
            tracing::warn!("failed to clear persisted identity: {e}");
        }
    }

    /// The current identity, if any.
    #[must_use]
    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Whether an identity is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the current identity has the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(User::is_admin)
    }

    /// Test-only peek at the backing store.
    #[cfg(test)]
    pub(crate) const fn store(&self) -> &S {
        &self.store
    }

    /// Set the identity and persist its signed envelope.
    ///
    /// Persistence failures are logged, not surfaced: the in-memory session
    /// is authoritative and the envelope only shortens the next start.
    fn adopt(&mut self, user: User) {
        match envelope::seal(&user, self.signing_key.expose_secret().as_bytes()) {
            Ok(sealed) => {
                if let Err(e) = self.store.save(&sealed) {
                    tracing::warn!("failed to persist identity: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to seal identity: {e}"),
        }
        self.current = Some(user);
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}
