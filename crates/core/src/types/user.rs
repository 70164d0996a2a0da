//! User identity domain type.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;
use super::status::{Gender, Role};

/// An account identity.
///
/// Never carries credential material: the password supplied at login or
/// registration is verified against the roster's stored hash and discarded
/// before a `User` is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account ID.
    pub id: UserId,
    /// Email address, unique within the roster.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: Role,
    /// Gender as collected by the registration form.
    pub gender: Gender,
}

impl User {
    /// Whether this identity has admin privileges.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        let user = User {
            id: UserId::new(1),
            email: Email::parse("admin@example.com").unwrap(),
            name: "Admin User".to_string(),
            role: Role::Admin,
            gender: Gender::Male,
        };
        assert!(user.is_admin());

        let user = User { role: Role::User, ..user };
        assert!(!user.is_admin());
    }

    #[test]
    fn test_serde_has_no_password_field() {
        let user = User {
            id: UserId::new(2),
            email: Email::parse("user@example.com").unwrap(),
            name: "Regular User".to_string(),
            role: Role::User,
            gender: Gender::Female,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "user");
    }
}
