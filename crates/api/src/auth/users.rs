//! Fixed demo-user directory backing `/auth/login`.
//!
//! There is no user table behind authentication; the directory is seeded at
//! startup with the platform's demo accounts. Seed passwords are hashed
//! during construction so no plaintext credential survives startup.

use serde::Serialize;

use crate::auth::password::{hash_password, verify_password};

/// A directory entry. Only [`PublicUser`] ever leaves the server.
#[derive(Debug, Clone)]
pub struct DemoUser {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    password_hash: String,
}

/// User fields embedded in the login response.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub role: String,
}

impl DemoUser {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
        }
    }
}

/// The in-memory user list checked by `/auth/login`.
pub struct DemoUserDirectory {
    users: Vec<DemoUser>,
}

/// Seed accounts: (id, email, first name, last name, role, password).
const SEED_USERS: [(&str, &str, &str, &str, &str, &str); 2] = [
    (
        "550e8400-e29b-41d4-a716-446655440001",
        "alex.chen@taskflow.dev",
        "Alex",
        "Chen",
        "admin",
        "password123",
    ),
    (
        "550e8400-e29b-41d4-a716-446655440002",
        "sarah.kim@taskflow.dev",
        "Sarah",
        "Kim",
        "user",
        "password123",
    ),
];

impl DemoUserDirectory {
    /// Build the directory, hashing each seed password.
    ///
    /// # Panics
    ///
    /// Panics if hashing fails, which only happens on a broken RNG; this
    /// runs once at startup.
    pub fn new() -> Self {
        let users = SEED_USERS
            .iter()
            .map(|(id, email, first_name, last_name, role, password)| DemoUser {
                id: id.to_string(),
                email: email.to_string(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                role: role.to_string(),
                password_hash: hash_password(password).expect("seed password hashing failed"),
            })
            .collect();
        DemoUserDirectory { users }
    }

    /// Check credentials; returns the matching user only when the password
    /// verifies. Unknown emails and wrong passwords are indistinguishable
    /// to the caller.
    pub fn verify(&self, email: &str, password: &str) -> Option<&DemoUser> {
        let user = self.users.iter().find(|u| u.email == email)?;
        match verify_password(password, &user.password_hash) {
            Ok(true) => Some(user),
            Ok(false) => None,
            Err(err) => {
                tracing::error!(error = %err, "Password verification error");
                None
            }
        }
    }
}

impl Default for DemoUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_credentials_verify() {
        let directory = DemoUserDirectory::new();
        let user = directory
            .verify("alex.chen@taskflow.dev", "password123")
            .expect("seed credentials must verify");
        assert_eq!(user.role, "admin");
        assert_eq!(user.first_name, "Alex");
    }

    #[test]
    fn wrong_password_and_unknown_email_are_rejected() {
        let directory = DemoUserDirectory::new();
        assert!(directory
            .verify("alex.chen@taskflow.dev", "wrong-password")
            .is_none());
        assert!(directory.verify("nobody@taskflow.dev", "password123").is_none());
    }

    #[test]
    fn public_projection_has_no_credential_material() {
        let directory = DemoUserDirectory::new();
        let user = directory
            .verify("sarah.kim@taskflow.dev", "password123")
            .unwrap();
        let json = serde_json::to_value(user.public()).unwrap();
        assert_eq!(json["firstName"], "Sarah");
        assert_eq!(json["role"], "user");
        assert!(json.get("password_hash").is_none());
    }
}
