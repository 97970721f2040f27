//! In-memory user directory and mock login.
//!
//! The directory is a hardcoded stand-in for a real identity provider.
//! Passwords here are demo data; nothing is hashed or persisted.

use crate::{TrackerError, TrackerResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Staff role, controls nothing yet beyond display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Role {
    Physician,
    Nurse,
    Clerk,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Physician => "Physician",
            Role::Nurse => "Nurse",
            Role::Clerk => "Clerk",
        }
    }
}

/// A directory entry. The password stays private to this module.
#[derive(Clone, Debug)]
pub struct User {
    pub username: String,
    pub display_name: String,
    pub role: Role,
    password: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            role,
            password: password.into(),
        }
    }
}

/// An authenticated session.
#[derive(Clone, Debug, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub role: Role,
    pub started_at: DateTime<Utc>,
}

/// The in-memory user list backing the login screen.
#[derive(Clone, Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Authenticate a username/password pair.
    ///
    /// Usernames match case-insensitively; passwords match exactly. The
    /// failure is uniform for unknown users and wrong passwords, so the
    /// error does not leak which usernames exist.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::AuthenticationFailed`] when the pair does
    /// not match a directory entry.
    pub fn authenticate(&self, username: &str, password: &str) -> TrackerResult<Session> {
        let found = self
            .users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username.trim()));

        match found {
            Some(user) if user.password == password => {
                let session = Session {
                    id: Uuid::new_v4(),
                    username: user.username.clone(),
                    display_name: user.display_name.clone(),
                    role: user.role,
                    started_at: Utc::now(),
                };
                tracing::info!(username = %user.username, "session started");
                Ok(session)
            }
            _ => {
                tracing::warn!(username = %username.trim(), "failed login attempt");
                Err(TrackerError::AuthenticationFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> UserDirectory {
        UserDirectory::new(vec![
            User::new("aokafor", "Dr. A. Okafor", Role::Physician, "demo1234"),
            User::new("mreyes", "M. Reyes, RN", Role::Nurse, "demo5678"),
        ])
    }

    #[test]
    fn authenticates_known_user() {
        let session = directory()
            .authenticate("aokafor", "demo1234")
            .expect("valid credentials");
        assert_eq!(session.display_name, "Dr. A. Okafor");
        assert_eq!(session.role, Role::Physician);
    }

    #[test]
    fn username_match_is_case_insensitive() {
        let session = directory()
            .authenticate("  AOkafor ", "demo1234")
            .expect("valid credentials");
        assert_eq!(session.username, "aokafor");
    }

    #[test]
    fn wrong_password_and_unknown_user_fail_identically() {
        let directory = directory();
        let wrong = directory
            .authenticate("aokafor", "nope")
            .expect_err("wrong password");
        let unknown = directory
            .authenticate("nobody", "demo1234")
            .expect_err("unknown user");
        assert!(matches!(wrong, TrackerError::AuthenticationFailed));
        assert!(matches!(unknown, TrackerError::AuthenticationFailed));
    }

    #[test]
    fn password_match_is_exact() {
        let err = directory()
            .authenticate("mreyes", "DEMO5678")
            .expect_err("case-changed password");
        assert!(matches!(err, TrackerError::AuthenticationFailed));
    }
}
