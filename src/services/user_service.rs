//! Backend-agnostic user management and authentication.
//!
//! Credentials are compared in plaintext, a deliberate simplification
//! carried by both backends; see DESIGN.md.

use thiserror::Error;

use crate::models::user::{AuthenticatedUser, NewUser, UserSummary, UserUpdate};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User {0} not found")]
    NotFound(i32),

    #[error("Username or email already exists")]
    Duplicate,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Matches the identifier against username OR email, paired with an
    /// exact password match.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::InvalidCredentials`] when no user matches.
    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, UserError>;

    /// Returns every user, most recent first, passwords excluded.
    async fn list_users(&self) -> Result<Vec<UserSummary>, UserError>;

    /// # Errors
    ///
    /// Returns [`UserError::Duplicate`] when the username or email is taken.
    async fn create_user(&self, input: NewUser) -> Result<UserSummary, UserError>;

    /// Merges the provided fields into an existing user.
    async fn update_user(&self, id: i32, update: UserUpdate) -> Result<UserSummary, UserError>;

    async fn delete_user(&self, id: i32) -> Result<(), UserError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_display() {
        assert_eq!(
            UserError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
        assert_eq!(
            UserError::Duplicate.to_string(),
            "Username or email already exists"
        );
        assert_eq!(UserError::NotFound(7).to_string(), "User 7 not found");
    }
}
