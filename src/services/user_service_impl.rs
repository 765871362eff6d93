//! `SeaORM` implementation of the `UserService` trait.
//!
//! Uniqueness is checked with a pre-insert lookup so both database engines
//! report duplicates the same way; the schema's unique columns remain as a
//! second line of defense.

use async_trait::async_trait;

use crate::db::Store;
use crate::models::user::{AuthenticatedUser, NewUser, UserSummary, UserUpdate};
use crate::services::user_service::{UserError, UserService};

pub struct SeaOrmUserService {
    store: Store,
}

impl SeaOrmUserService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, UserError> {
        self.store
            .authenticate_user(identifier, password)
            .await?
            .ok_or(UserError::InvalidCredentials)
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, UserError> {
        Ok(self.store.list_users().await?)
    }

    async fn create_user(&self, input: NewUser) -> Result<UserSummary, UserError> {
        if self.store.user_exists(&input.username, &input.email).await? {
            return Err(UserError::Duplicate);
        }

        Ok(self.store.insert_user(input).await?)
    }

    async fn update_user(&self, id: i32, update: UserUpdate) -> Result<UserSummary, UserError> {
        self.store
            .update_user(id, update)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    async fn delete_user(&self, id: i32) -> Result<(), UserError> {
        if self.store.delete_user(id).await? {
            Ok(())
        } else {
            Err(UserError::NotFound(id))
        }
    }
}
