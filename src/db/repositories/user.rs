use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{prelude::*, users};
use crate::models::user::{
    AuthenticatedUser, DEFAULT_USER_ROLE, DEFAULT_USER_STATUS, NewUser, UserSummary, UserUpdate,
    date_only,
};

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_summary(model: users::Model) -> UserSummary {
        UserSummary {
            id: model.id,
            username: model.username,
            email: model.email,
            name: model.name,
            phone: model.phone.unwrap_or_default(),
            role: model.role,
            status: model.status,
            registered_date: date_only(&model.created_at),
            last_login: model
                .last_login
                .map_or_else(|| "-".to_string(), |t| date_only(&t)),
        }
    }

    /// Matches by username OR email, paired with an exact password match.
    /// Stamps `last_login` on success.
    pub async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Option<AuthenticatedUser>> {
        let user = Users::find()
            .filter(
                Condition::all()
                    .add(
                        Condition::any()
                            .add(users::Column::Username.eq(identifier))
                            .add(users::Column::Email.eq(identifier)),
                    )
                    .add(users::Column::Password.eq(password)),
            )
            .one(&self.conn)
            .await
            .context("Failed to query user for authentication")?;

        let Some(user) = user else {
            return Ok(None);
        };

        let authenticated = AuthenticatedUser {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            status: user.status.clone(),
        };

        let mut active: users::ActiveModel = user.into();
        active.last_login = Set(Some(chrono::Utc::now().to_rfc3339()));
        active
            .update(&self.conn)
            .await
            .context("Failed to update last login")?;

        Ok(Some(authenticated))
    }

    /// Most recent first.
    pub async fn list(&self) -> Result<Vec<UserSummary>> {
        let rows = Users::find()
            .order_by_desc(users::Column::CreatedAt)
            .order_by_desc(users::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list users")?;

        Ok(rows.into_iter().map(Self::map_summary).collect())
    }

    /// True when any user already holds the username or the email.
    pub async fn exists(&self, username: &str, email: &str) -> Result<bool> {
        let existing = Users::find()
            .filter(
                Condition::any()
                    .add(users::Column::Username.eq(username))
                    .add(users::Column::Email.eq(email)),
            )
            .one(&self.conn)
            .await
            .context("Failed to check user uniqueness")?;

        Ok(existing.is_some())
    }

    pub async fn insert(&self, input: NewUser) -> Result<UserSummary> {
        let active = users::ActiveModel {
            username: Set(input.username),
            email: Set(input.email),
            password: Set(input.password),
            name: Set(input.name),
            phone: Set(input.phone),
            role: Set(input.role.unwrap_or_else(|| DEFAULT_USER_ROLE.to_string())),
            status: Set(input
                .status
                .unwrap_or_else(|| DEFAULT_USER_STATUS.to_string())),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert user")?;

        Ok(Self::map_summary(model))
    }

    /// Merges the provided fields; absent fields stay unchanged.
    pub async fn update(&self, id: i32, update: UserUpdate) -> Result<Option<UserSummary>> {
        let user = Users::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user for update")?;

        let Some(user) = user else {
            return Ok(None);
        };

        let mut active: users::ActiveModel = user.into();
        if let Some(username) = update.username {
            active.username = Set(username);
        }
        if let Some(email) = update.email {
            active.email = Set(email);
        }
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(phone) = update.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(role) = update.role {
            active.role = Set(role);
        }
        if let Some(status) = update.status {
            active.status = Set(status);
        }

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update user")?;

        Ok(Some(Self::map_summary(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete user")?;

        Ok(result.rows_affected > 0)
    }
}
