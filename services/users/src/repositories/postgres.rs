//! PostgreSQL user repository

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

use super::UserRepository;
use crate::models::User;

/// User repository backed by PostgreSQL
///
/// Lookups go through the `live_users` view, which hides soft-deleted rows.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> DatabaseResult<()> {
        info!("Running database migrations");

        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>> {
        info!("Finding user by ID: {}", id);

        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, password, email, deleted
            FROM live_users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    async fn insert(&self, user: User) -> DatabaseResult<User> {
        info!("Creating new user: {}", user.name());

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, password, email, deleted)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, password, email, deleted
            "#,
        )
        .bind(user.name())
        .bind(user.password())
        .bind(user.email())
        .bind(user.is_deleted())
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    async fn save(&self, user: User) -> DatabaseResult<Option<User>> {
        let Some(id) = user.id() else {
            return Ok(None);
        };

        info!("Saving user: {}", id);

        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1, password = $2, email = $3, deleted = $4
            WHERE id = $5 AND deleted = FALSE
            RETURNING id, name, password, email, deleted
            "#,
        )
        .bind(user.name())
        .bind(user.password())
        .bind(user.email())
        .bind(user.is_deleted())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }
}
