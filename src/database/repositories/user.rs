//! User repository implementation

use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::models::user::{CreateUserRequest, User};
use crate::services::user_store::{FirstContact, UserStore};
use crate::utils::errors::{UserStoreError, UserStoreResult};
use crate::utils::logging::log_database_operation;

#[derive(Clone, Debug)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, sqlx::Error> {
        let started = Instant::now();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_id, "group", platform, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, "group", platform, created_at
            "#,
        )
        .bind(request.user_id)
        .bind(request.group)
        .bind(request.platform.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        log_database_operation("insert", "users", elapsed_ms(started), user.is_ok());
        user
    }

    /// Find user by id
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT user_id, "group", platform, created_at FROM users WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Insert the user unless one with the same id exists.
    ///
    /// Concurrent callers race on the primary key; exactly one sees `Created`.
    pub async fn insert_if_absent(&self, request: CreateUserRequest) -> Result<FirstContact, sqlx::Error> {
        let started = Instant::now();
        let user_id = request.user_id.clone();

        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_id, "group", platform, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO NOTHING
            RETURNING user_id, "group", platform, created_at
            "#,
        )
        .bind(request.user_id)
        .bind(request.group)
        .bind(request.platform.as_str())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await;

        log_database_operation("upsert", "users", elapsed_ms(started), inserted.is_ok());

        match inserted? {
            Some(user) => Ok(FirstContact::Created(user)),
            None => {
                let existing = self
                    .find_by_user_id(&user_id)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;
                Ok(FirstContact::Returning(existing))
            }
        }
    }

    /// Count total users
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl UserStore for UserRepository {
    async fn get(&self, user_id: &str) -> UserStoreResult<Option<User>> {
        Ok(self.find_by_user_id(user_id).await?)
    }

    async fn create(&self, request: CreateUserRequest) -> UserStoreResult<User> {
        Ok(UserRepository::create(self, request).await?)
    }

    async fn get_or_create(&self, request: CreateUserRequest) -> UserStoreResult<FirstContact> {
        Ok(self.insert_if_absent(request).await?)
    }

    async fn health_check(&self) -> UserStoreResult<()> {
        crate::database::connection::health_check(&self.pool)
            .await
            .map_err(|e| UserStoreError::Unavailable(e.to_string()))
    }
}
