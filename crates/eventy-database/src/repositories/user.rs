//! User repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use eventy_core::error::{AppError, ErrorKind};
use eventy_core::result::AppResult;
use eventy_entity::user::{CreateUser, User};

/// Repository for user profile CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user profile.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (user_name, user_surname, email, phone_number, marketing_consent) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.user_name)
        .bind(&data.user_surname)
        .bind(&data.email)
        .bind(&data.phone_number)
        .bind(data.marketing_consent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))
    }

    /// Update the marketing-consent flag within a caller-owned transaction.
    ///
    /// Invoked by the purchase transactor when the submitted consent flag
    /// diverges from the profile value.
    pub async fn set_marketing_consent(
        &self,
        conn: &mut PgConnection,
        user_id: Uuid,
        consent: bool,
    ) -> AppResult<()> {
        sqlx::query("UPDATE users SET marketing_consent = $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(consent)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update marketing consent", e)
            })?;
        Ok(())
    }
}
