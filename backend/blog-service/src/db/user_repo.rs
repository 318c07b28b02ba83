/// User database operations
use crate::error::{AppError, Result};
use crate::models::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Postgres unique-violation SQLSTATE, used to detect duplicate emails that
/// slip past the pre-insert check under concurrency.
const UNIQUE_VIOLATION: &str = "23505";

/// Create a new user. A duplicate email surfaces as `Conflict`.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    display_name: &str,
) -> Result<User> {
    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, display_name)
        VALUES ($1, $2, $3)
        RETURNING id, email, password_hash, display_name, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(display_name)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(err) => {
            if let Some(db_err) = err.as_database_error() {
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                    return Err(AppError::Conflict("Correo Existente".to_string()));
                }
            }
            Err(err.into())
        }
    }
}

/// Find a user by email
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, password_hash, display_name, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Find a user by id
pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, password_hash, display_name, created_at FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
