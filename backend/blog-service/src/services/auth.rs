/// Authentication service - registration and login
use sqlx::PgPool;

use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::User;

pub struct AuthService {
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new user.
    ///
    /// Duplicate emails are rejected. The unique constraint on users.email
    /// backs the pre-insert check under concurrent registration; both paths
    /// surface the same conflict.
    pub async fn register(&self, email: &str, password: &str, display_name: &str) -> Result<User> {
        if user_repo::find_by_email(&self.pool, email).await?.is_some() {
            return Err(AppError::Conflict("Correo Existente".to_string()));
        }

        let password_hash = auth_core::password::hash_password(password)?;

        let user = user_repo::create_user(&self.pool, email, &password_hash, display_name).await?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(user)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// The failure response is identical whether the email is unknown or the
    /// password is wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let user = user_repo::find_by_email(&self.pool, email).await?;

        let user = match user {
            Some(u) if auth_core::password::verify_password(password, &u.password_hash)? => u,
            _ => {
                return Err(AppError::BadRequest(
                    "Email o Contraseña incorrecta".to_string(),
                ))
            }
        };

        let token = auth_core::jwt::generate_token(user.id)?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(token)
    }
}
