/// HTTP middleware utilities for the blog service
///
/// Provides the bearer-token authentication extractor and ownership
/// permission checks. Authentication is a per-route extractor rather than a
/// scope-level wrapper because several paths mix public and authenticated
/// methods (e.g. GET /publicaciones is public while POST is not).
pub mod permissions;

pub use permissions::*;

use actix_web::{web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::user_repo;
use crate::error::AppError;

/// Authenticated identity resolved from the request's bearer token.
///
/// Extraction performs the full verification chain: header parse, signature
/// and expiry validation, then a lookup confirming the claimed user still
/// exists. A missing header is reported separately, but every verification
/// failure (bad signature, expired, unknown user) produces the same 401
/// response so clients cannot probe which check failed.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| AppError::Unauthorized("Token no proporcionado".to_string()))?;

            let token = auth_header
                .strip_prefix("Bearer ")
                .ok_or_else(|| AppError::Unauthorized("Token inválido".to_string()))?;

            let claims = auth_core::jwt::validate_token(token)
                .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))?;

            let pool = req
                .app_data::<web::Data<PgPool>>()
                .ok_or_else(|| AppError::Internal("database pool not configured".to_string()))?;

            match user_repo::find_by_id(pool, claims.claims.user_id).await? {
                Some(user) => Ok(AuthUser(user.id)),
                // A token naming a user we no longer know is just as invalid
                // as a bad signature.
                None => Err(AppError::Unauthorized(
                    "Token inválido o expirado".to_string(),
                )),
            }
        })
    }
}
