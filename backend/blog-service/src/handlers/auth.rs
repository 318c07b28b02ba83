/// Authentication handlers - registration, login, logout
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::error::Result;
use crate::middleware::AuthUser;
use crate::models::{LoginRequest, RegisterRequest};
use crate::services::AuthService;

/// Register a new user
pub async fn register(
    pool: web::Data<PgPool>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = AuthService::new((**pool).clone());
    service
        .register(&req.email, &req.password, &req.nombre)
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": "Felicidades, te has registrado"
    })))
}

/// Verify credentials and hand out a bearer token
pub async fn login(pool: web::Data<PgPool>, req: web::Json<LoginRequest>) -> Result<HttpResponse> {
    req.validate()?;

    let service = AuthService::new((**pool).clone());
    let token = service.login(&req.email, &req.password).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": "Inicio de Sesión Exitosa",
        "token": token,
    })))
}

/// End a session.
///
/// Tokens are stateless, so there is nothing to revoke server-side; the
/// endpoint exists so clients can confirm their token was still valid and
/// then discard it.
pub async fn logout(_user: AuthUser) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": "Te has deslogueado exitosamente."
    })))
}
