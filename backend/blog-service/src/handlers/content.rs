/// Content handlers - posts and comments
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::middleware::AuthUser;
use crate::models::{CreateCommentRequest, CreatePostRequest, UpdateContentRequest};
use crate::services::ContentService;

/// List all posts, newest first, with nested comments
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone());
    let posts = service.list_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Fetch a single item's body text
pub async fn get_post(pool: web::Data<PgPool>, item_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone());
    let item = service.get_item(*item_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "contenido": item.body
    })))
}

/// Publish a new post
pub async fn create_post(
    pool: web::Data<PgPool>,
    user: AuthUser,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = ContentService::new((**pool).clone());
    service.create_post(user.0, &req.contenido).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": "Tu publicación ha sido creada!"
    })))
}

/// Comment on a post
pub async fn create_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user: AuthUser,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = ContentService::new((**pool).clone());
    service
        .create_comment(user.0, &req.contenido, *post_id)
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": "Tu comentario ha sido publicado"
    })))
}

/// Edit a post or comment (author only)
pub async fn edit_content(
    pool: web::Data<PgPool>,
    item_id: web::Path<Uuid>,
    user: AuthUser,
    req: web::Json<UpdateContentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = ContentService::new((**pool).clone());
    service.edit_content(*item_id, &req.contenido, user.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": "Tu publicación ha sido actualizada!"
    })))
}

/// Delete a post (with its comments) or a single comment (author only)
pub async fn delete_content(
    pool: web::Data<PgPool>,
    item_id: web::Path<Uuid>,
    user: AuthUser,
) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone());
    service.delete_content(*item_id, user.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": "Tu publicación ha sido eliminada!"
    })))
}
