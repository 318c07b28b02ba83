/// Data models for the blog service
///
/// - `User`: registered identity
/// - `ContentItem`: posts and comments, unified in one self-referential table
///   and distinguished by `ContentKind`
/// - Request/response DTOs. Wire field names (`contenido`, `autor`,
///   `comentarios`, ...) match what existing clients already send and expect.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

/// Kind tag matching the database content_kind type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "content_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Post,
    Comment,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Comment => "comment",
        }
    }
}

/// User model - core identity entity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// A post or comment. Comments carry the id of their parent post in
/// `parent_id`; posts always have `parent_id` = None.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContentItem {
    pub id: Uuid,
    pub author_id: Uuid,
    pub kind: ContentKind,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub parent_id: Option<Uuid>,
}

/// Content row joined with its author's display name, for list/read views
#[derive(Debug, Clone, FromRow)]
pub struct AuthoredItem {
    pub id: Uuid,
    pub author_id: Uuid,
    pub kind: ContentKind,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub parent_id: Option<Uuid>,
    pub author_name: String,
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 50))]
    pub nombre: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

/// Request body for creating a post
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1))]
    pub contenido: String,
}

/// Request body for commenting on a post
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1))]
    pub contenido: String,
}

/// Request body for editing a post or comment
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContentRequest {
    #[validate(length(min = 1))]
    pub contenido: String,
}

/// Comment as rendered inside a post listing
#[derive(Debug, Serialize)]
pub struct CommentView {
    pub id: Uuid,
    pub contenido: String,
    pub autor: String,
    pub date: DateTime<Utc>,
}

/// Post with its comments eagerly attached
#[derive(Debug, Serialize)]
pub struct PostView {
    pub id: Uuid,
    pub contenido: String,
    pub autor: String,
    pub date: DateTime<Utc>,
    pub comentarios: Vec<CommentView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            email: "ana@example.com".to_string(),
            password: "longenough".to_string(),
            nombre: "Ana".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "longenough".to_string(),
            nombre: "Ana".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            email: "ana@example.com".to_string(),
            password: "short".to_string(),
            nombre: "Ana".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_empty_body_rejected() {
        let req = CreatePostRequest {
            contenido: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
