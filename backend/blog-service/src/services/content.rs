/// Content service - post and comment lifecycle
use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::content_repo;
use crate::error::{AppError, Result};
use crate::middleware::permissions;
use crate::models::{CommentView, ContentItem, PostView};

pub struct ContentService {
    pool: PgPool,
}

impl ContentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Publish a new post
    pub async fn create_post(&self, author_id: Uuid, body: &str) -> Result<ContentItem> {
        content_repo::create_post(&self.pool, author_id, body).await
    }

    /// Comment on an existing post.
    ///
    /// The parent must exist and be a post; commenting on a missing or
    /// already-deleted post is a not-found error rather than a dangling
    /// reference.
    pub async fn create_comment(
        &self,
        author_id: Uuid,
        body: &str,
        parent_post_id: Uuid,
    ) -> Result<ContentItem> {
        let parent = content_repo::find_post_by_id(&self.pool, parent_post_id).await?;
        if parent.is_none() {
            return Err(AppError::NotFound(
                "Publicación no encontrada".to_string(),
            ));
        }

        content_repo::create_comment(&self.pool, author_id, body, parent_post_id).await
    }

    /// All posts, newest first, each with its comments eagerly attached
    /// (oldest first).
    pub async fn list_posts(&self) -> Result<Vec<PostView>> {
        let posts = content_repo::list_posts_with_authors(&self.pool).await?;

        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let comments = if post_ids.is_empty() {
            Vec::new()
        } else {
            content_repo::list_comments_for_posts(&self.pool, &post_ids).await?
        };

        let mut by_post: HashMap<Uuid, Vec<CommentView>> = HashMap::new();
        for comment in comments {
            // list_comments_for_posts only returns rows with a parent
            let Some(parent_id) = comment.parent_id else {
                continue;
            };
            by_post.entry(parent_id).or_default().push(CommentView {
                id: comment.id,
                contenido: comment.body,
                autor: comment.author_name,
                date: comment.created_at,
            });
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let comentarios = by_post.remove(&post.id).unwrap_or_default();
                PostView {
                    id: post.id,
                    contenido: post.body,
                    autor: post.author_name,
                    date: post.created_at,
                    comentarios,
                }
            })
            .collect())
    }

    /// Fetch a single item (post or comment) by id
    pub async fn get_item(&self, item_id: Uuid) -> Result<ContentItem> {
        content_repo::find_item_by_id(&self.pool, item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Publicación no encontrada".to_string()))
    }

    /// Replace an item's body text. Only the author may edit; kind, author,
    /// and creation time are untouched.
    pub async fn edit_content(&self, item_id: Uuid, body: &str, acting_user: Uuid) -> Result<()> {
        let item = self.get_item(item_id).await?;

        permissions::check_edit_permission(acting_user, &item)?;

        content_repo::update_body(&self.pool, item_id, body).await
    }

    /// Delete an item. Only the author may delete. Deleting a post takes its
    /// comments with it in one transaction; deleting a comment cascades
    /// nothing.
    pub async fn delete_content(&self, item_id: Uuid, acting_user: Uuid) -> Result<()> {
        let item = self.get_item(item_id).await?;

        permissions::check_delete_permission(acting_user, &item)?;

        content_repo::delete_item_cascade(&self.pool, &item).await
    }
}
