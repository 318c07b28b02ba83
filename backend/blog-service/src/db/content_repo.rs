/// Content database operations (posts and comments)
use crate::error::Result;
use crate::models::{AuthoredItem, ContentItem, ContentKind};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post
pub async fn create_post(pool: &PgPool, author_id: Uuid, body: &str) -> Result<ContentItem> {
    let item = sqlx::query_as::<_, ContentItem>(
        r#"
        INSERT INTO content_items (author_id, kind, body)
        VALUES ($1, 'post', $2)
        RETURNING id, author_id, kind, body, created_at, parent_id
        "#,
    )
    .bind(author_id)
    .bind(body)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// Create a new comment attached to a post
pub async fn create_comment(
    pool: &PgPool,
    author_id: Uuid,
    body: &str,
    parent_post_id: Uuid,
) -> Result<ContentItem> {
    let item = sqlx::query_as::<_, ContentItem>(
        r#"
        INSERT INTO content_items (author_id, kind, body, parent_id)
        VALUES ($1, 'comment', $2, $3)
        RETURNING id, author_id, kind, body, created_at, parent_id
        "#,
    )
    .bind(author_id)
    .bind(body)
    .bind(parent_post_id)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

/// Find any content item (post or comment) by id
pub async fn find_item_by_id(pool: &PgPool, item_id: Uuid) -> Result<Option<ContentItem>> {
    let item = sqlx::query_as::<_, ContentItem>(
        r#"
        SELECT id, author_id, kind, body, created_at, parent_id
        FROM content_items
        WHERE id = $1
        "#,
    )
    .bind(item_id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

/// Find a post by id (comments excluded)
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<ContentItem>> {
    let item = sqlx::query_as::<_, ContentItem>(
        r#"
        SELECT id, author_id, kind, body, created_at, parent_id
        FROM content_items
        WHERE id = $1 AND kind = 'post'
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

/// All posts with their authors' display names, newest first
pub async fn list_posts_with_authors(pool: &PgPool) -> Result<Vec<AuthoredItem>> {
    let posts = sqlx::query_as::<_, AuthoredItem>(
        r#"
        SELECT c.id, c.author_id, c.kind, c.body, c.created_at, c.parent_id,
               u.display_name AS author_name
        FROM content_items c
        JOIN users u ON c.author_id = u.id
        WHERE c.kind = 'post'
        ORDER BY c.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Comments belonging to any of the given posts, oldest first
pub async fn list_comments_for_posts(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<Vec<AuthoredItem>> {
    let comments = sqlx::query_as::<_, AuthoredItem>(
        r#"
        SELECT c.id, c.author_id, c.kind, c.body, c.created_at, c.parent_id,
               u.display_name AS author_name
        FROM content_items c
        JOIN users u ON c.author_id = u.id
        WHERE c.parent_id = ANY($1)
        ORDER BY c.created_at ASC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Replace an item's body text. Kind, author, and timestamps are untouched.
pub async fn update_body(pool: &PgPool, item_id: Uuid, body: &str) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE content_items
        SET body = $1
        WHERE id = $2
        "#,
    )
    .bind(body)
    .bind(item_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete an item. For a post, its comments go with it in the same
/// transaction; any failure rolls the whole deletion back.
pub async fn delete_item_cascade(pool: &PgPool, item: &ContentItem) -> Result<()> {
    let mut tx = pool.begin().await?;

    if item.kind == ContentKind::Post {
        sqlx::query("DELETE FROM content_items WHERE parent_id = $1")
            .bind(item.id)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query("DELETE FROM content_items WHERE id = $1")
        .bind(item.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}
