/// Database access layer
///
/// Repository modules over `sqlx::PgPool`. Schema lives in `migrations/`.
pub mod content_repo;
pub mod user_repo;
