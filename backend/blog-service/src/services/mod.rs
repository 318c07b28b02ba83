/// Business logic layer for the blog service
///
/// - `auth`: registration, login, and identity resolution
/// - `content`: post/comment lifecycle, ownership-guarded mutation,
///   cascade deletion
pub mod auth;
pub mod content;

pub use auth::AuthService;
pub use content::ContentService;
