/// Blog Service Library
///
/// A minimal blog backend: registration/login, publishing posts, commenting,
/// and editing/deleting owned content over HTTP with JWT bearer
/// authentication, backed by PostgreSQL.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route configuration
/// - `models`: data structures for users, posts, and comments
/// - `services`: business logic layer
/// - `db`: database access layer (repositories + migrations)
/// - `middleware`: bearer-token authentication and ownership checks
/// - `error`: error types and HTTP mapping
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
