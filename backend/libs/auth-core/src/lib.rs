/// Shared authentication primitives for the blog backend
///
/// - `jwt`: stateless bearer token issuance and validation (HS256)
/// - `password`: Argon2id password hashing and verification
pub mod jwt;
pub mod password;
