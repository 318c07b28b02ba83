/// Shared JWT module for the blog backend
///
/// Tokens are signed with HS256 using a single server secret and carry the
/// owning user's id plus an absolute expiry one hour after issuance. Tokens
/// are never persisted server-side; validity is determined entirely by the
/// signature and expiry checks at verification time.
///
/// The service must call `initialize_jwt_secret()` during startup before any
/// token operations:
///
/// ```rust,no_run
/// use auth_core::jwt;
///
/// let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET required");
/// jwt::initialize_jwt_secret(&secret).expect("Failed to initialize JWT secret");
/// ```
use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access tokens expire one hour after issuance.
const TOKEN_EXPIRY_HOURS: i64 = 1;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims: the authenticated user and the expiry instant.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Owning user's id.
    pub user_id: Uuid,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

/// Keys are initialized once at startup and never modified afterwards.
static JWT_ENCODING_KEY: OnceCell<EncodingKey> = OnceCell::new();
static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Initialize the signing secret.
///
/// Must be called during application startup before any token operations.
/// Can only be called once; subsequent calls return an error.
pub fn initialize_jwt_secret(secret: &str) -> Result<()> {
    JWT_ENCODING_KEY
        .set(EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| anyhow!("JWT encoding key already initialized"))?;

    JWT_DECODING_KEY
        .set(DecodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| anyhow!("JWT decoding key already initialized"))?;

    Ok(())
}

fn get_encoding_key() -> Result<&'static EncodingKey> {
    JWT_ENCODING_KEY.get().ok_or_else(|| {
        anyhow!("JWT secret not initialized. Call initialize_jwt_secret() during startup.")
    })
}

fn get_decoding_key() -> Result<&'static DecodingKey> {
    JWT_DECODING_KEY.get().ok_or_else(|| {
        anyhow!("JWT secret not initialized. Call initialize_jwt_secret() during startup.")
    })
}

/// Generate a bearer token for a user.
///
/// The token expires one hour after issuance. No server-side state is kept.
pub fn generate_token(user_id: Uuid) -> Result<String> {
    let expiry = Utc::now() + Duration::hours(TOKEN_EXPIRY_HOURS);

    let claims = Claims {
        user_id,
        exp: expiry.timestamp(),
    };

    let encoding_key = get_encoding_key()?;
    encode(&Header::new(JWT_ALGORITHM), &claims, encoding_key)
        .map_err(|e| anyhow!("Failed to generate token: {e}"))
}

/// Validate and decode a bearer token.
///
/// Checks the HS256 signature and the expiry claim. Every rejected token
/// (malformed, bad signature, or expired) surfaces as the same opaque error
/// so callers cannot probe which check failed; the underlying reason is only
/// logged at debug level.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let decoding_key = get_decoding_key()?;

    let mut validation = Validation::new(JWT_ALGORITHM);
    validation.validate_exp = true;

    decode::<Claims>(token, decoding_key, &validation).map_err(|e| {
        tracing::debug!("token rejected: {e}");
        anyhow!("token validation failed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-do-not-use-in-production";

    fn init_test_secret() {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            initialize_jwt_secret(TEST_SECRET).expect("Failed to initialize test secret");
        });
    }

    #[test]
    fn test_generate_token_shape() {
        init_test_secret();

        let token = generate_token(Uuid::new_v4()).expect("Failed to generate token");
        assert_eq!(token.matches('.').count(), 2); // JWT has 3 parts
    }

    #[test]
    fn test_round_trip() {
        init_test_secret();

        let user_id = Uuid::new_v4();
        let token = generate_token(user_id).expect("Failed to generate token");

        let token_data = validate_token(&token).expect("Token should validate");
        assert_eq!(token_data.claims.user_id, user_id);
        assert!(token_data.claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_malformed_token_rejected() {
        init_test_secret();

        assert!(validate_token("not.a.token").is_err());
        assert!(validate_token("").is_err());
    }

    #[test]
    fn test_tampered_signature_rejected() {
        init_test_secret();

        let token = generate_token(Uuid::new_v4()).expect("Failed to generate token");

        // Flip one byte of the signature segment.
        let (head, signature) = token.rsplit_once('.').expect("JWT has a signature segment");
        let mut sig: Vec<u8> = signature.bytes().collect();
        sig[0] = if sig[0] == b'A' { b'B' } else { b'A' };
        let tampered = format!("{}.{}", head, String::from_utf8(sig).unwrap());

        assert!(validate_token(&tampered).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        init_test_secret();

        // Encode claims whose expiry is already one hour in the past.
        let claims = Claims {
            user_id: Uuid::new_v4(),
            exp: (Utc::now() - Duration::hours(1)).timestamp(),
        };
        let expired = encode(
            &Header::new(JWT_ALGORITHM),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .expect("Failed to encode expired claims");

        assert!(validate_token(&expired).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        init_test_secret();

        let claims = Claims {
            user_id: Uuid::new_v4(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let foreign = encode(
            &Header::new(JWT_ALGORITHM),
            &claims,
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .expect("Failed to encode foreign claims");

        assert!(validate_token(&foreign).is_err());
    }
}
