//! Access tokens for the ride endpoints.
//!
//! The identity service mints HS256 tokens whose `sub` is the user id; this
//! service only verifies them. [`generate_access_token`] exists so the
//! integration tests and local tooling can act as a given driver.

use commute_core::types::DbId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ALGORITHM: Algorithm = Algorithm::HS256;

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Owner id used for every driver-scoped query.
    pub sub: DbId,
    pub exp: i64,
    pub iat: i64,
    /// Random per-token id.
    pub jti: String,
}

/// Shared secret and lifetime for access tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Only used when minting; verification trusts `exp`.
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default 60).
    ///
    /// # Panics
    ///
    /// Panics when the secret is missing or empty, or the expiry is not an
    /// integer. Called once from [`crate::config::ServerConfig::from_env`].
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse()
                .expect("JWT_ACCESS_EXPIRY_MINS must be an integer number of minutes"),
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.as_bytes())
    }
}

/// Mint a token that authenticates as `user_id`.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        exp: iat + config.access_token_expiry_mins * 60,
        iat,
        jti: Uuid::new_v4().to_string(),
    };
    encode(&Header::new(ALGORITHM), &claims, &config.encoding_key())
}

/// Verify signature and `exp`, returning the claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(token, &config.decoding_key(), &Validation::new(ALGORITHM))
        .map(|data| data.claims)
}
