//! Password hashing and bearer-token issuance + verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime from issuance.
const TOKEN_TTL_SECS: i64 = 3600;

/// Claims carried by a bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated user.
    pub sub: i64,
    /// Expiry as a Unix timestamp, one hour after issuance.
    pub exp: i64,
}

/// Hash a plaintext password with a fresh salt.
///
/// # Errors
///
/// Returns [`bcrypt::BcryptError`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
}

/// Verify a plaintext password against a stored hash.
///
/// # Errors
///
/// Returns [`bcrypt::BcryptError`] if the stored hash is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}

/// Issue a signed token for `user_id`, expiring one hour from now.
///
/// # Errors
///
/// Returns [`jsonwebtoken::errors::Error`] if signing fails.
pub fn issue_token(secret: &str, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token's signature and expiry and return its claims.
///
/// # Errors
///
/// Returns [`jsonwebtoken::errors::Error`] if the token is malformed,
/// mis-signed, or expired.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
