use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domains::auth::models::Role;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,  // Subject (account id as hex string)
    pub role: Role,   // Account role
    pub email: String,
    pub exp: i64,     // Expiration timestamp
    pub iat: i64,     // Issued at timestamp
}

/// JWT Service - creates and verifies JWT tokens
///
/// Stateless: verification consults no store, so a token stays valid until
/// its natural expiry. The signing key is injected from configuration.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

/// Token lifetime: 7 days.
const TOKEN_TTL_DAYS: i64 = 7;

impl JwtService {
    /// Create new JWT service with the given signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a new token for an account
    pub fn issue(&self, subject_id: &str, role: Role, email: &str) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::days(TOKEN_TTL_DAYS);

        let claims = Claims {
            sub: subject_id.to_string(),
            role,
            email: email.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a token
    ///
    /// Returns the claims if the signature matches and the token is not
    /// expired; fails on malformed payloads.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}
