use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use tracing::{debug, error};

use crate::domain::{
    authentication::{entities::JwtClaims, ports::TokenIssuer},
    common::entities::app_errors::CoreError,
    user::entities::User,
};

/// HS256 access tokens signed with a shared secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expire_minutes: i64,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, expire_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expire_minutes,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<String, CoreError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user.id,
            mobile: user.mobile.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.expire_minutes)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign access token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn decode(&self, token: &str) -> Result<JwtClaims, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => {
                    debug!("Rejected access token: {}", e);
                    CoreError::InvalidToken
                }
            })
    }
}
