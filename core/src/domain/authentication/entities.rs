use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::entities::User;

/// Authenticated caller, resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user: User,
}

impl Identity {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> Uuid {
        self.user.id
    }

    pub fn mobile(&self) -> &str {
        &self.user.mobile
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
    pub mobile: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
