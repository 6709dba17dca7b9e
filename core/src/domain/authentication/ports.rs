use std::future::Future;

use crate::domain::{
    authentication::{
        entities::{AccessToken, Identity, JwtClaims},
        value_objects::{AuthorizeRequestInput, SendOtpInput, VerifyOtpInput},
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

/// Signs and validates access tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<String, CoreError>;

    fn decode(&self, token: &str) -> Result<JwtClaims, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn send_otp(&self, input: SendOtpInput) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn verify_otp(
        &self,
        input: VerifyOtpInput,
    ) -> impl Future<Output = Result<AccessToken, CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
