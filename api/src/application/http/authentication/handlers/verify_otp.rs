use axum::extract::State;
use ingredient_scanner_core::domain::authentication::{
    entities::AccessToken, ports::AuthService, value_objects::VerifyOtpInput,
};

use crate::application::http::{
    authentication::validators::VerifyOtpRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/verify-otp",
    tag = "auth",
    summary = "Verify a one-time password",
    description = "Exchanges a matching mobile and OTP pair for a bearer access token",
    responses(
        (status = 200, body = AccessToken),
        (status = 401, description = "OTP does not match")
    ),
    request_body = VerifyOtpRequest
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<VerifyOtpRequest>,
) -> Result<Response<AccessToken>, ApiError> {
    let token = state
        .service
        .verify_otp(VerifyOtpInput {
            mobile: payload.mobile,
            otp: payload.otp,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(token))
}
