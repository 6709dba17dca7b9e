use axum::extract::State;
use ingredient_scanner_core::domain::authentication::{
    ports::AuthService, value_objects::SendOtpInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::validators::SendOtpRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SendOtpResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/send-otp",
    tag = "auth",
    summary = "Send a one-time password",
    description = "Creates the user on first contact and issues a fresh OTP for the mobile number",
    responses(
        (status = 200, body = SendOtpResponse)
    ),
    request_body = SendOtpRequest
)]
pub async fn send_otp(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SendOtpRequest>,
) -> Result<Response<SendOtpResponse>, ApiError> {
    state
        .service
        .send_otp(SendOtpInput {
            mobile: payload.mobile,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SendOtpResponse {
        message: "OTP sent successfully".to_string(),
    }))
}
