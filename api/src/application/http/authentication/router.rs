use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    send_otp::{__path_send_otp, send_otp},
    verify_otp::{__path_verify_otp, verify_otp},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(send_otp, verify_otp))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/api/send-otp", root_path), post(send_otp))
        .route(&format!("{}/api/verify-otp", root_path), post(verify_otp))
}
