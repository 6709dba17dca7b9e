use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SendOtpRequest {
    #[validate(length(
        min = 6,
        max = 20,
        message = "mobile must be between 6 and 20 characters"
    ))]
    #[schema(example = "9876543210")]
    pub mobile: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(
        min = 6,
        max = 20,
        message = "mobile must be between 6 and 20 characters"
    ))]
    #[schema(example = "9876543210")]
    pub mobile: String,
    #[validate(length(min = 4, max = 8, message = "otp must be between 4 and 8 characters"))]
    #[schema(example = "123456")]
    pub otp: String,
}
