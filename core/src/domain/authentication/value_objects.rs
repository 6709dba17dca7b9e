#[derive(Debug, Clone)]
pub struct SendOtpInput {
    pub mobile: String,
}

#[derive(Debug, Clone)]
pub struct VerifyOtpInput {
    pub mobile: String,
    pub otp: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestInput {
    pub token: String,
}
