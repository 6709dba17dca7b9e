use tracing::{info, instrument, warn};

use crate::domain::{
    authentication::{
        entities::{AccessToken, Identity},
        ports::{AuthService, TokenIssuer},
        value_objects::{AuthorizeRequestInput, SendOtpInput, VerifyOtpInput},
    },
    common::{entities::app_errors::CoreError, generate_random_digits, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientClassifier,
    ingredient_info::ports::IngredientInfoRepository,
    ocr::ports::TextExtractor,
    scan::ports::{ImageStoragePort, ScanRepository},
    user::{entities::User, ports::UserRepository},
};

const OTP_LENGTH: usize = 6;

impl<U, S, CL, TX, IS, II, HC, T> Service<U, S, CL, TX, IS, II, HC, T>
where
    U: UserRepository,
    S: ScanRepository,
    CL: IngredientClassifier,
    TX: TextExtractor,
    IS: ImageStoragePort,
    II: IngredientInfoRepository,
    HC: HealthCheckRepository,
    T: TokenIssuer,
{
    fn generate_otp(&self) -> String {
        self.fixed_otp
            .clone()
            .unwrap_or_else(|| generate_random_digits(OTP_LENGTH))
    }
}

impl<U, S, CL, TX, IS, II, HC, T> AuthService for Service<U, S, CL, TX, IS, II, HC, T>
where
    U: UserRepository,
    S: ScanRepository,
    CL: IngredientClassifier,
    TX: TextExtractor,
    IS: ImageStoragePort,
    II: IngredientInfoRepository,
    HC: HealthCheckRepository,
    T: TokenIssuer,
{
    #[instrument(skip(self), fields(mobile = %input.mobile))]
    async fn send_otp(&self, input: SendOtpInput) -> Result<(), CoreError> {
        let mobile = input.mobile.trim();
        if mobile.is_empty() {
            return Err(CoreError::Invalid("mobile number is required".to_string()));
        }

        let otp = self.generate_otp();

        match self.user_repository.get_by_mobile(mobile).await? {
            Some(user) => {
                self.user_repository.update_otp(user.id, otp.clone()).await?;
            }
            None => {
                self.user_repository
                    .create(User::new(mobile.to_string(), otp.clone()))
                    .await?;
            }
        }

        // No SMS gateway is wired in; the code is only visible in the logs.
        info!(otp = %otp, "OTP issued");

        Ok(())
    }

    #[instrument(skip(self, input), fields(mobile = %input.mobile))]
    async fn verify_otp(&self, input: VerifyOtpInput) -> Result<AccessToken, CoreError> {
        let user = self
            .user_repository
            .get_by_mobile(input.mobile.trim())
            .await?
            .filter(|user| user.otp_code.as_deref() == Some(input.otp.as_str()))
            .ok_or_else(|| {
                warn!("OTP verification failed");
                CoreError::InvalidOtp
            })?;

        let token = self.token_issuer.issue(&user)?;

        self.user_repository
            .mark_verified(user.id, token.clone())
            .await?;

        info!(user_id = %user.id, "user verified");

        Ok(AccessToken::bearer(token))
    }

    async fn authorize_request(&self, input: AuthorizeRequestInput) -> Result<Identity, CoreError> {
        let claims = self.token_issuer.decode(&input.token)?;

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(Identity::new(user))
    }
}
