use std::sync::Arc;

use crate::domain::{
    authentication::ports::TokenIssuer,
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientClassifier,
    ingredient_info::ports::IngredientInfoRepository,
    ocr::ports::TextExtractor,
    scan::ports::{ImageStoragePort, ScanRepository},
    user::ports::UserRepository,
};

/// Application service wiring every port together.
///
/// Each adapter is built once at startup and shared behind an `Arc`, so
/// cloning a `Service` is cheap and safe across request handlers.
pub struct Service<U, S, CL, TX, IS, II, HC, T>
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
    pub(crate) user_repository: Arc<U>,
    pub(crate) scan_repository: Arc<S>,
    pub(crate) classifier: Arc<CL>,
    pub(crate) text_extractor: Arc<TX>,
    pub(crate) image_storage: Arc<IS>,
    pub(crate) ingredient_info_repository: Arc<II>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) token_issuer: Arc<T>,
    pub(crate) fixed_otp: Option<String>,
}

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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        scan_repository: S,
        classifier: CL,
        text_extractor: TX,
        image_storage: IS,
        ingredient_info_repository: II,
        health_check_repository: HC,
        token_issuer: T,
        fixed_otp: Option<String>,
    ) -> Self {
        Self {
            user_repository: Arc::new(user_repository),
            scan_repository: Arc::new(scan_repository),
            classifier: Arc::new(classifier),
            text_extractor: Arc::new(text_extractor),
            image_storage: Arc::new(image_storage),
            ingredient_info_repository: Arc::new(ingredient_info_repository),
            health_check_repository: Arc::new(health_check_repository),
            token_issuer: Arc::new(token_issuer),
            fixed_otp,
        }
    }
}

impl<U, S, CL, TX, IS, II, HC, T> Clone for Service<U, S, CL, TX, IS, II, HC, T>
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
    fn clone(&self) -> Self {
        Self {
            user_repository: Arc::clone(&self.user_repository),
            scan_repository: Arc::clone(&self.scan_repository),
            classifier: Arc::clone(&self.classifier),
            text_extractor: Arc::clone(&self.text_extractor),
            image_storage: Arc::clone(&self.image_storage),
            ingredient_info_repository: Arc::clone(&self.ingredient_info_repository),
            health_check_repository: Arc::clone(&self.health_check_repository),
            token_issuer: Arc::clone(&self.token_issuer),
            fixed_otp: self.fixed_otp.clone(),
        }
    }
}
