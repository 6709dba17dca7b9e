use crate::domain::{
    authentication::ports::TokenIssuer,
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient::ports::IngredientClassifier,
    ingredient_info::ports::IngredientInfoRepository,
    ocr::ports::TextExtractor,
    scan::ports::{ImageStoragePort, ScanRepository},
    user::ports::UserRepository,
};

impl<U, S, CL, TX, IS, II, HC, T> HealthCheckService for Service<U, S, CL, TX, IS, II, HC, T>
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
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::test_service;

    #[tokio::test]
    async fn readiness_is_delegated_to_repository() {
        let service = test_service();

        let status = service.readiness().await.unwrap();

        assert_eq!(status.status, "ok");
        assert_eq!(status.database, "in-memory");
    }
}
