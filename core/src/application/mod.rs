use crate::{
    domain::common::{ScannerConfig, services::Service},
    infrastructure::{
        auth::JwtTokenIssuer,
        classifier::ConfiguredClassifier,
        db::postgres::{Postgres, PostgresConfig},
        health::repository::PostgresHealthCheckRepository,
        ingredient_info::FileIngredientInfoRepository,
        object_storage::MinioImageStorage,
        ocr::HttpTextExtractor,
        scan::repository::PostgresScanRepository,
        user::repository::PostgresUserRepository,
    },
};

pub type ScannerService = Service<
    PostgresUserRepository,
    PostgresScanRepository,
    ConfiguredClassifier,
    HttpTextExtractor,
    MinioImageStorage,
    FileIngredientInfoRepository,
    PostgresHealthCheckRepository,
    JwtTokenIssuer,
>;

pub async fn create_service(config: ScannerConfig) -> Result<ScannerService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let image_storage = MinioImageStorage::new(config.object_storage.clone());
    image_storage.ensure_bucket().await?;

    let classifier = ConfiguredClassifier::from_config(&config.classifier)?;
    let ingredient_info = FileIngredientInfoRepository::load(&config.ingredient_info.path);
    tracing::info!(entries = ingredient_info.len(), "ingredient info loaded");

    Ok(Service::new(
        PostgresUserRepository::new(postgres.get_db()),
        PostgresScanRepository::new(postgres.get_db()),
        classifier,
        HttpTextExtractor::new(config.ocr.clone())?,
        image_storage,
        ingredient_info,
        PostgresHealthCheckRepository::new(postgres.get_db()),
        JwtTokenIssuer::new(
            &config.auth.jwt_secret,
            config.auth.access_token_expire_minutes,
        ),
        config.auth.fixed_otp.clone(),
    ))
}
