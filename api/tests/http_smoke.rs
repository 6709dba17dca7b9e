use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use ingredient_scanner_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use ingredient_scanner_core::{
    domain::common::{ObjectStorageConfig, OcrConfig, services::Service},
    infrastructure::{
        auth::JwtTokenIssuer,
        classifier::{ConfiguredClassifier, LexiconIngredientClassifier},
        health::repository::PostgresHealthCheckRepository,
        ingredient_info::FileIngredientInfoRepository,
        object_storage::MinioImageStorage,
        ocr::HttpTextExtractor,
        scan::repository::PostgresScanRepository,
        user::repository::PostgresUserRepository,
    },
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

/// App state whose adapters never reach a live backend.
fn offline_state() -> AppState {
    let args = Args::try_parse_from(["scanner", "--jwt-secret", "test-secret"]).unwrap();
    let db = DatabaseConnection::Disconnected;

    let service = Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresScanRepository::new(db.clone()),
        ConfiguredClassifier::Lexicon(LexiconIngredientClassifier::default()),
        HttpTextExtractor::new(OcrConfig {
            endpoint: "http://127.0.0.1:9/ocr".to_string(),
            language: "en".to_string(),
            timeout_secs: 5,
        })
        .unwrap(),
        MinioImageStorage::new(ObjectStorageConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            region: "us-east-1".to_string(),
            access_key: "minioadmin".to_string(),
            secret_key: "minioadmin".to_string(),
            bucket_prefix: "scanner".to_string(),
            use_ssl: false,
        }),
        FileIngredientInfoRepository::default(),
        PostgresHealthCheckRepository::new(db),
        JwtTokenIssuer::new("test-secret", 60),
        None,
    );

    AppState::new(Arc::new(args), service)
}

// The metrics layer installs a global recorder, so the router is built once.
#[tokio::test]
async fn unauthenticated_surface_behaves() {
    let server = TestServer::new(router(offline_state()).unwrap()).unwrap();

    let root = server.get("/").await;
    root.assert_status_ok();
    assert_eq!(
        root.json::<Value>()["message"],
        "Ingredient Scanner API is live 🎉"
    );

    let live = server.get("/health/live").await;
    live.assert_status_ok();
    assert_eq!(live.json::<Value>()["status"], "ok");

    server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let missing_token = server
        .post("/api/analyze")
        .json(&json!({ "ingredients": ["salt"] }))
        .await;
    missing_token.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(missing_token.json::<Value>()["code"], "E_UNAUTHORIZED");

    server
        .post("/api/analyze")
        .authorization_bearer("not-a-jwt")
        .json(&json!({ "ingredients": ["salt"] }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .get("/api/history")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/api/send-otp")
        .json(&json!({ "mobile": "12" }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let docs = server.get("/api-docs/openapi.json").await;
    docs.assert_status_ok();
    let paths = &docs.json::<Value>()["paths"];
    assert!(paths.get("/api/analyze").is_some());
    assert!(paths.get("/api/verify-otp").is_some());
    assert!(paths.get("/health/ready").is_some());
}
