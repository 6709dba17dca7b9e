use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use bytes::Bytes;
use uuid::Uuid;

use crate::{
    domain::{
        authentication::entities::Identity,
        common::{entities::app_errors::CoreError, services::Service},
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
        ingredient::{
            entities::{IngredientLabels, LabeledIngredient},
            ports::IngredientClassifier,
        },
        ingredient_info::ports::IngredientInfoRepository,
        ocr::ports::TextExtractor,
        scan::{
            entities::Scan,
            ports::{ImageStoragePort, ScanRepository},
            value_objects::GetScanHistoryFilter,
        },
        user::{entities::User, ports::UserRepository},
    },
    infrastructure::auth::JwtTokenIssuer,
};

pub type TestService = Service<
    InMemoryUserRepository,
    InMemoryScanRepository,
    StubClassifier,
    StubTextExtractor,
    InMemoryImageStorage,
    StaticIngredientInfo,
    StubHealthCheck,
    JwtTokenIssuer,
>;

pub fn test_service() -> TestService {
    test_service_with_scans(InMemoryScanRepository::default())
}

pub fn test_service_with_scans(scan_repository: InMemoryScanRepository) -> TestService {
    Service::new(
        InMemoryUserRepository::default(),
        scan_repository,
        StubClassifier,
        StubTextExtractor,
        InMemoryImageStorage::default(),
        StaticIngredientInfo,
        StubHealthCheck,
        JwtTokenIssuer::new("test-secret", 60),
        Some("123456".to_string()),
    )
}

/// A fresh, verified user each call.
pub fn test_identity() -> Identity {
    let mobile = format!("+91{}", Uuid::new_v4().as_u128() % 10_000_000_000);
    let mut user = User::new(mobile, "123456".to_string());
    user.is_verified = true;
    Identity::new(user)
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self.users.lock().unwrap().get(&user_id).cloned())
    }

    async fn get_by_mobile(&self, mobile: &str) -> Result<Option<User>, CoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.mobile == mobile)
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, CoreError> {
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_otp(&self, user_id: Uuid, otp_code: String) -> Result<(), CoreError> {
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&user_id).ok_or(CoreError::NotFound)?;
        user.otp_code = Some(otp_code);
        Ok(())
    }

    async fn mark_verified(&self, user_id: Uuid, token: String) -> Result<(), CoreError> {
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&user_id).ok_or(CoreError::NotFound)?;
        user.is_verified = true;
        user.token = Some(token);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryScanRepository {
    scans: Mutex<Vec<Scan>>,
    fail_inserts: bool,
}

impl InMemoryScanRepository {
    /// Rejects every insert, as a database outage would.
    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scans.lock().unwrap().is_empty()
    }
}

impl ScanRepository for InMemoryScanRepository {
    async fn create_scan(&self, scan: Scan) -> Result<Scan, CoreError> {
        if self.fail_inserts {
            return Err(CoreError::InternalServerError);
        }

        self.scans.lock().unwrap().push(scan.clone());
        Ok(scan)
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetScanHistoryFilter,
    ) -> Result<Vec<Scan>, CoreError> {
        // newest inserted first, so equal timestamps keep insertion order reversed
        let mut scans: Vec<Scan> = self
            .scans
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|scan| scan.user_id == user_id)
            .cloned()
            .collect();
        scans.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = filter.offset.unwrap_or(0) as usize;
        let limit = filter.limit.map(|l| l as usize).unwrap_or(usize::MAX);

        Ok(scans.into_iter().skip(offset).take(limit).collect())
    }

    async fn get_by_id(&self, scan_id: Uuid, user_id: Uuid) -> Result<Option<Scan>, CoreError> {
        Ok(self
            .scans
            .lock()
            .unwrap()
            .iter()
            .find(|scan| scan.id == scan_id && scan.user_id == user_id)
            .cloned())
    }
}

/// Labels a handful of known ingredients; anything else fails.
pub struct StubClassifier;

impl IngredientClassifier for StubClassifier {
    async fn classify(&self, ingredients: Vec<String>) -> Vec<LabeledIngredient> {
        ingredients
            .into_iter()
            .map(|name| {
                let impact = match name.to_lowercase().as_str() {
                    "sugar" | "vitamin c" | "water" => "good",
                    "palm oil" | "white flour" => "moderate",
                    "msg" | "salt" => "bad",
                    _ => return LabeledIngredient::failed(name, "unknown ingredient"),
                };

                LabeledIngredient::labeled(
                    name,
                    IngredientLabels {
                        category: "test".to_string(),
                        sub_category: "test".to_string(),
                        is_processed: "no".to_string(),
                        health_impact: impact.to_string(),
                    },
                )
            })
            .collect()
    }
}

/// Reads every non-empty image as the same printed label.
pub struct StubTextExtractor;

impl TextExtractor for StubTextExtractor {
    async fn extract_text(&self, image_data: Bytes) -> Result<Vec<String>, CoreError> {
        if image_data.is_empty() {
            return Err(CoreError::ExternalServiceError("empty image".to_string()));
        }

        Ok(vec![
            "Crunchy Crackers 200g".to_string(),
            "Ingredients: Palm Oil, White Flour (40%), Salt".to_string(),
        ])
    }
}

#[derive(Default, Clone)]
pub struct InMemoryImageStorage {
    objects: Arc<Mutex<Vec<String>>>,
}

impl InMemoryImageStorage {
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().clone()
    }
}

impl ImageStoragePort for InMemoryImageStorage {
    async fn put_image(
        &self,
        object_key: &str,
        _payload: Bytes,
        _content_type: &str,
    ) -> Result<(), CoreError> {
        self.objects.lock().unwrap().push(object_key.to_string());
        Ok(())
    }

    async fn delete_image(&self, object_key: &str) -> Result<(), CoreError> {
        self.objects.lock().unwrap().retain(|key| key != object_key);
        Ok(())
    }
}

pub struct StaticIngredientInfo;

impl IngredientInfoRepository for StaticIngredientInfo {
    async fn describe(&self, ingredient: &str) -> Result<Option<String>, CoreError> {
        Ok(match ingredient {
            "msg" => Some("Monosodium glutamate, a flavour enhancer.".to_string()),
            _ => None,
        })
    }
}

pub struct StubHealthCheck;

impl HealthCheckRepository for StubHealthCheck {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            database: "in-memory".to_string(),
            response_time_ms: 0,
        })
    }
}
