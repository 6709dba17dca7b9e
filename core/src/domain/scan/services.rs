use tracing::{error, info, instrument, warn};

use crate::domain::{
    authentication::{entities::Identity, ports::TokenIssuer},
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientClassifier,
    ingredient_info::ports::IngredientInfoRepository,
    ocr::{ports::TextExtractor, services::parse_ingredient_list},
    recommendation::services::evaluate,
    scan::{
        entities::{Scan, ScanAnalysis},
        ports::{ImageStoragePort, ScanRepository, ScanService},
        value_objects::{
            AnalyzeIngredientsInput, ExtractIngredientsInput, GetScanHistoryFilter, GetScanInput,
            ScanImageInput,
        },
    },
    user::ports::UserRepository,
};

pub const MAX_HISTORY_LIMIT: u32 = 100;

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
    async fn read_label(&self, image_data: bytes::Bytes) -> Result<Vec<String>, CoreError> {
        let segments = self.text_extractor.extract_text(image_data).await?;
        let ingredients = parse_ingredient_list(&segments);

        if ingredients.is_empty() {
            warn!(segments = segments.len(), "no ingredients found in label text");
        }

        Ok(ingredients)
    }

    /// Classifies, evaluates and records one scan.
    async fn record_scan(
        &self,
        identity: &Identity,
        raw_ingredients: Vec<String>,
        image_object_key: Option<String>,
    ) -> Result<ScanAnalysis, CoreError> {
        let ingredients = self.classifier.classify(raw_ingredients.clone()).await;
        let failed = ingredients.iter().filter(|i| i.is_failed()).count();
        if failed > 0 {
            warn!(failed, total = ingredients.len(), "some ingredients could not be classified");
        }

        let result = evaluate(&ingredients);

        let scan = Scan::new(
            identity.id(),
            image_object_key,
            &raw_ingredients,
            ingredients.clone(),
            &result,
        );
        let scan = self.scan_repository.create_scan(scan).await?;

        info!(
            scan_id = %scan.id,
            recommendation = result.recommendation.as_str(),
            health_score = result.health_score,
            "scan recorded"
        );

        Ok(ScanAnalysis {
            scan_id: scan.id,
            ingredients,
            result,
        })
    }

    /// Removes an image whose scan row could not be written.
    async fn discard_image(&self, object_key: &str) {
        if let Err(e) = self.image_storage.delete_image(object_key).await {
            error!(object_key = %object_key, "Orphaned scan image left in storage: {}", e);
        }
    }
}

fn normalize_ingredients(ingredients: Vec<String>) -> Vec<String> {
    ingredients
        .into_iter()
        .map(|ingredient| ingredient.trim().to_string())
        .filter(|ingredient| !ingredient.is_empty())
        .collect()
}

fn image_object_key(identity: &Identity, file_extension: Option<&str>) -> String {
    let extension = file_extension
        .map(|ext| ext.trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "jpg".to_string());

    format!("scans/{}/{}.{}", identity.id(), generate_uuid_v7(), extension)
}

impl<U, S, CL, TX, IS, II, HC, T> ScanService for Service<U, S, CL, TX, IS, II, HC, T>
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
    #[instrument(skip(self, input), fields(size = input.image_data.len()))]
    async fn extract_ingredients(
        &self,
        input: ExtractIngredientsInput,
    ) -> Result<Vec<String>, CoreError> {
        self.read_label(input.image_data).await
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id(), count = input.ingredients.len()))]
    async fn analyze_ingredients(
        &self,
        identity: Identity,
        input: AnalyzeIngredientsInput,
    ) -> Result<ScanAnalysis, CoreError> {
        let ingredients = normalize_ingredients(input.ingredients);

        self.record_scan(&identity, ingredients, None).await
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id(), size = input.image_data.len()))]
    async fn full_scan(
        &self,
        identity: Identity,
        input: ScanImageInput,
    ) -> Result<ScanAnalysis, CoreError> {
        let ingredients = self.read_label(input.image_data.clone()).await?;

        let object_key = image_object_key(&identity, input.file_extension.as_deref());
        self.image_storage
            .put_image(&object_key, input.image_data, &input.content_type)
            .await?;

        match self
            .record_scan(&identity, ingredients, Some(object_key.clone()))
            .await
        {
            Ok(analysis) => Ok(analysis),
            Err(e) => {
                self.discard_image(&object_key).await;
                Err(e)
            }
        }
    }

    async fn get_scan_history(
        &self,
        identity: Identity,
        filter: GetScanHistoryFilter,
    ) -> Result<Vec<Scan>, CoreError> {
        let filter = GetScanHistoryFilter {
            limit: filter.limit.map(|limit| limit.min(MAX_HISTORY_LIMIT)),
            ..filter
        };

        self.scan_repository.get_by_user(identity.id(), filter).await
    }

    async fn get_scan(&self, identity: Identity, input: GetScanInput) -> Result<Scan, CoreError> {
        self.scan_repository
            .get_by_id(input.scan_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{
            InMemoryScanRepository, test_identity, test_service, test_service_with_scans,
        },
        recommendation::entities::RecommendationTag,
    };
    use bytes::Bytes;
    use uuid::Uuid;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn analyze_classifies_scores_and_persists() {
        let service = test_service();
        let identity = test_identity();

        let analysis = service
            .analyze_ingredients(
                identity.clone(),
                AnalyzeIngredientsInput {
                    ingredients: strings(&["sugar", "msg", "salt"]),
                },
            )
            .await
            .unwrap();

        assert_eq!(analysis.result.recommendation, RecommendationTag::Unhealthy);
        assert_eq!(analysis.result.health_score, 4);
        assert_eq!(analysis.result.top_offenders, vec!["msg", "salt"]);

        let stored = service
            .get_scan(
                identity,
                GetScanInput {
                    scan_id: analysis.scan_id,
                },
            )
            .await
            .unwrap();
        assert_eq!(stored.ingredients_text, "sugar, msg, salt");
        assert_eq!(stored.ingredients, analysis.ingredients);
        assert_eq!(stored.recommendation, RecommendationTag::Unhealthy);
        assert_eq!(stored.health_score, 4);
        assert!(stored.image_object_key.is_none());
    }

    #[tokio::test]
    async fn unclassifiable_ingredients_are_kept_but_ignored() {
        let service = test_service();

        let analysis = service
            .analyze_ingredients(
                test_identity(),
                AnalyzeIngredientsInput {
                    ingredients: strings(&["msg", "mystery powder", "salt"]),
                },
            )
            .await
            .unwrap();

        assert_eq!(analysis.ingredients.len(), 3);
        assert!(analysis.ingredients[1].is_failed());
        assert_eq!(analysis.result.health_score, 4);
        assert_eq!(analysis.result.recommendation, RecommendationTag::Unhealthy);
    }

    #[tokio::test]
    async fn blank_ingredients_are_dropped_before_classification() {
        let service = test_service();

        let analysis = service
            .analyze_ingredients(
                test_identity(),
                AnalyzeIngredientsInput {
                    ingredients: strings(&["  ", " vitamin c ", ""]),
                },
            )
            .await
            .unwrap();

        assert_eq!(analysis.ingredients.len(), 1);
        assert_eq!(analysis.ingredients[0].name, "vitamin c");
        assert_eq!(analysis.result.health_score, 10);
    }

    #[tokio::test]
    async fn full_scan_reads_label_and_stores_image() {
        let service = test_service();
        let identity = test_identity();

        let analysis = service
            .full_scan(
                identity.clone(),
                ScanImageInput {
                    image_data: Bytes::from_static(b"label-image"),
                    file_extension: Some("PNG".to_string()),
                    content_type: "image/png".to_string(),
                },
            )
            .await
            .unwrap();

        let names: Vec<_> = analysis.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["palm oil", "white flour", "salt"]);
        assert_eq!(
            analysis.result.recommendation,
            RecommendationTag::ConsumeInModeration
        );

        let stored_keys = service.image_storage.keys();
        assert_eq!(stored_keys.len(), 1);
        assert!(stored_keys[0].starts_with(&format!("scans/{}/", identity.id())));
        assert!(stored_keys[0].ends_with(".png"));

        let scan = service
            .get_scan(
                identity,
                GetScanInput {
                    scan_id: analysis.scan_id,
                },
            )
            .await
            .unwrap();
        assert_eq!(scan.image_object_key.as_deref(), Some(stored_keys[0].as_str()));
    }

    #[tokio::test]
    async fn failed_insert_removes_the_uploaded_image() {
        let service = test_service_with_scans(InMemoryScanRepository::failing());

        let result = service
            .full_scan(
                test_identity(),
                ScanImageInput {
                    image_data: Bytes::from_static(b"label-image"),
                    file_extension: Some("jpg".to_string()),
                    content_type: "image/jpeg".to_string(),
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::InternalServerError));
        assert!(service.image_storage.keys().is_empty());
    }

    #[tokio::test]
    async fn unreadable_image_is_an_error_and_nothing_is_stored() {
        let service = test_service();

        let result = service
            .full_scan(
                test_identity(),
                ScanImageInput {
                    image_data: Bytes::new(),
                    file_extension: None,
                    content_type: "image/jpeg".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
        assert!(service.image_storage.keys().is_empty());
        assert!(service.scan_repository.is_empty());
    }

    #[tokio::test]
    async fn extract_only_returns_tokens_without_persisting() {
        let service = test_service();

        let tokens = service
            .extract_ingredients(ExtractIngredientsInput {
                image_data: Bytes::from_static(b"label-image"),
            })
            .await
            .unwrap();

        assert_eq!(tokens, vec!["palm oil", "white flour", "salt"]);
        assert!(service.scan_repository.is_empty());
    }

    #[tokio::test]
    async fn history_is_scoped_to_caller_and_newest_first() {
        let service = test_service();
        let identity = test_identity();

        for ingredients in [&["sugar"][..], &["salt", "msg"][..]] {
            service
                .analyze_ingredients(
                    identity.clone(),
                    AnalyzeIngredientsInput {
                        ingredients: strings(ingredients),
                    },
                )
                .await
                .unwrap();
        }
        service
            .analyze_ingredients(
                test_identity(),
                AnalyzeIngredientsInput {
                    ingredients: strings(&["water"]),
                },
            )
            .await
            .unwrap();

        let history = service
            .get_scan_history(identity, GetScanHistoryFilter::default())
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].ingredients_text, "salt, msg");
        assert_eq!(history[1].ingredients_text, "sugar");
    }

    #[tokio::test]
    async fn scans_of_other_users_are_not_found() {
        let service = test_service();

        let analysis = service
            .analyze_ingredients(
                test_identity(),
                AnalyzeIngredientsInput {
                    ingredients: strings(&["sugar"]),
                },
            )
            .await
            .unwrap();

        let result = service
            .get_scan(
                test_identity(),
                GetScanInput {
                    scan_id: analysis.scan_id,
                },
            )
            .await;
        assert_eq!(result, Err(CoreError::NotFound));

        let missing = service
            .get_scan(
                test_identity(),
                GetScanInput {
                    scan_id: Uuid::new_v4(),
                },
            )
            .await;
        assert_eq!(missing, Err(CoreError::NotFound));
    }

    #[test]
    fn object_key_falls_back_to_jpg_for_odd_extensions() {
        let identity = test_identity();

        assert!(image_object_key(&identity, Some("../../etc")).ends_with(".jpg"));
        assert!(image_object_key(&identity, None).ends_with(".jpg"));
        assert!(image_object_key(&identity, Some(".JPEG")).ends_with(".jpeg"));
    }
}
