use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        scan::{entities::Scan, ports::ScanRepository, value_objects::GetScanHistoryFilter},
    },
    entity::scans::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresScanRepository {
    pub db: DatabaseConnection,
}

impl PostgresScanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ScanRepository for PostgresScanRepository {
    async fn create_scan(&self, scan: Scan) -> Result<Scan, CoreError> {
        let result_json = serde_json::to_value(&scan.ingredients).map_err(|e| {
            error!("Failed to serialize ingredients: {}", e);
            CoreError::InternalServerError
        })?;

        let created = Entity::insert(ActiveModel {
            id: Set(scan.id),
            user_id: Set(scan.user_id),
            image_object_key: Set(scan.image_object_key),
            ingredients_text: Set(scan.ingredients_text),
            result_json: Set(result_json),
            recommendation: Set(scan.recommendation.as_str().to_string()),
            health_score: Set(scan.health_score),
            created_at: Set(scan.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Scan::from)
        .map_err(|e| {
            error!("Failed to create scan: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetScanHistoryFilter,
    ) -> Result<Vec<Scan>, CoreError> {
        let mut query = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let scans = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch scan history: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Scan::from)
            .collect();

        Ok(scans)
    }

    async fn get_by_id(&self, scan_id: Uuid, user_id: Uuid) -> Result<Option<Scan>, CoreError> {
        let scan = Entity::find()
            .filter(Column::Id.eq(scan_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get scan: {}", e);
                CoreError::InternalServerError
            })?
            .map(Scan::from);

        Ok(scan)
    }
}
