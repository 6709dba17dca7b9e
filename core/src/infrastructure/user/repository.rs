use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::User, ports::UserRepository},
    },
    entity::users::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_by_mobile(&self, mobile: &str) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Mobile.eq(mobile))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by mobile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn create(&self, user: User) -> Result<User, CoreError> {
        let active_model = ActiveModel {
            id: Set(user.id),
            mobile: Set(user.mobile.clone()),
            otp_code: Set(user.otp_code.clone()),
            token: Set(user.token.clone()),
            is_verified: Set(user.is_verified),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(User::from(created))
    }

    async fn update_otp(&self, user_id: Uuid, otp_code: String) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(Column::OtpCode, Expr::value(Some(otp_code)))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update user OTP: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn mark_verified(&self, user_id: Uuid, token: String) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(Column::IsVerified, Expr::value(true))
            .col_expr(Column::Token, Expr::value(Some(token)))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to mark user verified: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
