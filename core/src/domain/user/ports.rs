use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, user::entities::User};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_mobile(
        &self,
        mobile: &str,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_otp(
        &self,
        user_id: Uuid,
        otp_code: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn mark_verified(
        &self,
        user_id: Uuid,
        token: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
