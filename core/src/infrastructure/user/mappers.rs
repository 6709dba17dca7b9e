use crate::{domain::user::entities::User, entity::users};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            mobile: model.mobile.clone(),
            otp_code: model.otp_code.clone(),
            token: model.token.clone(),
            is_verified: model.is_verified,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}
