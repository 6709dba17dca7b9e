use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use ingredient_scanner_core::domain::authentication::{
    entities::Identity, ports::AuthService, value_objects::AuthorizeRequestInput,
};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Option<String> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()?;

    let token = bearer.token().trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Resolves the bearer token, when present, into an [`Identity`] request extension.
///
/// Requests without a token pass through untouched; a token that fails
/// validation is rejected here so handlers never see it.
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();

    if let Some(token) = extract_token_from_bearer(&mut parts).await {
        let identity = state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
            .map_err(|e| {
                tracing::debug!("Rejected bearer token: {}", e);
                ApiError::from(e)
            })?;

        parts.extensions.insert(identity);
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Identity of an authenticated caller; 401 when the request carries none.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}

pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}
