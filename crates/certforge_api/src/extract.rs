use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, StatusCode};

use certforge_service::auth::Claims;

use crate::AppState;

/// Present on every admin-gated handler. Extraction fails with 401 unless the
/// request carries a valid bearer token.
pub struct AdminClaims(pub Claims);

fn unauthorized() -> (StatusCode, String) {
    (
        StatusCode::UNAUTHORIZED,
        "Missing or invalid bearer token".to_string(),
    )
}

impl FromRequestParts<AppState> for AdminClaims {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(unauthorized)?;

        let claims = state
            .service
            .validate_token(token)
            .map_err(|_| unauthorized())?;

        Ok(AdminClaims(claims))
    }
}
