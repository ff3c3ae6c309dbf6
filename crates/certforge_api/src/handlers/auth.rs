use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use certforge_service::auth::LoginResponse;

use crate::error::map_service_error;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    match state
        .service
        .login(&request.username, &request.password)
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(map_service_error(e)),
    }
}
