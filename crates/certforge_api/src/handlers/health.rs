use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::AppState;

/// Liveness plus a `SELECT 1` round-trip so the hosted database connection
/// stays warm between real requests.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    match sqlx::query("SELECT 1").execute(&state.service.pool).await {
        Ok(_) => Ok(Json(serde_json::json!({ "status": "ok" }))),
        Err(e) => {
            tracing::error!("keep-alive query failed: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database connection failed".to_string(),
            ))
        }
    }
}
