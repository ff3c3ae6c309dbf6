use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use certforge_core::models::certificate::{CertificateInput, CertificateRecord};

use crate::error::map_service_error;
use crate::extract::AdminClaims;
use crate::AppState;

pub async fn list(
    _claims: AdminClaims,
    State(state): State<AppState>,
) -> Result<Json<Vec<CertificateRecord>>, (StatusCode, String)> {
    match state.service.list_certificates().await {
        Ok(records) => Ok(Json(records)),
        Err(e) => Err(map_service_error(e)),
    }
}

pub async fn create(
    _claims: AdminClaims,
    State(state): State<AppState>,
    Json(input): Json<CertificateInput>,
) -> Result<(StatusCode, Json<CertificateRecord>), (StatusCode, String)> {
    match state.service.create_certificate(input).await {
        Ok(record) => Ok((StatusCode::CREATED, Json(record))),
        Err(e) => Err(map_service_error(e)),
    }
}

pub async fn update(
    _claims: AdminClaims,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CertificateInput>,
) -> Result<Json<CertificateRecord>, (StatusCode, String)> {
    match state.service.update_certificate(id, input).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => Err(map_service_error(e)),
    }
}

pub async fn remove(
    _claims: AdminClaims,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    match state.service.delete_certificate(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(map_service_error(e)),
    }
}
