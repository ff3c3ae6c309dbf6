use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use certforge_core::models::certificate::CertificateRecord;

use crate::error::map_service_error;
use crate::AppState;

/// Self-service verification: the holder types the reference number from
/// their card into the public search box.
pub async fn by_reference(
    State(state): State<AppState>,
    Path(reference_no): Path<String>,
) -> Result<Json<CertificateRecord>, (StatusCode, String)> {
    match state.service.find_by_reference(&reference_no).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => Err(map_service_error(e)),
    }
}

/// Scan verification: the QR code on the card back links here with the
/// certificate number.
pub async fn by_certificate(
    State(state): State<AppState>,
    Path(certificate_no): Path<String>,
) -> Result<Json<CertificateRecord>, (StatusCode, String)> {
    match state.service.find_by_certificate(&certificate_no).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => Err(map_service_error(e)),
    }
}
