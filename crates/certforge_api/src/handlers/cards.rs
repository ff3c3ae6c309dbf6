use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::map_service_error;
use crate::AppState;

/// Looks the record up by reference number, runs the full render pipeline,
/// and streams the two-page PDF back with its deterministic filename.
pub async fn download_by_reference(
    State(state): State<AppState>,
    Path(reference_no): Path<String>,
) -> Result<Response, (StatusCode, String)> {
    let record = state
        .service
        .find_by_reference(&reference_no)
        .await
        .map_err(map_service_error)?;

    let document = state
        .service
        .render_card(&record)
        .await
        .map_err(map_service_error)?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.filename),
        ),
    ];
    Ok((headers, document.bytes).into_response())
}
