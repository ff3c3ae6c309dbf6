use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use certforge_service::uploads::UploadTicket;

use crate::error::map_service_error;
use crate::extract::AdminClaims;
use crate::AppState;

/// Issues a short-lived signature for a direct upload to the image host.
/// The browser sends the photo bytes straight there; this server only ever
/// sees the hosted URL that comes back.
pub async fn signature(
    _claims: AdminClaims,
    State(state): State<AppState>,
) -> Result<Json<UploadTicket>, (StatusCode, String)> {
    match state.service.issue_upload_ticket() {
        Ok(ticket) => Ok(Json(ticket)),
        Err(e) => Err(map_service_error(e)),
    }
}
