use axum::http::StatusCode;

use certforge_service::ServiceError;

/// One mapping from service outcomes to HTTP responses, shared by every
/// handler. NotFound and Conflict are expected user-facing outcomes and are
/// surfaced verbatim; internals are logged and masked.
pub fn map_service_error(err: ServiceError) -> (StatusCode, String) {
    match err {
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "Record not found".to_string()),
        ServiceError::Conflict(_) => (
            StatusCode::CONFLICT,
            "A record with this certificate or reference number already exists".to_string(),
        ),
        ServiceError::Unauthorized => (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()),
        ServiceError::Validation(errors) => {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            (StatusCode::UNPROCESSABLE_ENTITY, messages.join("; "))
        }
        ServiceError::Asset(msg) => {
            tracing::error!("render asset failure: {}", msg);
            (
                StatusCode::BAD_GATEWAY,
                "A required image or font could not be loaded; please try again".to_string(),
            )
        }
        ServiceError::Internal(msg) => {
            tracing::error!("internal error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_outcomes_map_to_their_status_codes() {
        assert_eq!(
            map_service_error(ServiceError::NotFound).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            map_service_error(ServiceError::Conflict("certificate_no".into())).0,
            StatusCode::CONFLICT
        );
        assert_eq!(
            map_service_error(ServiceError::Unauthorized).0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            map_service_error(ServiceError::Validation(vec![])).0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            map_service_error(ServiceError::Asset("logo".into())).0,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            map_service_error(ServiceError::Internal("boom".into())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
