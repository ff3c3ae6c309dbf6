use thiserror::Error;

use certforge_core::validation::ValidationError;
use certforge_render::RenderError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,

    #[error("a record with this certificate or reference number already exists")]
    Conflict(String),

    #[error("invalid credentials")]
    Unauthorized,

    /// Blocking rule violations. Warnings never end up here.
    #[error("validation failed")]
    Validation(Vec<ValidationError>),

    /// A photo, logo, font, or QR code could not be produced. Fatal to the
    /// render attempt only; the user may retry.
    #[error("asset unavailable: {0}")]
    Asset(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<certforge_db::Error> for ServiceError {
    fn from(err: certforge_db::Error) -> Self {
        match err {
            certforge_db::Error::NotFound => Self::NotFound,
            certforge_db::Error::Conflict(key) => Self::Conflict(key),
            certforge_db::Error::Database(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<RenderError> for ServiceError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Asset(msg) | RenderError::Qr(msg) => Self::Asset(msg),
            RenderError::Encode(msg) | RenderError::Document(msg) => Self::Internal(msg),
        }
    }
}
