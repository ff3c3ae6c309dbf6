use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The keyed lookup matched nothing. Callers must be able to tell this
    /// apart from a transport failure, so it is its own variant.
    #[error("record not found")]
    NotFound,

    /// A unique key (certificate number or reference number) collided with
    /// an existing row.
    #[error("duplicate key: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Folds unique-constraint violations into [`Error::Conflict`]; everything
/// else stays a database error.
pub fn map_write_error(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return Error::Conflict(
                db_err
                    .constraint()
                    .unwrap_or("certificate_no or reference_no")
                    .to_string(),
            );
        }
    }
    Error::Database(err)
}
