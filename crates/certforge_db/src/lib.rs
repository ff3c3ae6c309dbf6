pub mod error;
pub mod repository;
pub mod schema;

pub use error::{Error, Result};
