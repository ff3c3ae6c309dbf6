//! Orchestration over the store, the render pipeline, and the external
//! image host. HTTP handlers and CLI commands both drive this service.

pub mod auth;
pub mod config;
pub mod error;
pub mod records;
pub mod render;
pub mod uploads;

use std::sync::Arc;

use sqlx::PgPool;

use auth::JwtManager;
pub use config::{Config, UploadConfig};
pub use error::ServiceError;

#[derive(Clone)]
pub struct CertService {
    pub pool: PgPool,
    http: reqwest::Client,
    jwt: JwtManager,
    pub config: Arc<Config>,
}

impl CertService {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .expect("failed to build HTTP client");
        let jwt = JwtManager::new(config.jwt_secret.as_bytes(), config.token_ttl_secs);

        Self {
            pool,
            http,
            jwt,
            config: Arc::new(config),
        }
    }
}
