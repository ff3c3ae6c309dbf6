use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use certforge_render::layout::CardStatics;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Origin the verification URL in the QR code points at.
    pub public_origin: String,
    /// Directory holding the logo and the card font faces.
    pub assets_dir: PathBuf,
    /// Ceiling on external photo fetches; expiry fails the render, never hangs.
    pub fetch_timeout: Duration,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    /// Absent when the image host credentials are not configured; the
    /// signature endpoint reports that instead of signing with junk.
    pub upload: Option<UploadConfig>,
    pub card_statics: CardStatics,
}

#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env if present

        let upload = match (
            env::var("CLOUDINARY_CLOUD_NAME"),
            env::var("CLOUDINARY_API_KEY"),
            env::var("CLOUDINARY_API_SECRET"),
        ) {
            (Ok(cloud_name), Ok(api_key), Ok(api_secret)) => Some(UploadConfig {
                cloud_name,
                api_key,
                api_secret,
                folder: env::var("CLOUDINARY_UPLOAD_FOLDER")
                    .unwrap_or_else(|_| "e-verification/users".to_string()),
            }),
            _ => None,
        };

        let mut card_statics = CardStatics::default();
        if let Ok(v) = env::var("CARD_CONTACT_PHONE") {
            card_statics.contact_phone = v;
        }
        if let Ok(v) = env::var("CARD_CONTACT_EMAIL") {
            card_statics.contact_email = v;
        }
        if let Ok(v) = env::var("CARD_VERIFY_DOMAIN") {
            card_statics.verify_domain = v;
        }
        if let Ok(v) = env::var("CARD_COMPLETION_LINE") {
            card_statics.completion_line = v;
        }

        Ok(Config {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,

            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),

            public_origin: env::var("PUBLIC_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            assets_dir: env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets")),

            fetch_timeout: Duration::from_secs(
                env::var("FETCH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),

            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-me".to_string()),

            token_ttl_secs: env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8 * 60 * 60),

            upload,
            card_statics,
        })
    }
}
