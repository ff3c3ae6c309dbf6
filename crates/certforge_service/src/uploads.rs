//! The signed direct-upload handshake. The client uploads photo bytes
//! straight to the image host with a short-lived signature; only the
//! resulting hosted URL ever reaches this system.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::UploadConfig;
use crate::{CertService, ServiceError};

#[derive(Debug, Clone, Serialize)]
pub struct UploadTicket {
    pub signature: String,
    pub timestamp: i64,
    pub cloud_name: String,
    pub api_key: String,
    pub folder: String,
}

/// SHA-256 over the sorted parameter string with the API secret appended,
/// hex encoded — the image host recomputes the same digest to accept the
/// upload. The timestamp bounds the ticket's lifetime.
pub fn sign_upload(config: &UploadConfig, timestamp: i64) -> UploadTicket {
    let to_sign = format!("folder={}&timestamp={}", config.folder, timestamp);

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(config.api_secret.as_bytes());

    UploadTicket {
        signature: hex::encode(hasher.finalize()),
        timestamp,
        cloud_name: config.cloud_name.clone(),
        api_key: config.api_key.clone(),
        folder: config.folder.clone(),
    }
}

impl CertService {
    pub fn issue_upload_ticket(&self) -> Result<UploadTicket, ServiceError> {
        let config = self.config.upload.as_ref().ok_or_else(|| {
            ServiceError::Internal("upload signing is not configured".to_string())
        })?;
        Ok(sign_upload(config, chrono::Utc::now().timestamp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> UploadConfig {
        UploadConfig {
            cloud_name: "demo".to_string(),
            api_key: "123456789".to_string(),
            api_secret: "shhh".to_string(),
            folder: "e-verification/users".to_string(),
        }
    }

    #[test]
    fn signatures_are_deterministic_for_a_timestamp() {
        let config = test_config();
        let a = sign_upload(&config, 1_760_000_000);
        let b = sign_upload(&config, 1_760_000_000);
        assert_eq!(a.signature, b.signature);
        assert_eq!(a.signature.len(), 64); // hex-encoded SHA-256
        assert!(a.signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_depends_on_timestamp_and_secret() {
        let config = test_config();
        let base = sign_upload(&config, 1_760_000_000);
        assert_ne!(base.signature, sign_upload(&config, 1_760_000_001).signature);

        let mut other = test_config();
        other.api_secret = "different".to_string();
        assert_ne!(base.signature, sign_upload(&other, 1_760_000_000).signature);
    }

    #[test]
    fn ticket_echoes_the_public_upload_parameters() {
        let ticket = sign_upload(&test_config(), 42);
        assert_eq!(ticket.cloud_name, "demo");
        assert_eq!(ticket.api_key, "123456789");
        assert_eq!(ticket.folder, "e-verification/users");
        assert_eq!(ticket.timestamp, 42);
    }
}
