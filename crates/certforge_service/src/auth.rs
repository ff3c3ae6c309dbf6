//! Admin credential checks and bearer-token issuance.
//!
//! The admin gate is a capability check: whoever presents a valid token is
//! the admin. There are no roles and no per-user permissions.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use certforge_core::models::admin::AdminProfile;
use certforge_db::repository::AdminRepository;

use crate::{CertService, ServiceError};

/// Hash a password using argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored argon2id hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Manages bearer token creation and validation.
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl JwtManager {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    pub fn issue(&self, admin: &AdminProfile) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: admin.id.to_string(),
            username: admin.username.clone(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
    }

    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminProfile,
}

impl CertService {
    /// Checks credentials and returns a fresh bearer token. Unknown username
    /// and wrong password are indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ServiceError> {
        let repo = AdminRepository::new(self.pool.clone());

        let account = match repo.find_by_username(username).await {
            Ok(account) => account,
            Err(certforge_db::Error::NotFound) => return Err(ServiceError::Unauthorized),
            Err(e) => return Err(e.into()),
        };

        let valid = verify_password(password, &account.password_hash)
            .map_err(|_| ServiceError::Unauthorized)?;
        if !valid {
            return Err(ServiceError::Unauthorized);
        }

        let admin = AdminProfile::from(account);
        let token = self
            .jwt
            .issue(&admin)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(LoginResponse { token, admin })
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, ServiceError> {
        self.jwt.validate(token).map_err(|_| ServiceError::Unauthorized)
    }

    /// Bootstrap path for the `create-admin` command.
    pub async fn create_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminProfile, ServiceError> {
        let hash = hash_password(password).map_err(|e| ServiceError::Internal(e.to_string()))?;
        let repo = AdminRepository::new(self.pool.clone());
        let account = repo.create(username, &hash).await?;
        Ok(AdminProfile::from(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn hash_and_verify() {
        let hash = hash_password("mysecret").unwrap();
        assert!(verify_password("mysecret", &hash).unwrap());
        assert!(!verify_password("wrongpassword", &hash).unwrap());
    }

    #[test]
    fn different_passwords_different_hashes() {
        let h1 = hash_password("password1").unwrap();
        let h2 = hash_password("password2").unwrap();
        assert_ne!(h1, h2);
    }

    #[test]
    fn issued_tokens_validate_and_carry_the_username() {
        let jwt = JwtManager::new(b"test-secret", 3600);
        let admin = AdminProfile {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
        };
        let token = jwt.issue(&admin).unwrap();
        let claims = jwt.validate(&token).unwrap();
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.sub, admin.id.to_string());
    }

    #[test]
    fn tokens_from_another_secret_are_rejected() {
        let jwt = JwtManager::new(b"secret-a", 3600);
        let other = JwtManager::new(b"secret-b", 3600);
        let admin = AdminProfile {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
        };
        let token = other.issue(&admin).unwrap();
        assert!(jwt.validate(&token).is_err());
    }
}
