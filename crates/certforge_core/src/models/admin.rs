use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An admin login account. The password hash never leaves the server;
/// responses carry [`AdminProfile`] instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminAccount {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminProfile {
    pub id: Uuid,
    pub username: String,
}

impl From<AdminAccount> for AdminProfile {
    fn from(account: AdminAccount) -> Self {
        Self {
            id: account.id,
            username: account.username,
        }
    }
}
