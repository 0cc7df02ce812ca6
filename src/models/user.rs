use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Server-generated user identifier: 24 lowercase hex characters, a
/// 4-byte big-endian unix-seconds prefix followed by 8 random bytes.
/// Stored as TEXT; never client-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct UserId(String);

impl UserId {
    /// Mints a fresh identifier. The time prefix keeps identifiers
    /// loosely ordered by creation; the random suffix keeps concurrent
    /// creations from colliding.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&(Utc::now().timestamp() as u32).to_be_bytes());
        rand::thread_rng().fill(&mut bytes[4..]);
        UserId(hex::encode(bytes))
    }

    /// Accepts exactly 24 hex characters, either case, and normalizes to
    /// lowercase. Anything else refers to no record.
    pub fn parse(value: &str) -> Option<Self> {
        if value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(UserId(value.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "companyname")]
    pub company_name: String,
    pub email: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}
