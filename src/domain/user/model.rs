use chrono::{DateTime, Utc};

/// Gate operator account.
///
/// `interchange` is the operator's home station; it becomes the default
/// station for entry/exit requests made with their token.
#[derive(Clone, Debug)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub interchange: String,
    pub created_at: DateTime<Utc>,
}
