use chrono::NaiveDateTime;

use crate::model::{id::UserId, role::UserRole};

/// Profile record as the store owns it. Timestamps are civil date-times in
/// the service's local time zone; the store keeps `updated_at >= created_at`.
/// Credential material never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
