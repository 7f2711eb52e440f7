use std::str::FromStr;

use chrono::NaiveDateTime;
use kernel::model::{id::UserId, role::UserRole, user::User};
use shared::error::{AppError, AppResult};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub avatar_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl UserRow {
    // role is stored as text; a row carrying a name outside the closed
    // enumeration cannot become a domain user.
    pub fn try_into_user(self) -> AppResult<User> {
        let UserRow {
            user_id,
            email,
            first_name,
            last_name,
            phone,
            role,
            avatar_url,
            created_at,
            updated_at,
        } = self;
        let role = UserRole::from_str(role.as_str())
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        Ok(User {
            id: user_id,
            email,
            first_name,
            last_name,
            phone,
            role,
            avatar_url,
            created_at,
            updated_at,
        })
    }
}
