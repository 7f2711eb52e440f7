use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::UserId, user::User};

/// Read contract of the user store. Lookups are idempotent and give no
/// ordering guarantee with respect to concurrent writes to the same key.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
}
