use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::UserId, user::User};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT
                    user_id,
                    email,
                    first_name,
                    last_name,
                    phone,
                    role,
                    avatar_url,
                    created_at,
                    updated_at
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(UserRow::try_into_user).transpose()
    }
}
