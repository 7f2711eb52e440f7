use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::user::UserResponse;

/// Single read endpoint of the service. The id is passed to the store
/// verbatim; the handler only projects the hit or classifies the miss.
pub async fn show_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_id(user_id.clone())
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound(format!(
                "user {user_id} was not found"
            ))),
        })
}
