//! Notification handlers

use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, State},
};

use super::super::error::{ApiError, ApiResult, ok};
use super::super::state::AppState;
use super::super::types::{ApiResponse, MessageData};
use crate::account::User;
use crate::notify::{Notification, NotificationRepository};

/// The caller's notifications, newest first
///
/// GET /notifications
#[utoipa::path(
    get,
    path = "/notifications",
    responses(
        (status = 200, description = "Caller's notifications", body = ApiResponse<Vec<Notification>>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_token" = [])),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> ApiResult<Vec<Notification>> {
    let items = NotificationRepository::list_for_user(state.db.pool(), user.user_id).await?;
    ok(items)
}

/// Mark one of the caller's notifications as read
///
/// PUT /notifications/{notification_id}/read
#[utoipa::path(
    put,
    path = "/notifications/{notification_id}/read",
    params(("notification_id" = i64, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Marked as read", body = ApiResponse<MessageData>),
        (status = 404, description = "Notification missing or owned by someone else")
    ),
    security(("bearer_token" = [])),
    tag = "Notifications"
)]
pub async fn mark_notification_read(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(notification_id): Path<i64>,
) -> ApiResult<MessageData> {
    let rows =
        NotificationRepository::mark_read(state.db.pool(), notification_id, user.user_id).await?;
    if rows == 0 {
        return ApiError::not_found("Notification not found.").into_err();
    }
    ok(MessageData {
        message: "Notification marked as read.".to_string(),
    })
}
