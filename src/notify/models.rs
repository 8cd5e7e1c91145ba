use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A notification addressed to a single user.
///
/// Only ever created as a side effect of an answer or comment; clients
/// can only read it and flip `is_read`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub notification_id: i64,
    pub message: String,
    pub user_id: i64,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
