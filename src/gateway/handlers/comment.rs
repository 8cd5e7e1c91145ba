//! Comment handlers

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::error::{ApiResult, created, ok};
use super::super::state::AppState;
use super::super::types::ApiResponse;
use crate::account::User;
use crate::classroom::{ClassroomService, Comment};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[schema(example = "Please show your work.")]
    pub content: String,
    pub answer_id: i64,
    /// Accepted for wire compatibility; the stored snapshot always
    /// comes from the authenticated caller's role
    #[serde(default)]
    pub is_teacher: bool,
}

/// Post a comment on an answer
///
/// POST /comments
#[utoipa::path(
    post,
    path = "/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created, counterpart notified", body = ApiResponse<Comment>),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Answer not found")
    ),
    security(("bearer_token" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(req): Json<CreateCommentRequest>,
) -> ApiResult<Comment> {
    if req.is_teacher != user.is_teacher {
        tracing::debug!(
            "Ignoring client-supplied isTeacher={} for user {}",
            req.is_teacher,
            user.user_id
        );
    }

    let comment =
        ClassroomService::post_comment(state.db.pool(), &user, &req.content, req.answer_id).await?;
    created(comment)
}

/// List comments for an answer (no auth required)
///
/// GET /answers/{answer_id}/comments
#[utoipa::path(
    get,
    path = "/answers/{answer_id}/comments",
    params(("answer_id" = i64, Path, description = "Answer ID")),
    responses(
        (status = 200, description = "Comment list", body = ApiResponse<Vec<Comment>>)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(answer_id): Path<i64>,
) -> ApiResult<Vec<Comment>> {
    let comments = ClassroomService::list_comments(state.db.pool(), answer_id).await?;
    ok(comments)
}
