//! Answer handlers

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::error::{ApiResult, created, ok};
use super::super::state::AppState;
use super::super::types::{ApiResponse, MessageData};
use crate::account::User;
use crate::classroom::{Answer, ClassroomService};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    #[schema(example = "42")]
    pub content: String,
    pub assignment_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GradeRequest {
    #[schema(example = 5)]
    pub grade: i32,
}

/// Submit an answer (students only)
///
/// POST /answers
#[utoipa::path(
    post,
    path = "/answers",
    request_body = SubmitAnswerRequest,
    responses(
        (status = 201, description = "Answer created, teacher notified", body = ApiResponse<Answer>),
        (status = 403, description = "Caller is a teacher"),
        (status = 404, description = "Assignment not found")
    ),
    security(("bearer_token" = [])),
    tag = "Answers"
)]
pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(req): Json<SubmitAnswerRequest>,
) -> ApiResult<Answer> {
    let answer =
        ClassroomService::submit_answer(state.db.pool(), &user, &req.content, req.assignment_id)
            .await?;
    created(answer)
}

/// Read a single answer
///
/// GET /answers/{answer_id}
#[utoipa::path(
    get,
    path = "/answers/{answer_id}",
    params(("answer_id" = i64, Path, description = "Answer ID")),
    responses(
        (status = 200, description = "The answer", body = ApiResponse<Answer>),
        (status = 404, description = "Answer not found")
    ),
    security(("bearer_token" = [])),
    tag = "Answers"
)]
pub async fn get_answer(
    State(state): State<Arc<AppState>>,
    Path(answer_id): Path<i64>,
) -> ApiResult<Answer> {
    let answer = ClassroomService::get_answer(state.db.pool(), answer_id).await?;
    ok(answer)
}

/// Grade an answer (teachers only; regrading overwrites)
///
/// PUT /answers/{answer_id}/grade
#[utoipa::path(
    put,
    path = "/answers/{answer_id}/grade",
    params(("answer_id" = i64, Path, description = "Answer ID")),
    request_body = GradeRequest,
    responses(
        (status = 200, description = "Grade stored", body = ApiResponse<MessageData>),
        (status = 403, description = "Caller is not a teacher"),
        (status = 404, description = "Answer not found")
    ),
    security(("bearer_token" = [])),
    tag = "Answers"
)]
pub async fn grade_answer(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(answer_id): Path<i64>,
    Json(req): Json<GradeRequest>,
) -> ApiResult<MessageData> {
    ClassroomService::grade_answer(state.db.pool(), &user, answer_id, req.grade).await?;
    ok(MessageData {
        message: "Grade updated.".to_string(),
    })
}
