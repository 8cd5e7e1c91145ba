//! Assignment handlers

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
use crate::classroom::{Answer, Assignment, ClassroomService};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    #[schema(example = "HW1")]
    pub title: String,
    #[schema(example = "Solve exercises 1 through 4.")]
    pub description: String,
    pub subject_id: i64,
}

/// Create an assignment (teachers only)
///
/// POST /assignments
#[utoipa::path(
    post,
    path = "/assignments",
    request_body = CreateAssignmentRequest,
    responses(
        (status = 201, description = "Assignment created", body = ApiResponse<Assignment>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not a teacher")
    ),
    security(("bearer_token" = [])),
    tag = "Assignments"
)]
pub async fn create_assignment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(req): Json<CreateAssignmentRequest>,
) -> ApiResult<Assignment> {
    let assignment = ClassroomService::create_assignment(
        state.db.pool(),
        &user,
        &req.title,
        &req.description,
        req.subject_id,
    )
    .await?;
    created(assignment)
}

/// List the caller's own assignments (teachers only)
///
/// GET /assignments
#[utoipa::path(
    get,
    path = "/assignments",
    responses(
        (status = 200, description = "Assignments authored by the caller", body = ApiResponse<Vec<Assignment>>),
        (status = 403, description = "Caller is not a teacher")
    ),
    security(("bearer_token" = [])),
    tag = "Assignments"
)]
pub async fn list_assignments(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> ApiResult<Vec<Assignment>> {
    let assignments = ClassroomService::list_own_assignments(state.db.pool(), &user).await?;
    ok(assignments)
}

/// List open assignments (students only)
///
/// GET /my-assignments
#[utoipa::path(
    get,
    path = "/my-assignments",
    responses(
        (status = 200, description = "Assignments available to answer", body = ApiResponse<Vec<Assignment>>),
        (status = 403, description = "Caller is a teacher")
    ),
    security(("bearer_token" = [])),
    tag = "Assignments"
)]
pub async fn list_my_assignments(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> ApiResult<Vec<Assignment>> {
    let assignments = ClassroomService::list_open_assignments(state.db.pool(), &user).await?;
    ok(assignments)
}

/// List answers submitted for one of the caller's assignments
///
/// GET /assignments/{assignment_id}/answers
#[utoipa::path(
    get,
    path = "/assignments/{assignment_id}/answers",
    params(("assignment_id" = i64, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Answers for the assignment", body = ApiResponse<Vec<Answer>>),
        (status = 403, description = "Caller is not a teacher"),
        (status = 404, description = "Assignment missing or not owned by the caller")
    ),
    security(("bearer_token" = [])),
    tag = "Assignments"
)]
pub async fn list_assignment_answers(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(assignment_id): Path<i64>,
) -> ApiResult<Vec<Answer>> {
    let answers = ClassroomService::list_answers(state.db.pool(), &user, assignment_id).await?;
    ok(answers)
}
