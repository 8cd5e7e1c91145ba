//! Subject handlers

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::error::{ApiResult, created, ok};
use super::super::state::AppState;
use super::super::types::ApiResponse;
use crate::account::User;
use crate::classroom::{ClassroomService, Subject};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSubjectRequest {
    #[schema(example = "Math")]
    pub name: String,
}

/// Create a subject (teachers only)
///
/// POST /subjects
#[utoipa::path(
    post,
    path = "/subjects",
    request_body = CreateSubjectRequest,
    responses(
        (status = 201, description = "Subject created", body = ApiResponse<Subject>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not a teacher")
    ),
    security(("bearer_token" = [])),
    tag = "Subjects"
)]
pub async fn create_subject(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(req): Json<CreateSubjectRequest>,
) -> ApiResult<Subject> {
    let subject = ClassroomService::create_subject(state.db.pool(), &user, &req.name).await?;
    created(subject)
}

/// List all subjects
///
/// GET /subjects
#[utoipa::path(
    get,
    path = "/subjects",
    responses(
        (status = 200, description = "Subject list", body = ApiResponse<Vec<Subject>>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_token" = [])),
    tag = "Subjects"
)]
pub async fn list_subjects(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Subject>> {
    let subjects = ClassroomService::list_subjects(state.db.pool()).await?;
    ok(subjects)
}
