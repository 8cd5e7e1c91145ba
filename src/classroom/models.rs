//! Domain models for the classroom entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A course subject, owned by the teacher who created it
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub subject_id: i64,
    pub name: String,
    pub teacher_id: i64,
}

/// An assignment under a subject.
///
/// `teacher_id` is the authoring teacher, which need not be the
/// subject's owner.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub assignment_id: i64,
    pub title: String,
    pub description: String,
    pub subject_id: i64,
    pub teacher_id: i64,
}

/// A student's submission for an assignment.
///
/// `grade` stays NULL until a teacher grades it; regrading overwrites.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub answer_id: i64,
    pub content: String,
    pub assignment_id: i64,
    pub student_id: i64,
    pub grade: Option<i32>,
}

/// A comment on an answer.
///
/// `is_teacher` snapshots the author's role at post time.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub answer_id: i64,
    pub user_id: i64,
    pub is_teacher: bool,
}
