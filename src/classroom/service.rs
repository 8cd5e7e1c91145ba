//! Role-gated actions over the classroom entities.
//!
//! Every mutating action follows the same order: role gate, then target
//! lookup, then the mutation. Actions that derive a notification open a
//! transaction so the entity and its notification commit together.

use sqlx::PgPool;

use super::access;
use super::error::ActionError;
use super::models::{Answer, Assignment, Comment, Subject};
use super::repository::{
    AnswerRepository, AssignmentRepository, CommentRepository, SubjectRepository,
};
use crate::account::User;
use crate::notify::{NotificationRepository, dispatcher};

pub struct ClassroomService;

impl ClassroomService {
    /// Create a subject owned by the acting teacher
    pub async fn create_subject(
        pool: &PgPool,
        actor: &User,
        name: &str,
    ) -> Result<Subject, ActionError> {
        access::require_teacher(actor, "create subjects")?;
        let subject = SubjectRepository::insert(pool, name, actor.user_id).await?;
        tracing::info!(
            "Teacher {} created subject {}",
            actor.user_id,
            subject.subject_id
        );
        Ok(subject)
    }

    pub async fn list_subjects(pool: &PgPool) -> Result<Vec<Subject>, ActionError> {
        Ok(SubjectRepository::list_all(pool).await?)
    }

    /// Create an assignment authored by the acting teacher.
    ///
    /// The author need not own the referenced subject; no cross-check
    /// is made.
    pub async fn create_assignment(
        pool: &PgPool,
        actor: &User,
        title: &str,
        description: &str,
        subject_id: i64,
    ) -> Result<Assignment, ActionError> {
        access::require_teacher(actor, "create assignments")?;
        let assignment =
            AssignmentRepository::insert(pool, title, description, subject_id, actor.user_id)
                .await?;
        tracing::info!(
            "Teacher {} created assignment {}",
            actor.user_id,
            assignment.assignment_id
        );
        Ok(assignment)
    }

    /// Assignments authored by the acting teacher
    pub async fn list_own_assignments(
        pool: &PgPool,
        actor: &User,
    ) -> Result<Vec<Assignment>, ActionError> {
        access::require_teacher(actor, "list their assignments")?;
        Ok(AssignmentRepository::list_by_teacher(pool, actor.user_id).await?)
    }

    /// The work queue a student can pick from
    pub async fn list_open_assignments(
        pool: &PgPool,
        actor: &User,
    ) -> Result<Vec<Assignment>, ActionError> {
        access::require_student(actor, "browse open assignments")?;
        Ok(AssignmentRepository::list_all(pool).await?)
    }

    /// Submit an answer and notify the assignment's teacher.
    ///
    /// The answer and its notification commit in one transaction.
    pub async fn submit_answer(
        pool: &PgPool,
        actor: &User,
        content: &str,
        assignment_id: i64,
    ) -> Result<Answer, ActionError> {
        access::require_student(actor, "submit answers")?;
        let assignment = AssignmentRepository::get_by_id(pool, assignment_id)
            .await?
            .ok_or(ActionError::AssignmentNotFound)?;

        let mut tx = pool.begin().await?;
        let answer =
            AnswerRepository::insert(&mut tx, content, assignment_id, actor.user_id).await?;
        let fanout = dispatcher::answer_notification(&assignment);
        NotificationRepository::insert(&mut tx, fanout.recipient_id, &fanout.message).await?;
        tx.commit().await?;

        tracing::info!(
            "Student {} answered assignment {}, notified teacher {}",
            actor.user_id,
            assignment_id,
            fanout.recipient_id
        );
        Ok(answer)
    }

    /// Set or overwrite an answer's grade. Last write wins; any teacher
    /// may grade any answer.
    pub async fn grade_answer(
        pool: &PgPool,
        actor: &User,
        answer_id: i64,
        grade: i32,
    ) -> Result<(), ActionError> {
        access::require_teacher(actor, "grade answers")?;
        let rows = AnswerRepository::set_grade(pool, answer_id, grade).await?;
        if rows == 0 {
            return Err(ActionError::AnswerNotFound);
        }
        tracing::info!(
            "Teacher {} graded answer {} with {}",
            actor.user_id,
            answer_id,
            grade
        );
        Ok(())
    }

    pub async fn get_answer(pool: &PgPool, answer_id: i64) -> Result<Answer, ActionError> {
        AnswerRepository::get_by_id(pool, answer_id)
            .await?
            .ok_or(ActionError::AnswerNotFound)
    }

    /// Answers submitted for one of the acting teacher's assignments.
    ///
    /// Missing and not-owned assignments are indistinguishable to the
    /// caller.
    pub async fn list_answers(
        pool: &PgPool,
        actor: &User,
        assignment_id: i64,
    ) -> Result<Vec<Answer>, ActionError> {
        access::require_teacher(actor, "review submitted answers")?;
        let assignment = AssignmentRepository::get_by_id(pool, assignment_id)
            .await?
            .filter(|a| a.teacher_id == actor.user_id)
            .ok_or(ActionError::AssignmentNotFound)?;
        Ok(AnswerRepository::list_by_assignment(pool, assignment.assignment_id).await?)
    }

    /// Post a comment on an answer and notify the counterpart: the
    /// student when a teacher comments, the assignment's teacher
    /// otherwise.
    pub async fn post_comment(
        pool: &PgPool,
        actor: &User,
        content: &str,
        answer_id: i64,
    ) -> Result<Comment, ActionError> {
        let answer = AnswerRepository::get_by_id(pool, answer_id)
            .await?
            .ok_or(ActionError::AnswerNotFound)?;
        let assignment = AssignmentRepository::get_by_id(pool, answer.assignment_id)
            .await?
            .ok_or(ActionError::AssignmentNotFound)?;

        let mut tx = pool.begin().await?;
        // The role snapshot comes from the authenticated user, never
        // from the request payload
        let comment =
            CommentRepository::insert(&mut tx, content, answer_id, actor.user_id, actor.is_teacher)
                .await?;
        let fanout = dispatcher::comment_notification(actor, &answer, &assignment);
        NotificationRepository::insert(&mut tx, fanout.recipient_id, &fanout.message).await?;
        tx.commit().await?;

        tracing::info!(
            "User {} commented on answer {}, notified {}",
            actor.user_id,
            answer_id,
            fanout.recipient_id
        );
        Ok(comment)
    }

    /// Comments for an answer, oldest first. Open to anonymous callers;
    /// an unknown answer simply yields an empty list.
    pub async fn list_comments(pool: &PgPool, answer_id: i64) -> Result<Vec<Comment>, ActionError> {
        Ok(CommentRepository::list_by_answer(pool, answer_id).await?)
    }
}
