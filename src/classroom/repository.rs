//! Repository layer for classroom entities
//!
//! Runtime-checked queries against PostgreSQL. Inserts that must share
//! a transaction with a notification take a `PgConnection` instead of
//! the pool.

use sqlx::{PgConnection, PgPool};

use super::models::{Answer, Assignment, Comment, Subject};

pub struct SubjectRepository;

impl SubjectRepository {
    pub async fn insert(pool: &PgPool, name: &str, teacher_id: i64) -> Result<Subject, sqlx::Error> {
        sqlx::query_as(
            r#"INSERT INTO subjects (name, teacher_id)
               VALUES ($1, $2)
               RETURNING subject_id, name, teacher_id"#,
        )
        .bind(name)
        .bind(teacher_id)
        .fetch_one(pool)
        .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Subject>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT subject_id, name, teacher_id
               FROM subjects ORDER BY subject_id"#,
        )
        .fetch_all(pool)
        .await
    }
}

pub struct AssignmentRepository;

impl AssignmentRepository {
    pub async fn insert(
        pool: &PgPool,
        title: &str,
        description: &str,
        subject_id: i64,
        teacher_id: i64,
    ) -> Result<Assignment, sqlx::Error> {
        sqlx::query_as(
            r#"INSERT INTO assignments (title, description, subject_id, teacher_id)
               VALUES ($1, $2, $3, $4)
               RETURNING assignment_id, title, description, subject_id, teacher_id"#,
        )
        .bind(title)
        .bind(description)
        .bind(subject_id)
        .bind(teacher_id)
        .fetch_one(pool)
        .await
    }

    pub async fn get_by_id(
        pool: &PgPool,
        assignment_id: i64,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT assignment_id, title, description, subject_id, teacher_id
               FROM assignments WHERE assignment_id = $1"#,
        )
        .bind(assignment_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn list_by_teacher(
        pool: &PgPool,
        teacher_id: i64,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT assignment_id, title, description, subject_id, teacher_id
               FROM assignments WHERE teacher_id = $1 ORDER BY assignment_id"#,
        )
        .bind(teacher_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Assignment>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT assignment_id, title, description, subject_id, teacher_id
               FROM assignments ORDER BY assignment_id"#,
        )
        .fetch_all(pool)
        .await
    }
}

pub struct AnswerRepository;

impl AnswerRepository {
    /// Insert an answer inside an open transaction
    pub async fn insert(
        conn: &mut PgConnection,
        content: &str,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Answer, sqlx::Error> {
        sqlx::query_as(
            r#"INSERT INTO answers (content, assignment_id, student_id)
               VALUES ($1, $2, $3)
               RETURNING answer_id, content, assignment_id, student_id, grade"#,
        )
        .bind(content)
        .bind(assignment_id)
        .bind(student_id)
        .fetch_one(&mut *conn)
        .await
    }

    pub async fn get_by_id(pool: &PgPool, answer_id: i64) -> Result<Option<Answer>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT answer_id, content, assignment_id, student_id, grade
               FROM answers WHERE answer_id = $1"#,
        )
        .bind(answer_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn list_by_assignment(
        pool: &PgPool,
        assignment_id: i64,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT answer_id, content, assignment_id, student_id, grade
               FROM answers WHERE assignment_id = $1 ORDER BY answer_id"#,
        )
        .bind(assignment_id)
        .fetch_all(pool)
        .await
    }

    /// Set (or overwrite) the grade; returns the number of rows touched
    pub async fn set_grade(
        pool: &PgPool,
        answer_id: i64,
        grade: i32,
    ) -> Result<u64, sqlx::Error> {
        let res = sqlx::query(r#"UPDATE answers SET grade = $1 WHERE answer_id = $2"#)
            .bind(grade)
            .bind(answer_id)
            .execute(pool)
            .await?;
        Ok(res.rows_affected())
    }
}

pub struct CommentRepository;

impl CommentRepository {
    /// Insert a comment inside an open transaction
    pub async fn insert(
        conn: &mut PgConnection,
        content: &str,
        answer_id: i64,
        user_id: i64,
        is_teacher: bool,
    ) -> Result<Comment, sqlx::Error> {
        sqlx::query_as(
            r#"INSERT INTO comments (content, answer_id, user_id, is_teacher)
               VALUES ($1, $2, $3, $4)
               RETURNING comment_id, content, created_at, answer_id, user_id, is_teacher"#,
        )
        .bind(content)
        .bind(answer_id)
        .bind(user_id)
        .bind(is_teacher)
        .fetch_one(&mut *conn)
        .await
    }

    pub async fn list_by_answer(
        pool: &PgPool,
        answer_id: i64,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT comment_id, content, created_at, answer_id, user_id, is_teacher
               FROM comments WHERE answer_id = $1 ORDER BY created_at, comment_id"#,
        )
        .bind(answer_id)
        .fetch_all(pool)
        .await
    }
}
