use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Only teachers may {0}")]
    TeacherOnly(&'static str),

    #[error("Teachers may not {0}")]
    StudentOnly(&'static str),

    #[error("Assignment not found")]
    AssignmentNotFound,

    #[error("Answer not found")]
    AnswerNotFound,
}
