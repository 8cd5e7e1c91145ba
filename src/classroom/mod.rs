//! Classroom domain module
//!
//! Subjects, assignments, answers and comments, plus the role-gated
//! actions that mutate them. Every action checks the caller's role
//! before it looks at the target entity, so an unauthorized caller
//! learns nothing about what exists.

pub mod access;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::ActionError;
pub use models::{Answer, Assignment, Comment, Subject};
pub use repository::{
    AnswerRepository, AssignmentRepository, CommentRepository, SubjectRepository,
};
pub use service::ClassroomService;
