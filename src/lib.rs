//! Classboard - Assignment Tracking Backend
//!
//! Teachers create subjects and assignments, students submit answers,
//! teachers grade them, and both sides exchange comments. Every answer
//! and comment fans out a notification to the right counterpart.
//!
//! # Modules
//!
//! - [`account`] - User identity and role storage
//! - [`user_auth`] - Password hashing, bearer tokens, auth middleware
//! - [`classroom`] - Subjects, assignments, answers, comments and the
//!   role-gated actions over them
//! - [`notify`] - Notification fanout and storage
//! - [`gateway`] - HTTP API surface
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing setup

pub mod config;
pub mod db;
pub mod logging;

pub mod account;
pub mod classroom;
pub mod notify;
pub mod user_auth;

pub mod gateway;

// Convenient re-exports at crate root
pub use account::{Role, User};
pub use classroom::{ActionError, Answer, Assignment, ClassroomService, Comment, Subject};
pub use db::Database;
pub use notify::Notification;
pub use user_auth::{AuthError, Claims, CredentialService};
