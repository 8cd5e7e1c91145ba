//! User identity module
//!
//! PostgreSQL-based storage for user accounts and their role flag.

pub mod models;
pub mod repository;

// Re-export commonly used types
pub use models::{Role, User};
pub use repository::UserRepository;

// Re-export Database from top-level db module
pub use crate::db::Database;
