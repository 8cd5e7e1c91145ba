//! Notification fanout and storage
//!
//! Answers and comments each derive exactly one notification. The
//! recipient computation is a pure function in [`dispatcher`]; the
//! insert always shares the transaction of the entity that caused it.

pub mod dispatcher;
pub mod models;
pub mod repository;

pub use dispatcher::Fanout;
pub use models::Notification;
pub use repository::NotificationRepository;
