//! User authentication module
//!
//! Argon2 password hashing, HS256 bearer tokens and the axum middleware
//! that resolves a token into a [`crate::account::User`].

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod service;

pub use error::AuthError;
pub use service::{Claims, CredentialService};
