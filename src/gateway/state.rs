use std::sync::Arc;

use crate::db::Database;
use crate::user_auth::CredentialService;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL pool wrapper
    pub db: Arc<Database>,
    /// Password and token operations
    pub credentials: Arc<CredentialService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, credentials: Arc<CredentialService>) -> Self {
        Self { db, credentials }
    }
}
