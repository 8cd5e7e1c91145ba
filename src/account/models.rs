//! Data models for user accounts

use chrono::{DateTime, Utc};

/// The two mutually exclusive roles a user can hold.
///
/// The role is fixed at registration; no endpoint changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Teacher,
    Student,
}

/// User account
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub password_hash: String,
    pub is_teacher: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        if self.is_teacher {
            Role::Teacher
        } else {
            Role::Student
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(user_id: i64, is_teacher: bool) -> User {
        User {
            user_id,
            email: format!("user{}@example.com", user_id),
            password_hash: "$argon2id$stub".to_string(),
            is_teacher,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_derived_from_flag() {
        assert_eq!(make_user(1, true).role(), Role::Teacher);
        assert_eq!(make_user(2, false).role(), Role::Student);
    }
}
