//! Role gates for classroom actions.
//!
//! Evaluated before any resource lookup, so a caller with the wrong
//! role gets the same rejection whether or not the target exists.

use super::error::ActionError;
use crate::account::{Role, User};

pub fn require_teacher(user: &User, action: &'static str) -> Result<(), ActionError> {
    match user.role() {
        Role::Teacher => Ok(()),
        Role::Student => Err(ActionError::TeacherOnly(action)),
    }
}

pub fn require_student(user: &User, action: &'static str) -> Result<(), ActionError> {
    match user.role() {
        Role::Student => Ok(()),
        Role::Teacher => Err(ActionError::StudentOnly(action)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(is_teacher: bool) -> User {
        User {
            user_id: 1,
            email: "u@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            is_teacher,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_teacher_gate() {
        assert!(require_teacher(&user(true), "create subjects").is_ok());
        assert!(matches!(
            require_teacher(&user(false), "create subjects"),
            Err(ActionError::TeacherOnly("create subjects"))
        ));
    }

    #[test]
    fn test_student_gate() {
        assert!(require_student(&user(false), "submit answers").is_ok());
        assert!(matches!(
            require_student(&user(true), "submit answers"),
            Err(ActionError::StudentOnly("submit answers"))
        ));
    }
}
