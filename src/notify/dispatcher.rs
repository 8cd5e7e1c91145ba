//! Recipient and message derivation for notifications.
//!
//! Pure functions of the just-created entity and its resolved parent
//! chain. The recipient is never the author: answers only come from
//! students and notify the assignment's teacher, while comment fanout
//! branches on the commenter's role, and teachers cannot author
//! answers.

use crate::account::User;
use crate::classroom::{Answer, Assignment};

/// A derived notification, not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fanout {
    pub recipient_id: i64,
    pub message: String,
}

/// Fanout for a freshly submitted answer: address the assignment's
/// teacher.
pub fn answer_notification(assignment: &Assignment) -> Fanout {
    Fanout {
        recipient_id: assignment.teacher_id,
        message: format!("New answer submitted for '{}'.", assignment.title),
    }
}

/// Fanout for a freshly posted comment: a teacher's comment goes to the
/// answer's student, anyone else's goes to the assignment's teacher.
pub fn comment_notification(commenter: &User, answer: &Answer, assignment: &Assignment) -> Fanout {
    let recipient_id = if commenter.is_teacher {
        answer.student_id
    } else {
        assignment.teacher_id
    };
    Fanout {
        recipient_id,
        message: format!("New comment on the answer to '{}'.", assignment.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const TEACHER_ID: i64 = 10;
    const STUDENT_ID: i64 = 20;

    fn user(user_id: i64, is_teacher: bool) -> User {
        User {
            user_id,
            email: format!("u{}@example.com", user_id),
            password_hash: "$argon2id$stub".to_string(),
            is_teacher,
            created_at: Utc::now(),
        }
    }

    fn assignment() -> Assignment {
        Assignment {
            assignment_id: 1,
            title: "HW1".to_string(),
            description: "First homework".to_string(),
            subject_id: 1,
            teacher_id: TEACHER_ID,
        }
    }

    fn answer() -> Answer {
        Answer {
            answer_id: 5,
            content: "42".to_string(),
            assignment_id: 1,
            student_id: STUDENT_ID,
            grade: None,
        }
    }

    #[test]
    fn test_answer_notifies_assignment_teacher() {
        let fanout = answer_notification(&assignment());
        assert_eq!(fanout.recipient_id, TEACHER_ID);
        assert!(fanout.message.contains("HW1"));
    }

    #[test]
    fn test_teacher_comment_notifies_student() {
        let commenter = user(TEACHER_ID, true);
        let fanout = comment_notification(&commenter, &answer(), &assignment());
        assert_eq!(fanout.recipient_id, STUDENT_ID);
        assert!(fanout.message.contains("HW1"));
    }

    #[test]
    fn test_student_comment_notifies_teacher() {
        let commenter = user(STUDENT_ID, false);
        let fanout = comment_notification(&commenter, &answer(), &assignment());
        assert_eq!(fanout.recipient_id, TEACHER_ID);
    }

    #[test]
    fn test_commenter_is_never_the_recipient() {
        // A second student commenting on someone else's answer still
        // notifies the teacher, not themselves
        let other_student = user(30, false);
        let fanout = comment_notification(&other_student, &answer(), &assignment());
        assert_ne!(fanout.recipient_id, other_student.user_id);

        // A second teacher commenting notifies the student, not themselves
        let other_teacher = user(40, true);
        let fanout = comment_notification(&other_teacher, &answer(), &assignment());
        assert_ne!(fanout.recipient_id, other_teacher.user_id);
    }
}
