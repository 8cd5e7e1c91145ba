//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::classroom::{Answer, Assignment, Comment, Subject};
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::MessageData;
use crate::notify::Notification;
use crate::user_auth::handlers::{RegisterRequest, TokenResponse, UserProfile};

/// Bearer-token security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Classboard API",
        version = "1.0.0",
        description = "Classroom assignment tracking: subjects, assignments, answers, grading, comments and notifications."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        // Auth
        crate::user_auth::handlers::register,
        crate::user_auth::handlers::token,
        crate::user_auth::handlers::me,
        // Subjects
        crate::gateway::handlers::create_subject,
        crate::gateway::handlers::list_subjects,
        // Assignments
        crate::gateway::handlers::create_assignment,
        crate::gateway::handlers::list_assignments,
        crate::gateway::handlers::list_my_assignments,
        crate::gateway::handlers::list_assignment_answers,
        // Answers
        crate::gateway::handlers::submit_answer,
        crate::gateway::handlers::get_answer,
        crate::gateway::handlers::grade_answer,
        // Comments
        crate::gateway::handlers::create_comment,
        crate::gateway::handlers::list_comments,
        // Notifications
        crate::gateway::handlers::list_notifications,
        crate::gateway::handlers::mark_notification_read,
        // System
        crate::gateway::handlers::health_check,
    ),
    components(
        schemas(
            RegisterRequest,
            UserProfile,
            TokenResponse,
            Subject,
            Assignment,
            Answer,
            Comment,
            Notification,
            MessageData,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration, login and profile"),
        (name = "Subjects", description = "Course subjects (teachers create)"),
        (name = "Assignments", description = "Assignments under a subject"),
        (name = "Answers", description = "Student submissions and grading"),
        (name = "Comments", description = "Discussion threads on answers"),
        (name = "Notifications", description = "Derived notifications"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Classboard API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Classboard API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/register"));
        assert!(paths.paths.contains_key("/token"));
        assert!(paths.paths.contains_key("/answers/{answer_id}/grade"));
        assert!(paths.paths.contains_key("/notifications/{notification_id}/read"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("bearer_token"));
    }
}
