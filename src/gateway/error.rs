//! Boundary error type
//!
//! Typed errors from the credential service and the action engine are
//! translated here into a status code and an envelope message. Store
//! details never reach the client; they go to the log instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::{ApiResponse, error_codes};
use crate::classroom::ActionError;
use crate::user_auth::AuthError;

/// An error response: HTTP status plus envelope code and message
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

/// Handler result: a status + enveloped payload, or an [`ApiError`]
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 OK with an enveloped payload
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 Created with an enveloped payload
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_PARAMETER,
            msg,
        )
    }

    pub fn missing_auth(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_codes::MISSING_AUTH, msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_codes::AUTH_FAILED, msg)
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, error_codes::FORBIDDEN, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            msg,
        )
    }

    /// Convenience for early returns inside handlers
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiResponse::<()>::error(self.code, self.msg)),
        )
            .into_response()
    }
}

impl From<ActionError> for ApiError {
    fn from(e: ActionError) -> Self {
        match e {
            ActionError::Database(e) => {
                tracing::error!("Database error: {}", e);
                Self::internal("Internal server error")
            }
            ActionError::TeacherOnly(action) => {
                Self::forbidden(format!("Only teachers may {}.", action))
            }
            ActionError::StudentOnly(action) => {
                Self::forbidden(format!("Teachers may not {}.", action))
            }
            ActionError::AssignmentNotFound => Self::not_found("Assignment not found."),
            ActionError::AnswerNotFound => Self::not_found("Answer not found."),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Database(e) => {
                tracing::error!("Database error: {}", e);
                Self::internal("Internal server error")
            }
            AuthError::EmailTaken => Self::new(
                StatusCode::BAD_REQUEST,
                error_codes::EMAIL_TAKEN,
                "Email is already registered.",
            ),
            AuthError::InvalidCredentials => Self::unauthorized("Invalid email or password."),
            AuthError::InvalidToken => Self::unauthorized("Invalid or expired token."),
            err @ (AuthError::PasswordHash | AuthError::TokenSigning) => {
                tracing::error!("Credential failure: {}", err);
                Self::internal("Internal server error")
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", e);
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_errors_map_to_forbidden() {
        let e: ApiError = ActionError::TeacherOnly("create subjects").into();
        assert_eq!(e.status, StatusCode::FORBIDDEN);
        assert_eq!(e.code, error_codes::FORBIDDEN);

        let e: ApiError = ActionError::StudentOnly("submit answers").into();
        assert_eq!(e.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_missing_resources_map_to_not_found() {
        let e: ApiError = ActionError::AssignmentNotFound.into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        let e: ApiError = ActionError::AnswerNotFound.into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_auth_errors_map_to_expected_statuses() {
        let e: ApiError = AuthError::EmailTaken.into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.code, error_codes::EMAIL_TAKEN);

        let e: ApiError = AuthError::InvalidCredentials.into();
        assert_eq!(e.status, StatusCode::UNAUTHORIZED);

        let e: ApiError = AuthError::InvalidToken.into();
        assert_eq!(e.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_database_errors_hide_details() {
        let e: ApiError = ActionError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.msg, "Internal server error");
    }
}
