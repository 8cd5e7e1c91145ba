use axum::{Extension, Form, Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::account::User;
use crate::gateway::error::{ApiError, ApiResult, created, ok};
use crate::gateway::state::AppState;
use crate::gateway::types::ApiResponse;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[schema(example = "student1@example.com")]
    #[validate(email)]
    pub email: String,
    #[schema(example = "password123")]
    #[validate(length(min = 8))]
    pub password: String,
    #[serde(default)]
    pub is_teacher: bool,
}

/// Public view of a user account
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub is_teacher: bool,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            email: user.email.clone(),
            is_teacher: user.is_teacher,
        }
    }
}

/// OAuth2-style password login form
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequest {
    /// The user's email
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Register a new user
///
/// POST /register
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserProfile>),
        (status = 400, description = "Malformed input or email already registered")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<UserProfile> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let user_id = state
        .credentials
        .register(state.db.pool(), &req.email, &req.password, req.is_teacher)
        .await?;

    tracing::info!(
        "Registered {} {}",
        if req.is_teacher { "teacher" } else { "student" },
        user_id
    );

    created(UserProfile {
        id: user_id,
        email: req.email,
        is_teacher: req.is_teacher,
    })
}

/// Exchange credentials for a bearer token
///
/// POST /token
#[utoipa::path(
    post,
    path = "/token",
    responses(
        (status = 200, description = "Token issued", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn token(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TokenRequest>,
) -> ApiResult<TokenResponse> {
    let access_token = match state
        .credentials
        .login(state.db.pool(), &form.username, &form.password)
        .await
    {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!("Login failed for {}: {}", form.username, e);
            return Err(e.into());
        }
    };

    ok(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    })
}

/// Current user's profile
///
/// GET /users/me
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Caller's profile", body = ApiResponse<UserProfile>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_token" = [])),
    tag = "Auth"
)]
pub async fn me(Extension(user): Extension<User>) -> ApiResult<UserProfile> {
    ok(UserProfile::from(&user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let good = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "longenough".to_string(),
            is_teacher: false,
        };
        assert!(good.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "longenough".to_string(),
            is_teacher: false,
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "short".to_string(),
            is_teacher: true,
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_register_request_teacher_flag_defaults_false() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"email":"a@b.com","password":"longenough"}"#).unwrap();
        assert!(!req.is_teacher);
    }

    #[test]
    fn test_token_response_wire_shape() {
        let resp = TokenResponse {
            access_token: "abc".to_string(),
            token_type: "bearer".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["accessToken"], "abc");
        assert_eq!(json["tokenType"], "bearer");
    }

    #[test]
    fn test_user_profile_wire_shape() {
        let profile = UserProfile {
            id: 7,
            email: "t@example.com".to_string(),
            is_teacher: true,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["isTeacher"], true);
    }
}
