use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::gateway::{error::ApiError, state::AppState};

/// Bearer-token middleware for all authenticated routes.
///
/// Resolves the token all the way to a stored user and injects it as a
/// request extension; handlers never see claims, only the caller.
pub async fn bearer_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    // 1. Extract Authorization header
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::missing_auth("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Invalid token format"))?;

    // 2. Resolve token -> claims -> user, failing closed at each step
    let user = state
        .credentials
        .resolve_bearer(state.db.pool(), token)
        .await?;

    // 3. Inject the caller
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
