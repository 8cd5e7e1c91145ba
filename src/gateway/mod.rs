//! HTTP gateway
//!
//! Route layout:
//! - public: register, token, health, comment listing
//! - protected: everything else, behind the bearer-token middleware

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::db::Database;
use crate::user_auth::{
    CredentialService, handlers as auth_handlers, middleware::bearer_auth_middleware,
};
use state::AppState;

/// Start the HTTP gateway server
pub async fn run_server(config: &AppConfig, port: u16, db: Arc<Database>) {
    let credentials = Arc::new(CredentialService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_minutes,
    ));
    let state = Arc::new(AppState::new(db, credentials));

    // ==========================================================================
    // Public routes (no token required)
    // ==========================================================================
    let public_routes = Router::new()
        .route("/register", post(auth_handlers::register))
        .route("/token", post(auth_handlers::token))
        .route("/health", get(handlers::health_check))
        .route(
            "/answers/{answer_id}/comments",
            get(handlers::list_comments),
        );

    // ==========================================================================
    // Protected routes (bearer token required)
    // ==========================================================================
    let protected_routes = Router::new()
        .route("/users/me", get(auth_handlers::me))
        // Subjects
        .route("/subjects", post(handlers::create_subject))
        .route("/subjects", get(handlers::list_subjects))
        // Assignments
        .route("/assignments", post(handlers::create_assignment))
        .route("/assignments", get(handlers::list_assignments))
        .route("/my-assignments", get(handlers::list_my_assignments))
        .route(
            "/assignments/{assignment_id}/answers",
            get(handlers::list_assignment_answers),
        )
        // Answers
        .route("/answers", post(handlers::submit_answer))
        .route("/answers/{answer_id}", get(handlers::get_answer))
        .route("/answers/{answer_id}/grade", put(handlers::grade_answer))
        // Comments
        .route("/comments", post(handlers::create_comment))
        // Notifications
        .route("/notifications", get(handlers::list_notifications))
        .route(
            "/notifications/{notification_id}/read",
            put(handlers::mark_notification_read),
        )
        // Apply auth middleware
        .layer(from_fn_with_state(state.clone(), bearer_auth_middleware));

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    // Bind address
    let addr = format!("{}:{}", config.gateway.host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    // Start server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
