//! HTTP routes
//!
//! | Method | Path         |
//! |--------|--------------|
//! | POST   | /login       |
//! | POST   | /items       |
//! | GET    | /items/:id   |
//! | PUT    | /items/:id   |
//! | DELETE | /items/:id   |
//! | GET    | /health      |

mod items;
mod login;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use keygate_core::Keygate;

pub use login::LoginRequest;

/// Shared state for HTTP handlers
pub(crate) struct AppState {
    keygate: Keygate,
}

/// Build the application router around the given services
pub fn router(keygate: Keygate) -> Router {
    let state = Arc::new(AppState { keygate });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/login", post(login::login))
        .route("/items", post(items::create_item))
        .route(
            "/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health() -> &'static str {
    "OK"
}


#[cfg(test)]
mod tests {
    use super::test_support::{send, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health() {
        let (app, store) = test_app();

        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (app, _) = test_app();

        let (status, _) = send(&app, "GET", "/users", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let (app, _) = test_app();

        let (status, _) = send(&app, "GET", "/login", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
