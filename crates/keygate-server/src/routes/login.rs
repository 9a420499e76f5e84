//! Login endpoint

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use super::AppState;
use crate::error::ApiError;
use keygate_core::{CoreError, LoginOutcome};

/// Login request body
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(rename = "loginID")]
    pub login_id: String,
    pub password: String,
}

/// Log in, registering the identifier on first use
pub(super) async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    info!("Received a login request");

    let Json(request) = payload.map_err(|e| ApiError::bad_request("invalid request body", e))?;

    let outcome = state
        .keygate
        .login
        .login(&request.login_id, &request.password)
        .await
        .map_err(|e| {
            error!("Login for {} failed: {}", request.login_id, e);
            match e {
                CoreError::Hash(_) => ApiError::Internal("error hashing password"),
                _ => ApiError::Internal("error retrieving user"),
            }
        })?;

    match outcome {
        LoginOutcome::Created => Ok((
            StatusCode::CREATED,
            "User created successfully. Please login.",
        )),
        LoginOutcome::Authenticated => Ok((StatusCode::OK, "Login successful")),
        LoginOutcome::Rejected => Err(ApiError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{send, test_app};
    use axum::http::StatusCode;
    use keygate_core::KeyValueStore;

    #[tokio::test]
    async fn test_first_login_creates_user() {
        let (app, store) = test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/login",
            Some(r#"{"loginID":"u1","password":"hunter2"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, "User created successfully. Please login.");

        let hash = store.get("u1").await.unwrap().unwrap();
        assert!(!body.contains("hunter2"));
        assert!(!body.contains(&hash));
    }

    #[tokio::test]
    async fn test_login_after_create() {
        let (app, _) = test_app();
        let body = r#"{"loginID":"u1","password":"hunter2"}"#;

        send(&app, "POST", "/login", Some(body)).await;
        let (status, text) = send(&app, "POST", "/login", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, "Login successful");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (app, _) = test_app();

        send(
            &app,
            "POST",
            "/login",
            Some(r#"{"loginID":"u1","password":"hunter2"}"#),
        )
        .await;
        let (status, text) = send(
            &app,
            "POST",
            "/login",
            Some(r#"{"loginID":"u1","password":"hunter3"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(text, "login error");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (app, store) = test_app();

        let (status, text) = send(&app, "POST", "/login", Some("{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(text, "invalid request body");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_wrong_shape_body() {
        let (app, store) = test_app();

        let (status, _) = send(&app, "POST", "/login", Some(r#""u1""#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let (app, store) = test_app();

        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/login")
            .body(axum::body::Body::from(r#"{"loginID":"u1","password":"pw"}"#))
            .unwrap();
        let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.is_empty().await);
    }
}
