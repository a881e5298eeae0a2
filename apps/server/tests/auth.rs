use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use tempfile::TempDir;
use tower::ServiceExt;

use leadfolio_server::{api::app_router, build_state, config::Config};

fn test_config(dir: &TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        jwt_secret: vec![7u8; 32],
        token_ttl: Duration::from_secs(3600),
    }
}

async fn build_test_router() -> (axum::Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), dir)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: &serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(app: &axum::Router, username: &str, password: &str) -> axum::response::Response {
    let body = serde_json::json!({ "username": username, "password": password });
    app.clone()
        .oneshot(post_json("/api/v1/auth/login", None, &body))
        .await
        .unwrap()
}

async fn admin_token(app: &axum::Router) -> String {
    let response = login(app, "admin", "password123").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["accessToken"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn login_with_seeded_admin_and_access_protected_route() {
    let (app, _dir) = build_test_router().await;

    // Unauthorized request fails closed.
    let response = app.clone().oneshot(get("/api/v1/clients", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Auth status is public.
    let status = app
        .clone()
        .oneshot(get("/api/v1/auth/status", None))
        .await
        .unwrap();
    assert_eq!(status.status(), StatusCode::OK);
    assert_eq!(body_json(status).await["authRequired"], true);

    // The documented bootstrap credentials work and carry the identity.
    let response = login(&app, "admin", "password123").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["identity"]["username"], "admin");
    assert_eq!(json["identity"]["role"], "Admin");
    let token = json["accessToken"].as_str().unwrap().to_string();

    // Access with the token succeeds.
    let listed = app
        .clone()
        .oneshot(get("/api/v1/clients", Some(&token)))
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(body_json(listed).await, serde_json::json!([]));
}

#[tokio::test]
async fn login_failures_use_the_exact_legacy_messages() {
    let (app, _dir) = build_test_router().await;

    let wrong_password = login(&app, "admin", "password124").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong_password).await["message"], "incorrect password");

    let unknown_user = login(&app, "ghost", "password123").await;
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(unknown_user).await["message"], "user not found");
}

#[tokio::test]
async fn client_creation_validates_before_writing() {
    let (app, _dir) = build_test_router().await;
    let token = admin_token(&app).await;

    // Empty company name is rejected...
    let rejected = app
        .clone()
        .oneshot(post_json(
            "/api/v1/clients",
            Some(&token),
            &serde_json::json!({ "companyName": "   " }),
        ))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    // ...and no row was written.
    let listed = app
        .clone()
        .oneshot(get("/api/v1/clients", Some(&token)))
        .await
        .unwrap();
    assert_eq!(body_json(listed).await, serde_json::json!([]));

    // A valid client lands and comes back first.
    let created = app
        .clone()
        .oneshot(post_json(
            "/api/v1/clients",
            Some(&token),
            &serde_json::json!({
                "companyName": "Tema Steel",
                "sector": "Steel & Metal Processing",
                "region": "Greater Accra"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);

    let listed = app
        .clone()
        .oneshot(get("/api/v1/clients", Some(&token)))
        .await
        .unwrap();
    let json = body_json(listed).await;
    assert_eq!(json[0]["companyName"], "Tema Steel");
}

#[tokio::test]
async fn reset_requires_admin_and_double_confirmation() {
    let (app, _dir) = build_test_router().await;
    let token = admin_token(&app).await;

    // Seed one client so the reset visibly erases something.
    app.clone()
        .oneshot(post_json(
            "/api/v1/clients",
            Some(&token),
            &serde_json::json!({ "companyName": "Kumasi Foods" }),
        ))
        .await
        .unwrap();

    // One flag is not enough.
    let refused = app
        .clone()
        .oneshot(post_json(
            "/api/v1/admin/reset-database",
            Some(&token),
            &serde_json::json!({ "confirm": true }),
        ))
        .await
        .unwrap();
    assert_eq!(refused.status(), StatusCode::BAD_REQUEST);

    // A non-admin is forbidden outright.
    app.clone()
        .oneshot(post_json(
            "/api/v1/users",
            Some(&token),
            &serde_json::json!({
                "username": "ama",
                "password": "pw",
                "role": "Viewer"
            }),
        ))
        .await
        .unwrap();
    let viewer_login = login(&app, "ama", "pw").await;
    let viewer_token = body_json(viewer_login).await["accessToken"]
        .as_str()
        .unwrap()
        .to_string();
    let forbidden = app
        .clone()
        .oneshot(post_json(
            "/api/v1/admin/reset-database",
            Some(&viewer_token),
            &serde_json::json!({ "confirm": true, "acknowledgeDataLoss": true }),
        ))
        .await
        .unwrap();
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    // Both flags from an admin destroy and reseed the database.
    let reset = app
        .clone()
        .oneshot(post_json(
            "/api/v1/admin/reset-database",
            Some(&token),
            &serde_json::json!({ "confirm": true, "acknowledgeDataLoss": true }),
        ))
        .await
        .unwrap();
    assert_eq!(reset.status(), StatusCode::OK);

    let listed = app
        .clone()
        .oneshot(get("/api/v1/clients", Some(&token)))
        .await
        .unwrap();
    assert_eq!(body_json(listed).await, serde_json::json!([]));
}
