// marche-mock/tests/routes.rs
// Route-level tests through tower oneshot

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Method, Request, StatusCode, header};
use marche_mock::{demo_router, seed};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn call(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router, email: &str) -> String {
    let (status, body) = call(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": seed::PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_login_and_me() {
    let app = demo_router();
    let token = login(&app, seed::CLIENT_EMAIL).await;

    let (status, me) = call(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], seed::CLIENT_ID);
    assert_eq!(me["role"], "CLIENT");
}

#[tokio::test]
async fn test_bad_credentials() {
    let app = demo_router();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": seed::CLIENT_EMAIL, "password": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn test_missing_token() {
    let app = demo_router();
    let (status, body) = call(&app, Method::GET, "/api/orders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_validation_details() {
    let app = demo_router();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "bad", "password": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert!(body["details"]["email"].is_string());
    assert!(body["details"]["password"].is_string());
}

#[tokio::test]
async fn test_public_catalog() {
    let app = demo_router();
    let (status, products) = call(&app, Method::GET, "/api/products?boutique_id=b-2", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products.as_array().unwrap().len(), 2);

    let (status, body) = call(&app, Method::GET, "/api/products/p-404", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
}

#[tokio::test]
async fn test_courier_role_required() {
    let app = demo_router();
    let token = login(&app, seed::CLIENT_EMAIL).await;
    let (status, body) = call(&app, Method::GET, "/api/bons", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2002);
}

#[tokio::test]
async fn test_bon_transition_conflict() {
    let app = demo_router();
    let token = login(&app, seed::COURIER_EMAIL).await;

    let (status, body) = call(&app, Method::POST, "/api/bons/bon-0/pickup", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 5002);

    let (status, bon) = call(&app, Method::POST, "/api/bons/bon-2/pickup", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bon["status"], "IN_TRANSIT");
}

#[tokio::test]
async fn test_refuse_returns_no_content() {
    let app = demo_router();
    let token = login(&app, seed::COURIER_EMAIL).await;
    let (status, body) = call(&app, Method::POST, "/api/missions/bon-3/refuse", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, missions) = call(&app, Method::GET, "/api/missions", Some(&token), None).await;
    assert!(missions.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_cart_checkout() {
    let app = demo_router();
    let token = login(&app, seed::CLIENT_EMAIL).await;
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/cart/checkout",
        Some(&token),
        Some(json!({ "delivery_address": "27 Rue Souika" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4003);
}
