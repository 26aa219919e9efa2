//! Enquiry and contact endpoint tests with a recording mailer.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use banty_axum::{CorsConfig, create_router};

use common::ADMIN_EMAIL;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn enquiry_sends_admin_notification_and_auto_reply() {
    let dir = TempDir::new().unwrap();
    let (ctx, mailer, _) = common::test_context(&dir);
    let app = create_router(ctx, &CorsConfig::AllowAll);

    let body = json!({
        "name": "Asha",
        "email": "asha@example.com",
        "phone": "9999999999",
        "productName": "Floor Mat",
    });
    let response = app.oneshot(post_json("/api/enquiry", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Enquiry sent. We will contact you shortly.");

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].0, ADMIN_EMAIL);
    assert!(sent[0].1.contains("Floor Mat"));
    assert_eq!(sent[1].0, "asha@example.com");
}

#[tokio::test]
async fn enquiry_with_missing_fields_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (ctx, mailer, _) = common::test_context(&dir);
    let app = create_router(ctx, &CorsConfig::AllowAll);

    let body = json!({ "name": "Asha", "email": "asha@example.com" });
    let response = app.oneshot(post_json("/api/enquiry", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Name, email and phone are required");
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn enquiry_with_malformed_email_never_reaches_the_mailer() {
    let dir = TempDir::new().unwrap();
    let (ctx, mailer, _) = common::test_context(&dir);
    let app = create_router(ctx, &CorsConfig::AllowAll);

    let body = json!({
        "name": "Asha",
        "email": "not-an-email",
        "phone": "9999999999",
    });
    let response = app.oneshot(post_json("/api/enquiry", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Please provide a valid email address");
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn contact_sends_one_admin_mail() {
    let dir = TempDir::new().unwrap();
    let (ctx, mailer, _) = common::test_context(&dir);
    let app = create_router(ctx, &CorsConfig::AllowAll);

    let body = json!({
        "name": "Ravi",
        "email": "ravi@example.com",
        "company": "Acme Motors",
        "message": "Do you ship to Pune?",
    });
    let response = app.oneshot(post_json("/api/contact", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, ADMIN_EMAIL);
    assert_eq!(sent[0].1, "New Contact from Ravi");
}

#[tokio::test]
async fn contact_requires_a_message() {
    let dir = TempDir::new().unwrap();
    let (ctx, mailer, _) = common::test_context(&dir);
    let app = create_router(ctx, &CorsConfig::AllowAll);

    let body = json!({ "name": "Ravi", "email": "ravi@example.com" });
    let response = app.oneshot(post_json("/api/contact", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Name, email, and message are required fields");
    assert!(mailer.sent.lock().unwrap().is_empty());
}
