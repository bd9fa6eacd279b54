use serde_json::Value;

mod common;
use common::TestApp;

#[actix_rt::test]
async fn test_root_greeting() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status(), 200);
    assert!(response
        .content_type()
        .is_some_and(|ct| ct.starts_with("text/plain")));
    assert_eq!(response.text(), kakeibo_be::app::GREETING);
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    assert_eq!(body["status"], "healthy");
}

#[actix_rt::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::new().await;

    let response = app.get("/api-docs/openapi.json").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    assert!(body["paths"]["/transaction/{id}"].is_object());
}

#[actix_rt::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/budget").await;

    assert_eq!(response.status(), 404);
}

#[actix_rt::test]
async fn test_resources_are_independent() {
    let app = TestApp::new().await;

    // Deleting a category does not touch transactions that mention it
    assert_eq!(app.delete("/category/1").await.status(), 200);

    assert_eq!(app.count("/category").await, 1);
    assert_eq!(app.count("/transaction").await, 2);
    assert_eq!(app.count("/user").await, 2);
}
