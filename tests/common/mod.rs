#![allow(dead_code)]

use actix_web::http::Method;
use actix_web::{test, App};
use serde_json::Value;

use kakeibo_be::app::{self, AppState};
use kakeibo_be::store::IdAllocation;

pub struct TestApp {
    pub state: AppState,
}

pub struct TestResponse {
    status: u16,
    content_type: Option<String>,
    body: bytes::Bytes,
}

impl TestResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub async fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }
}

impl TestApp {
    /// Every test gets its own freshly seeded stores.
    pub async fn new() -> Self {
        Self::with_allocation(IdAllocation::Length).await
    }

    pub async fn with_allocation(allocation: IdAllocation) -> Self {
        TestApp {
            state: AppState::seeded(allocation),
        }
    }

    async fn call(&self, req: test::TestRequest) -> TestResponse {
        let app =
            test::init_service(App::new().configure(app::configure(self.state.clone()))).await;

        let resp = test::call_service(&app, req.to_request()).await;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = test::read_body(resp).await;

        TestResponse {
            status,
            content_type,
            body,
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.call(test::TestRequest::get().uri(path)).await
    }

    pub async fn post(&self, path: &str, payload: &Value) -> TestResponse {
        self.call(test::TestRequest::post().uri(path).set_json(payload))
            .await
    }

    pub async fn put(&self, path: &str, payload: &Value) -> TestResponse {
        self.call(test::TestRequest::put().uri(path).set_json(payload))
            .await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.call(test::TestRequest::delete().uri(path)).await
    }

    /// Sends `raw` as a JSON body without checking that it parses.
    pub async fn send_raw(&self, method: Method, path: &str, raw: &'static str) -> TestResponse {
        self.call(
            test::TestRequest::default()
                .method(method)
                .uri(path)
                .insert_header(("content-type", "application/json"))
                .set_payload(raw),
        )
        .await
    }

    /// Number of records currently listed under `path`.
    pub async fn count(&self, path: &str) -> usize {
        let body = self.get(path).await.json().await;
        body.as_array().map(Vec::len).expect("Expected a JSON array")
    }
}
