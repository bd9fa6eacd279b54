use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse, Responder};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::category::{self, CategoryStore};
use crate::openapi::ApiDoc;
use crate::store::IdAllocation;
use crate::transaction::{self, TransactionStore};
use crate::user::{self, UserStore};

pub const GREETING: &str = "Household finance tracker";

/// The three resource stores, each shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub users: web::Data<UserStore>,
    pub transactions: web::Data<TransactionStore>,
    pub categories: web::Data<CategoryStore>,
}

impl AppState {
    /// Fresh stores holding only the fixture records.
    pub fn seeded(id_allocation: IdAllocation) -> Self {
        Self {
            users: web::Data::new(UserStore::new(user::models::fixtures(), id_allocation)),
            transactions: web::Data::new(TransactionStore::new(
                transaction::models::fixtures(),
                id_allocation,
            )),
            categories: web::Data::new(CategoryStore::new(
                category::models::fixtures(),
                id_allocation,
            )),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded(IdAllocation::default())
    }
}

/// GET / - Plain-text greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}

/// GET /health - Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up"))
)]
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "healthy" }))
}

/// Registers shared state and every route. Used by the server and by tests.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state.users)
            .app_data(state.transactions)
            .app_data(state.categories)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(index)
            .service(health_check)
            .configure(user::configure)
            .configure(transaction::configure)
            .configure(category::configure);
    }
}
