use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::debug;
use validator::Validate;

use crate::errors::{AppError, MessageResponse};
use crate::extractors::RecordId;

use super::models::{Category, CreateCategoryDto, UpdateCategoryDto};
use super::service::{CategoryService, CategoryStore, ERROR_KEY};

/// Mounts the category routes under `/category`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/category")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                debug!("Rejected category body: {err}");
                AppError::invalid_body(ERROR_KEY).into()
            }))
            .service(list_categories)
            .service(create_category)
            .service(get_category)
            .service(update_category)
            .service(delete_category),
    );
}

/// GET /category - List all categories
#[utoipa::path(
    get,
    path = "/category",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories in insertion order", body = Vec<Category>)
    )
)]
#[get("")]
pub async fn list_categories(store: web::Data<CategoryStore>) -> Result<HttpResponse, AppError> {
    let categories = CategoryService::list(store.get_ref()).await;

    Ok(HttpResponse::Ok().json(categories))
}

/// GET /category/{id} - Get a specific category
#[utoipa::path(
    get,
    path = "/category/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found", body = MessageResponse)
    )
)]
#[get("/{id}")]
pub async fn get_category(
    store: web::Data<CategoryStore>,
    id: RecordId,
) -> Result<HttpResponse, AppError> {
    let category = CategoryService::get_by_id(store.get_ref(), id.value).await?;

    Ok(HttpResponse::Ok().json(category))
}

/// POST /category - Create a new category
#[utoipa::path(
    post,
    path = "/category",
    tag = "Categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Missing required fields", body = MessageResponse)
    )
)]
#[post("")]
pub async fn create_category(
    store: web::Data<CategoryStore>,
    body: web::Json<CreateCategoryDto>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|_| AppError::missing_fields(ERROR_KEY))?;

    let category = CategoryService::create(store.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(category))
}

/// PUT /category/{id} - Update a category
#[utoipa::path(
    put,
    path = "/category/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category id")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 404, description = "Category not found", body = MessageResponse)
    )
)]
#[put("/{id}")]
pub async fn update_category(
    store: web::Data<CategoryStore>,
    id: RecordId,
    body: web::Json<UpdateCategoryDto>,
) -> Result<HttpResponse, AppError> {
    let category =
        CategoryService::update(store.get_ref(), id.value, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(category))
}

/// DELETE /category/{id} - Delete a category
#[utoipa::path(
    delete,
    path = "/category/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found", body = MessageResponse)
    )
)]
#[delete("/{id}")]
pub async fn delete_category(
    store: web::Data<CategoryStore>,
    id: RecordId,
) -> Result<HttpResponse, AppError> {
    CategoryService::delete(store.get_ref(), id.value).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Category deleted")))
}
