use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::debug;
use validator::Validate;

use crate::errors::{AppError, ErrorResponse, MessageResponse};
use crate::extractors::RecordId;

use super::models::{CreateUserDto, UpdateUserDto, User};
use super::service::{UserService, UserStore, ERROR_KEY};

/// Mounts the user routes under `/user`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                debug!("Rejected user body: {err}");
                AppError::invalid_body(ERROR_KEY).into()
            }))
            .service(list_users)
            .service(create_user)
            .service(get_user)
            .service(update_user)
            .service(delete_user),
    );
}

/// GET /user - List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = Vec<User>)
    )
)]
#[get("")]
pub async fn list_users(store: web::Data<UserStore>) -> Result<HttpResponse, AppError> {
    let users = UserService::list_users(store.get_ref()).await;

    Ok(HttpResponse::Ok().json(users))
}

/// GET /user/{id} - Get a specific user
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
#[get("/{id}")]
pub async fn get_user(
    store: web::Data<UserStore>,
    id: RecordId,
) -> Result<HttpResponse, AppError> {
    let user = UserService::get_user(store.get_ref(), &id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// POST /user - Create a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing required fields", body = ErrorResponse)
    )
)]
#[post("")]
pub async fn create_user(
    store: web::Data<UserStore>,
    body: web::Json<CreateUserDto>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|_| AppError::missing_fields(ERROR_KEY))?;

    let user = UserService::create_user(store.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// PUT /user/{id} - Update a user
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
#[put("/{id}")]
pub async fn update_user(
    store: web::Data<UserStore>,
    id: RecordId,
    body: web::Json<UpdateUserDto>,
) -> Result<HttpResponse, AppError> {
    let user = UserService::update_user(store.get_ref(), &id, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /user/{id} - Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
#[delete("/{id}")]
pub async fn delete_user(
    store: web::Data<UserStore>,
    id: RecordId,
) -> Result<HttpResponse, AppError> {
    UserService::delete_user(store.get_ref(), &id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted")))
}
