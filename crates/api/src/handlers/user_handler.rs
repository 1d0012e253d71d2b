//! User handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use common::AppResult;
use domain::{User, UserInput};

use crate::extractors::{JsonBody, UserId};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "ID is not an integer"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Create user; the new id is reported in `Location`
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Body is not valid JSON"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserInput>,
) -> AppResult<impl IntoResponse> {
    let user = state.user_service.create_user(payload).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{}", user.id))],
    ))
}

/// Replace name and email of a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Invalid ID or body"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(payload): JsonBody<UserInput>,
) -> AppResult<StatusCode> {
    state.user_service.update_user(id, payload).await?;
    Ok(StatusCode::OK)
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "ID is not an integer"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_user(State(state): State<AppState>, UserId(id): UserId) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    tracing::info!(user_id = id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
