use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    service::{favorite::FavoriteService, user::UserService},
    state::AppState,
};

/// GET /users - List all users
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: JSON array of UserDto ordered by username
/// - `401 Unauthorized`: Not logged in
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let user_service = UserService::new(&state.db);
    let users = user_service.get_all_users().await?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// GET /users/me - Get the authenticated user
///
/// # Returns
/// - `200 OK`: UserDto of the caller
/// - `401 Unauthorized`: Not logged in
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /users/favorites - List the authenticated user's favorites
///
/// # Returns
/// - `200 OK`: JSON array of FavoriteDto ordered by ID
/// - `401 Unauthorized`: Not logged in
pub async fn get_user_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let favorite_service = FavoriteService::new(&state.db);
    let favorites = favorite_service.list(user.id).await?;

    let favorites_dto: Vec<_> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(favorites_dto)))
}
