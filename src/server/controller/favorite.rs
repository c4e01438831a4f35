use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::favorite::FavoriteDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::favorite::{Favorite, FavoriteKind, FavoriteParam, FavoriteTarget},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// POST /favorites/{kind}/{target_id} - Add a favorite for the authenticated user
///
/// # Path Parameters
/// - `kind`: `people`, `characters`, `planets` or `vehicles`
/// - `target_id`: ID of the record to favorite
///
/// # Returns
/// - `200 OK`: The caller's favorites after the add
/// - `400 Bad Request`: Unknown kind
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: No record with that ID
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path((kind, target_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let param = favorite_param(user.id, &kind, target_id)?;

    let favorite_service = FavoriteService::new(&state.db);
    let favorites = favorite_service.add(param).await?;

    Ok((StatusCode::OK, Json(into_dtos(favorites))))
}

/// DELETE /favorites/{kind}/{target_id} - Remove a favorite of the authenticated user
///
/// # Returns
/// - `200 OK`: The caller's favorites after the removal
/// - `400 Bad Request`: Unknown kind
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: The caller has no such favorite
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path((kind, target_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let param = favorite_param(user.id, &kind, target_id)?;

    let favorite_service = FavoriteService::new(&state.db);
    let favorites = favorite_service.remove(param).await?;

    Ok((StatusCode::OK, Json(into_dtos(favorites))))
}

fn favorite_param(user_id: i32, kind: &str, target_id: i32) -> Result<FavoriteParam, AppError> {
    let kind: FavoriteKind = kind.parse()?;

    Ok(FavoriteParam {
        user_id,
        target: FavoriteTarget::new(kind, target_id),
    })
}

fn into_dtos(favorites: Vec<Favorite>) -> Vec<FavoriteDto> {
    favorites.into_iter().map(|f| f.into_dto()).collect()
}
