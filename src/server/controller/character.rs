use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::character::SaveCharacterDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, model::character::SaveCharacterParam,
        service::character::CharacterService, state::AppState,
    },
};

/// GET /people - List all characters
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: JSON array of CharacterDto ordered by ID
/// - `401 Unauthorized`: Not logged in
pub async fn get_characters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let character_service = CharacterService::new(&state.db);
    let characters = character_service.get_all().await?;

    let characters_dto: Vec<_> = characters.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(characters_dto)))
}

/// GET /people/{id} - Get a single character
///
/// # Returns
/// - `200 OK`: CharacterDto
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: No character with that ID
pub async fn get_character(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let character_service = CharacterService::new(&state.db);
    let character = character_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// POST /people - Create a character
///
/// # Returns
/// - `201 Created`: The created CharacterDto
/// - `401 Unauthorized`: Not logged in
pub async fn create_character(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let character_service = CharacterService::new(&state.db);
    let character = character_service
        .create(SaveCharacterParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

/// PUT /people/{id} - Replace a character
///
/// # Returns
/// - `200 OK`: The updated CharacterDto
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: No character with that ID
pub async fn update_character(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let character_service = CharacterService::new(&state.db);
    let character = character_service
        .update(id, SaveCharacterParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// DELETE /people/{id} - Delete a character
///
/// Favorites pointing at the character are removed with it.
///
/// # Returns
/// - `204 No Content`: Deleted
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: No character with that ID
pub async fn delete_character(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let character_service = CharacterService::new(&state.db);
    character_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
