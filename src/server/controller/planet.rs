use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::planet::SavePlanetDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, model::planet::SavePlanetParam,
        service::planet::PlanetService, state::AppState,
    },
};

/// GET /planets - List all planets
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: JSON array of PlanetDto ordered by ID
/// - `401 Unauthorized`: Not logged in
pub async fn get_planets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let planet_service = PlanetService::new(&state.db);
    let planets = planet_service.get_all().await?;

    let planets_dto: Vec<_> = planets.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(planets_dto)))
}

/// GET /planets/{id} - Get a single planet
///
/// # Returns
/// - `200 OK`: PlanetDto
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: No planet with that ID
pub async fn get_planet(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let planet_service = PlanetService::new(&state.db);
    let planet = planet_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// POST /planets - Create a planet
///
/// # Returns
/// - `201 Created`: The created PlanetDto
/// - `401 Unauthorized`: Not logged in
pub async fn create_planet(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SavePlanetDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let planet_service = PlanetService::new(&state.db);
    let planet = planet_service
        .create(SavePlanetParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(planet.into_dto())))
}

/// PUT /planets/{id} - Replace a planet
///
/// # Returns
/// - `200 OK`: The updated PlanetDto
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: No planet with that ID
pub async fn update_planet(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SavePlanetDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let planet_service = PlanetService::new(&state.db);
    let planet = planet_service
        .update(id, SavePlanetParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// DELETE /planets/{id} - Delete a planet
///
/// Favorites pointing at the planet are removed with it.
///
/// # Returns
/// - `204 No Content`: Deleted
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: No planet with that ID
pub async fn delete_planet(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let planet_service = PlanetService::new(&state.db);
    planet_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
