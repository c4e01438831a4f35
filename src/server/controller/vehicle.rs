use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::vehicle::SaveVehicleDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, model::vehicle::SaveVehicleParam,
        service::vehicle::VehicleService, state::AppState,
    },
};

/// GET /vehicles - List all vehicles
pub async fn get_vehicles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let vehicle_service = VehicleService::new(&state.db);
    let vehicles = vehicle_service.get_all().await?;

    let vehicles_dto: Vec<_> = vehicles.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(vehicles_dto)))
}

/// GET /vehicles/{id} - Get a single vehicle
pub async fn get_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let vehicle_service = VehicleService::new(&state.db);
    let vehicle = vehicle_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// POST /vehicles - Create a vehicle
pub async fn create_vehicle(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let vehicle_service = VehicleService::new(&state.db);
    let vehicle = vehicle_service
        .create(SaveVehicleParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle.into_dto())))
}

/// PUT /vehicles/{id} - Replace a vehicle
pub async fn update_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let vehicle_service = VehicleService::new(&state.db);
    let vehicle = vehicle_service
        .update(id, SaveVehicleParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// DELETE /vehicles/{id} - Delete a vehicle
pub async fn delete_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require().await?;

    let vehicle_service = VehicleService::new(&state.db);
    vehicle_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
