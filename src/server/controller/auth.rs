use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, LoginResponseDto, RegisterUserDto},
    server::{
        error::AppError, middleware::session::AuthSession, model::user::RegisterUserParam,
        service::auth::AuthService, state::AppState,
    },
};

/// POST /register - Create a new user account
///
/// # Returns
/// - `201 Created`: The created UserDto
/// - `409 Conflict`: Username or email already registered
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service
        .register(RegisterUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /login - Authenticate with username and password
///
/// On success the user's ID is stored in the session, whose cookie identifies the
/// caller on subsequent requests.
///
/// # Returns
/// - `200 OK`: `{"user_id": <id>}`
/// - `401 Unauthorized`: Wrong username or password, or inactive account
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service
        .login(&payload.username, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::debug!("User {} logged in", user.id);

    Ok((StatusCode::OK, Json(LoginResponseDto { user_id: user.id })))
}

/// POST /logout - End the current session
///
/// # Returns
/// - `204 No Content`: Session cleared (also when nobody was logged in)
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}
