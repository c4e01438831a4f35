use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The caller has not logged in or the session expired.
    #[error("No user in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Username and password do not match a user.
    #[error("Wrong username or password")]
    InvalidCredentials,

    /// The user exists but is marked inactive.
    #[error("User {0} is inactive")]
    AccountInactive(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized. Session problems and credential problems
/// use separate client-facing messages; inactive accounts are reported exactly like
/// wrong credentials to avoid confirming that the account exists.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => "Authentication required",
            Self::InvalidCredentials | Self::AccountInactive(_) => "Wrong username or password",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
