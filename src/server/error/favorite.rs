use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::favorite::FavoriteKind};

/// Failures surfaced by the favorite store.
#[derive(Error, Debug, PartialEq)]
pub enum FavoriteError {
    /// The requested favorite type is not one of characters, planets or vehicles.
    #[error("Invalid favorite type '{0}'")]
    InvalidKind(String),

    /// No favorite matches (user, kind, target id) on removal.
    #[error("Favorite {kind} {target_id} not found")]
    NotFound {
        kind: FavoriteKind,
        target_id: i32,
    },

    /// The entity to favorite does not exist.
    #[error("{} {target_id} not found", .kind.label())]
    TargetNotFound {
        kind: FavoriteKind,
        target_id: i32,
    },
}

/// Converts favorite errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidKind`
/// - 404 Not Found - For `NotFound` and `TargetNotFound`
impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidKind(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::TargetNotFound { .. } => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
