use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, state::AppState};


/// Splits a handler response into its status and decoded JSON body.
async fn read_json<T: DeserializeOwned>(response: Response) -> (StatusCode, T) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
