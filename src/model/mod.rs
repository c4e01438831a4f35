//! Data transfer objects exchanged with HTTP clients.
//!
//! These types define the JSON shapes of request and response bodies. Server-side
//! domain models convert into them via `into_dto()`.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
