//! HTTP request handlers.
//!
//! Each handler authenticates the caller where required, converts request DTOs into
//! parameter types, calls the matching service and converts the result back to DTOs.

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
