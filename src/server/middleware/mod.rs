//! Request authentication helpers.
//!
//! `AuthGuard` resolves the caller from the session and `AuthSession` wraps the
//! session keys used for authentication.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
