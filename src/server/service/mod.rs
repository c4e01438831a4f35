//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Credential checks, existence checks and conflict detection
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running favorite lookups and writes atomically

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
