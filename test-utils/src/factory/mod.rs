//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let planet = factory::create_planet(&db).await?;
//!     let favorite = factory::favorite::create_planet_favorite(&db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("luke")
//!     .is_active(Some(false))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `character` - Create character entities
//! - `planet` - Create planet entities
//! - `vehicle` - Create vehicle entities
//! - `favorite` - Create favorite rows pointing at one target
//! - `helpers` - Unique id generation and multi-entity setup

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::create_character;
pub use planet::create_planet;
pub use user::create_user;
pub use vehicle::create_vehicle;
