//! SeaORM entity models for the holonet database.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
