//! User domain models and parameters.
//!
//! Provides the public user model returned by the API, the credential record used
//! during login, and parameters for registration.

use crate::model::user::{RegisterUserDto, UserDto};

/// Registered user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key of the user.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    /// Unique email address.
    pub email: String,
    /// Whether the account may log in. `None` is treated as active.
    pub is_active: Option<bool>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The stored password digest is dropped.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            firstname: entity.firstname,
            lastname: entity.lastname,
            email: entity.email,
            is_active: entity.is_active,
        }
    }

    /// Returns false only when the account has been explicitly deactivated.
    pub fn is_active(&self) -> bool {
        self.is_active != Some(false)
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            firstname: self.firstname,
            lastname: self.lastname,
        }
    }
}

/// A user together with their stored password digest.
///
/// Only produced for credential checks during login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    /// Stored `salt$digest` string.
    pub password: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password = entity.password.clone();

        Self {
            user: User::from_entity(entity),
            password,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Plaintext password, hashed by the service before storage.
    pub password: String,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username,
            firstname: dto.firstname,
            lastname: dto.lastname,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for inserting a user row once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Password digest in `salt$digest` form.
    pub password_digest: String,
}
