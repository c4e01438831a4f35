//! Authentication service for registration and credential checks.
//!
//! Session handling stays in the controller; this service only decides whether a
//! registration is allowed and whether a username and password identify an active user.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterUserParam, User},
    util::password::PasswordDigest,
};

/// Service for user registration and login.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// The password is stored as a salted digest, never in plaintext.
    ///
    /// # Arguments
    /// - `param` - Profile fields and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Username, email or password is blank
    /// - `Err(AppError::Conflict)` - Username or email is already registered
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        for (field, value) in [
            ("username", &param.username),
            ("email", &param.email),
            ("password", &param.password),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} must not be empty", field)));
            }
        }

        if user_repo
            .username_or_email_taken(&param.username, &param.email)
            .await?
        {
            return Err(registration_conflict());
        }

        let password_digest = PasswordDigest::hash(&param.password).to_string();

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                firstname: param.firstname,
                lastname: param.lastname,
                email: param.email,
                password_digest,
            })
            .await
            .map_err(map_create_error)?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Verifies a username and password.
    ///
    /// # Arguments
    /// - `username` - Username to log in as
    /// - `password` - Plaintext password to check
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match an active user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(AppError::AuthErr(AccountInactive))` - The account is deactivated
    /// - `Err(AppError::InternalErr(MalformedPasswordDigest))` - Stored password is unreadable
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let digest = PasswordDigest::parse(credentials.user.id, &credentials.password)?;
        if !digest.verify(password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !credentials.user.is_active() {
            return Err(AuthError::AccountInactive(credentials.user.id).into());
        }

        Ok(credentials.user)
    }
}

fn registration_conflict() -> AppError {
    AppError::Conflict("Username or email already registered".to_string())
}

/// Maps a unique constraint violation on insert to a conflict.
///
/// A concurrent registration can pass the availability check and still lose the
/// insert to the unique index.
fn map_create_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => registration_conflict(),
        _ => err.into(),
    }
}
