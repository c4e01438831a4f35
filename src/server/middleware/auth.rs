//! Authentication guard for protected endpoints.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the authenticated user for a request.
///
/// Controllers construct a guard per request and call `require()` before doing
/// any work on behalf of the caller.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the user whose ID is stored in the session.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Nobody is logged in
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - The session user no longer exists
    /// - `Err(AppError::AuthErr(AccountInactive))` - The user was deactivated after login
    /// - `Err(AppError::SessionErr)` - Session store failure
    pub async fn require(&self) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active() {
            return Err(AuthError::AccountInactive(user_id).into());
        }

        Ok(user)
    }
}
