use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
};
use sea_orm::{ActiveModelTrait, ActiveValue};
use test_utils::{builder::TestBuilder, factory};
