use crate::server::{
    data::favorite::FavoriteRepository,
    error::{internal::InternalError, AppError},
    model::favorite::{FavoriteParam, FavoriteTarget},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_id;
mod list_by_user;
mod target_exists;
