use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod find_credentials_by_username;
mod get_all;
mod username_or_email_taken;

fn create_param(username: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        firstname: "Luke".to_string(),
        lastname: "Skywalker".to_string(),
        email: email.to_string(),
        password_digest: "00$11".to_string(),
    }
}
