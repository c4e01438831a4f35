use serde::{Deserialize, Serialize};

/// Public view of a user. The password is never serialized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegisterUserDto {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginResponseDto {
    pub user_id: i32,
}
