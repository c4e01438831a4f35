use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{login, logout, register},
        character::{
            create_character, delete_character, get_character, get_characters, update_character,
        },
        favorite::{add_favorite, remove_favorite},
        planet::{create_planet, delete_planet, get_planet, get_planets, update_planet},
        user::{get_current_user, get_user_favorites, get_users},
        vehicle::{create_vehicle, delete_vehicle, get_vehicle, get_vehicles, update_vehicle},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/users", get(get_users))
        .route("/users/me", get(get_current_user))
        .route("/users/favorites", get(get_user_favorites))
        .route("/people", get(get_characters).post(create_character))
        .route(
            "/people/{id}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        .route("/planets", get(get_planets).post(create_planet))
        .route(
            "/planets/{id}",
            get(get_planet).put(update_planet).delete(delete_planet),
        )
        .route("/vehicles", get(get_vehicles).post(create_vehicle))
        .route(
            "/vehicles/{id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route(
            "/favorites/{kind}/{target_id}",
            post(add_favorite).delete(remove_favorite),
        )
}
