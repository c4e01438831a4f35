mod character;
mod favorite;
mod planet;
mod user;
mod vehicle;
