pub mod admin;
pub mod app;
pub mod config;
pub mod error;
pub mod favorites;
pub mod people;
pub mod planets;
pub mod state;
pub mod users;
