pub mod api;
pub mod config;
pub mod controller;
pub mod errors;
pub mod logo;
pub mod models;
pub mod roster;
pub mod time;
pub mod ui;
pub mod validate;
