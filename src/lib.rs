pub mod app;
pub mod config;
pub mod error;
pub mod requests;
pub mod state;
pub mod users;
