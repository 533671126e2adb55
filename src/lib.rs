//! Gym management backend: members and workout sessions over Postgres.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
