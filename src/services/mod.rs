// Storage orchestration

pub mod gym_service;

pub use gym_service::{GymService, GymStore};
