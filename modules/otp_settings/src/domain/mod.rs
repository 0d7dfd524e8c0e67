//! Domain layer - business logic and services

pub mod repository;
pub mod seeding;
pub mod service;
pub mod validation;

pub use repository::OtpSettingsStore;
pub use seeding::{SeedingPolicy, DEFAULT_ACTIONS};
pub use service::Service;
