//! # Toll Gate Service
//!
//! Distance-based toll billing for a single motorway: an entry gate opens a
//! trip for a number plate, the exit gate closes it and charges the toll.
//!
//! ## Architecture
//!
//! - **domain**: interchanges, toll rules and calculator, entities and repository traits
//! - **application**: gate and identity use cases
//! - **infrastructure**: SeaORM persistence, in-memory store, JWT and password hashing
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: runtime wiring and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};

// Re-export API router
pub use interfaces::http::create_api_router;
