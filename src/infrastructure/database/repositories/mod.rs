//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod repository_provider;
pub mod user_repository;
pub mod vehicle_entry_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
pub use user_repository::UserRepository;
pub use vehicle_entry_repository::SeaOrmVehicleEntryRepository;

use sea_orm::{DbErr, SqlErr};

use crate::shared::errors::{DomainError, InfraError};

fn db_err(e: DbErr) -> DomainError {
    InfraError::Database(e).into()
}

/// Unique-index violations, whichever backend raised them.
fn is_unique_violation(e: &DbErr) -> bool {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return true;
    }
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("duplicate")
}
