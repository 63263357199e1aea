//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::UserRepositoryInterface;
use crate::domain::vehicle_entry::VehicleEntryRepository;

use super::user_repository::UserRepository;
use super::vehicle_entry_repository::SeaOrmVehicleEntryRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let open = repos.vehicle_entries().find_open_by_plate("ABC-123").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    vehicle_entries: SeaOrmVehicleEntryRepository,
    users: UserRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            vehicle_entries: SeaOrmVehicleEntryRepository::new(db.clone()),
            users: UserRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn vehicle_entries(&self) -> &dyn VehicleEntryRepository {
        &self.vehicle_entries
    }

    fn users(&self) -> &dyn UserRepositoryInterface {
        &self.users
    }
}
