//! Vehicle entry repository interface

use async_trait::async_trait;

use super::model::VehicleEntry;
use crate::domain::DomainResult;

#[async_trait]
pub trait VehicleEntryRepository: Send + Sync {
    async fn find_open_by_plate(&self, number_plate: &str) -> DomainResult<Option<VehicleEntry>>;

    /// Persist a new entry. Fails with `DomainError::DuplicateEntry` when the
    /// plate already has an open entry, even if a concurrent request won the race.
    async fn insert(&self, entry: VehicleEntry) -> DomainResult<()>;

    async fn delete(&self, id: &str) -> DomainResult<()>;
}
