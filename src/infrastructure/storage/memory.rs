//! In-memory storage implementation

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, RepositoryProvider, User, UserRepositoryInterface,
    VehicleEntry, VehicleEntryRepository,
};

/// Open entries keyed by number plate, so the map itself enforces one per plate.
#[derive(Default)]
pub struct InMemoryVehicleEntries {
    by_plate: DashMap<String, VehicleEntry>,
}

#[async_trait]
impl VehicleEntryRepository for InMemoryVehicleEntries {
    async fn find_open_by_plate(&self, number_plate: &str) -> DomainResult<Option<VehicleEntry>> {
        Ok(self.by_plate.get(number_plate).map(|e| e.value().clone()))
    }

    async fn insert(&self, entry: VehicleEntry) -> DomainResult<()> {
        match self.by_plate.entry(entry.number_plate.clone()) {
            Entry::Occupied(_) => Err(DomainError::DuplicateEntry(entry.number_plate)),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.by_plate.retain(|_, e| e.id != id);
        Ok(())
    }
}

/// Users keyed by username.
#[derive(Default)]
pub struct InMemoryUsers {
    by_username: DashMap<String, User>,
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUsers {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        match self.by_username.entry(dto.username.clone()) {
            Entry::Occupied(_) => Err(DomainError::Conflict("Username already exists".into())),
            Entry::Vacant(slot) => {
                let user = User {
                    id: uuid::Uuid::new_v4().to_string(),
                    username: dto.username,
                    password_hash: dto.password_hash,
                    interchange: dto.interchange,
                    created_at: Utc::now(),
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn get_user_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        Ok(self.by_username.get(username).map(|u| u.value().clone()))
    }

    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self
            .by_username
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.value().clone()))
    }
}

/// In-memory repository provider for development and testing
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    vehicle_entries: InMemoryVehicleEntries,
    users: InMemoryUsers,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn vehicle_entries(&self) -> &dyn VehicleEntryRepository {
        &self.vehicle_entries
    }

    fn users(&self) -> &dyn UserRepositoryInterface {
        &self.users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn entry(plate: &str) -> VehicleEntry {
        VehicleEntry::new(
            plate,
            "Zero point",
            DateTime::parse_from_rfc3339("2023-10-23T08:00:00Z").unwrap(),
        )
    }

    #[tokio::test]
    async fn one_open_entry_per_plate() {
        let repos = InMemoryRepositoryProvider::new();
        let first = entry("ABC-123");
        repos.vehicle_entries().insert(first.clone()).await.unwrap();

        let err = repos
            .vehicle_entries()
            .insert(entry("ABC-123"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateEntry("ABC-123".into()));

        repos.vehicle_entries().delete(&first.id).await.unwrap();
        repos.vehicle_entries().insert(entry("ABC-123")).await.unwrap();
    }

    #[tokio::test]
    async fn users_by_name_and_id() {
        let repos = InMemoryRepositoryProvider::new();
        let dto = CreateUserDto {
            username: "gate-zero".into(),
            password_hash: "hash".into(),
            interchange: "Zero point".into(),
        };
        let user = repos.users().create_user(dto.clone()).await.unwrap();

        assert!(repos.users().get_user_by_id(&user.id).await.unwrap().is_some());
        assert!(matches!(
            repos.users().create_user(dto).await,
            Err(DomainError::Conflict(_))
        ));
    }
}
