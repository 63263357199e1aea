//! SeaORM implementation of VehicleEntryRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::{db_err, is_unique_violation};
use crate::domain::vehicle_entry::{VehicleEntry, VehicleEntryRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::vehicle_entry;

pub struct SeaOrmVehicleEntryRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: vehicle_entry::Model) -> VehicleEntry {
    VehicleEntry {
        id: m.id,
        number_plate: m.number_plate,
        entry_interchange: m.entry_interchange,
        entry_date_time: m.entry_date_time,
    }
}

#[async_trait]
impl VehicleEntryRepository for SeaOrmVehicleEntryRepository {
    async fn find_open_by_plate(&self, number_plate: &str) -> DomainResult<Option<VehicleEntry>> {
        let model = vehicle_entry::Entity::find()
            .filter(vehicle_entry::Column::NumberPlate.eq(number_plate))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn insert(&self, entry: VehicleEntry) -> DomainResult<()> {
        debug!("Inserting vehicle entry {} for {}", entry.id, entry.number_plate);
        let plate = entry.number_plate.clone();

        let model = vehicle_entry::ActiveModel {
            id: Set(entry.id),
            number_plate: Set(entry.number_plate),
            entry_interchange: Set(entry.entry_interchange),
            entry_date_time: Set(entry.entry_date_time),
        };

        model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::DuplicateEntry(plate)
            } else {
                db_err(e)
            }
        })?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        debug!("Deleting vehicle entry {}", id);
        vehicle_entry::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
