//! Vehicle entry domain entity

use chrono::{DateTime, FixedOffset};

/// An open trip: the vehicle passed an entry gate and has not exited yet.
///
/// At most one exists per number plate. Created on entry, removed on exit.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleEntry {
    pub id: String,
    pub number_plate: String,
    pub entry_interchange: String,
    pub entry_date_time: DateTime<FixedOffset>,
}

impl VehicleEntry {
    pub fn new(
        number_plate: impl Into<String>,
        entry_interchange: impl Into<String>,
        entry_date_time: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            number_plate: number_plate.into(),
            entry_interchange: entry_interchange.into(),
            entry_date_time,
        }
    }
}
