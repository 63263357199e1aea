//! Vehicle entry aggregate
//!
//! Contains the open-trip entity and its repository interface.

pub mod model;
pub mod repository;

pub use model::VehicleEntry;
pub use repository::VehicleEntryRepository;
