//! Domain layer: station map, toll rules and the aggregates persisted by the service

pub mod interchange;
pub mod repositories;
pub mod toll;
pub mod user;
pub mod vehicle_entry;

pub use interchange::{Interchange, INTERCHANGES};
pub use repositories::{DomainResult, RepositoryProvider};
pub use toll::{DiscountKind, TollBreakdown};
pub use user::{CreateUserDto, User, UserRepositoryInterface};
pub use vehicle_entry::{VehicleEntry, VehicleEntryRepository};

pub use crate::shared::errors::DomainError;
