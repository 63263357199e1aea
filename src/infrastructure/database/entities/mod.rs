//! Database entities module

pub mod user;
pub mod vehicle_entry;

pub use user::Entity as User;
pub use vehicle_entry::Entity as VehicleEntry;
