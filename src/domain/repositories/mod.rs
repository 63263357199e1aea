//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::user::UserRepositoryInterface;
use super::vehicle_entry::VehicleEntryRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let open = repos.vehicle_entries().find_open_by_plate("ABC-123").await?;
///     let user = repos.users().get_user_by_username("gate-ns").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn vehicle_entries(&self) -> &dyn VehicleEntryRepository;
    fn users(&self) -> &dyn UserRepositoryInterface;
}
