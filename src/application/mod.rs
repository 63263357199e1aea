//! Application layer: use cases orchestrating the domain and repositories

pub mod identity;
pub mod tolling;

pub use identity::{AuthResult, IdentityService};
pub use tolling::{ExitReceipt, GateCommand, TollService};
