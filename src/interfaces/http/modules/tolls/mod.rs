//! Toll gates: vehicle entry and exit

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
