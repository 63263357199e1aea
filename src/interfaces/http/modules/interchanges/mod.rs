//! Public station directory

pub mod handlers;

pub use handlers::*;
