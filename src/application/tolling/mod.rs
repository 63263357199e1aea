//! Entry/exit lifecycle

pub mod service;

pub use service::{ExitReceipt, GateCommand, TollService};
