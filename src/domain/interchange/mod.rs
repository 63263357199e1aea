//! Interchange (toll station) reference data

pub mod model;

pub use model::{distance_between, find_interchange, is_known_interchange, Interchange, INTERCHANGES};
