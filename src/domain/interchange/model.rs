//! Interchange map
//!
//! The motorway is a single line; each interchange sits at a fixed
//! kilometre mark measured from "Zero point".

use serde::Serialize;

use crate::shared::errors::DomainError;

/// A toll station on the motorway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interchange {
    pub name: &'static str,
    /// Kilometres from "Zero point"
    pub distance_km: f64,
}

/// Every station the service knows about, in motorway order.
pub const INTERCHANGES: &[Interchange] = &[
    Interchange { name: "Zero point", distance_km: 0.0 },
    Interchange { name: "NS Interchange", distance_km: 5.0 },
    Interchange { name: "Ph4 Interchange", distance_km: 10.0 },
    Interchange { name: "Ferozpur Interchange", distance_km: 17.0 },
    Interchange { name: "Lake City Interchange", distance_km: 24.0 },
    Interchange { name: "Raiwand Interchange", distance_km: 29.0 },
    Interchange { name: "Bahria Interchange", distance_km: 34.0 },
];

/// Look up a station by its exact (case-sensitive) name.
pub fn find_interchange(name: &str) -> Option<&'static Interchange> {
    INTERCHANGES.iter().find(|i| i.name == name)
}

pub fn is_known_interchange(name: &str) -> bool {
    find_interchange(name).is_some()
}

/// Absolute distance in km between two stations.
pub fn distance_between(from: &str, to: &str) -> Result<f64, DomainError> {
    let from = find_interchange(from)
        .ok_or_else(|| DomainError::UnknownInterchange(from.to_string()))?;
    let to = find_interchange(to).ok_or_else(|| DomainError::UnknownInterchange(to.to_string()))?;
    Ok((from.distance_km - to.distance_km).abs())
}
