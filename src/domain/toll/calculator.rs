//! Toll calculation
//!
//! Pure function of the open entry, the exit station and the exit time.
//! Intermediate values stay unrounded; money is rounded to 2 decimals only
//! when the breakdown is built.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::rates::{
    BASE_RATE, NATIONAL_HOLIDAY_DISCOUNT, NUMBER_PLATE_DISCOUNT, PER_KM_RATE,
    WEEKEND_RATE_MULTIPLIER,
};
use super::rules::{applies_number_plate_discount, is_national_holiday, is_weekend};
use crate::domain::interchange::distance_between;
use crate::domain::vehicle_entry::VehicleEntry;
use crate::shared::errors::DomainError;

/// Which discount reduced the subtotal, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    None,
    NationalHoliday,
    NumberPlate,
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::NationalHoliday => write!(f, "national_holiday"),
            Self::NumberPlate => write!(f, "number_plate"),
        }
    }
}

/// Fee breakdown for one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TollBreakdown {
    pub base_rate: f64,
    pub distance_cost: f64,
    /// e.g. `Distance: 29KM, Rate: 0.2/KM`
    pub distance_breakdown: String,
    pub sub_total: f64,
    pub discount: f64,
    pub total_charged: f64,
    pub discount_kind: DiscountKind,
}

fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the toll for a vehicle leaving at `exit_interchange`.
///
/// The weekend surcharge and holiday discount follow the exit time; the
/// plate discount follows the entry time. Holiday discount wins over the
/// plate discount.
pub fn calculate_toll(
    entry: &VehicleEntry,
    exit_interchange: &str,
    exit_time: &DateTime<FixedOffset>,
) -> Result<TollBreakdown, DomainError> {
    let distance = distance_between(&entry.entry_interchange, exit_interchange)?;

    let per_km_rate = if is_weekend(exit_time) {
        PER_KM_RATE * WEEKEND_RATE_MULTIPLIER
    } else {
        PER_KM_RATE
    };

    let distance_cost = distance * per_km_rate;
    let sub_total = BASE_RATE + distance_cost;

    let (discount_kind, discount) = if is_national_holiday(exit_time) {
        (DiscountKind::NationalHoliday, sub_total * NATIONAL_HOLIDAY_DISCOUNT)
    } else if applies_number_plate_discount(&entry.number_plate, &entry.entry_date_time) {
        (DiscountKind::NumberPlate, sub_total * NUMBER_PLATE_DISCOUNT)
    } else {
        (DiscountKind::None, 0.0)
    };
    let discount = discount.min(sub_total);

    Ok(TollBreakdown {
        base_rate: round_money(BASE_RATE),
        distance_cost: round_money(distance_cost),
        distance_breakdown: format!("Distance: {}KM, Rate: {:.1}/KM", distance, per_km_rate),
        sub_total: round_money(sub_total),
        discount: round_money(discount),
        total_charged: round_money(sub_total - discount),
        discount_kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    fn entry(plate: &str, interchange: &str, time: &str) -> VehicleEntry {
        VehicleEntry::new(plate, interchange, at(time))
    }

    #[test]
    fn weekday_without_discount() {
        // Friday entry and exit: no parity discount, no surcharge
        let e = entry("ABC-123", "NS Interchange", "2023-10-20T08:00:00Z");
        let b = calculate_toll(&e, "Bahria Interchange", &at("2023-10-20T09:00:00Z")).unwrap();

        assert_eq!(b.base_rate, 20.0);
        assert_eq!(b.distance_cost, 5.8);
        assert_eq!(b.distance_breakdown, "Distance: 29KM, Rate: 0.2/KM");
        assert_eq!(b.sub_total, 25.8);
        assert_eq!(b.discount, 0.0);
        assert_eq!(b.total_charged, 25.8);
        assert_eq!(b.discount_kind, DiscountKind::None);
    }

    #[test]
    fn weekend_surcharge() {
        let e = entry("ABC-123", "NS Interchange", "2023-10-21T08:00:00Z");
        let b = calculate_toll(&e, "Bahria Interchange", &at("2023-10-21T09:00:00Z")).unwrap();

        assert_eq!(b.distance_cost, 8.7);
        assert_eq!(b.distance_breakdown, "Distance: 29KM, Rate: 0.3/KM");
        assert_eq!(b.sub_total, 28.7);
        assert_eq!(b.total_charged, 28.7);
    }

    #[test]
    fn plate_discount_uses_entry_day() {
        // Even plate entering Monday, leaving Tuesday
        let e = entry("ABC-124", "Zero point", "2023-10-23T23:00:00Z");
        let b = calculate_toll(&e, "Ph4 Interchange", &at("2023-10-24T01:00:00Z")).unwrap();

        assert_eq!(b.sub_total, 22.0);
        assert_eq!(b.discount, 2.2);
        assert_eq!(b.total_charged, 19.8);
        assert_eq!(b.discount_kind, DiscountKind::NumberPlate);
    }

    #[test]
    fn holiday_beats_plate_discount() {
        // 2024-12-25 is a Wednesday; even plate would also qualify
        let e = entry("ABC-124", "Zero point", "2024-12-25T08:00:00Z");
        let b = calculate_toll(&e, "Bahria Interchange", &at("2024-12-25T10:00:00Z")).unwrap();

        assert_eq!(b.sub_total, 26.8);
        assert_eq!(b.discount, 13.4);
        assert_eq!(b.total_charged, 13.4);
        assert_eq!(b.discount_kind, DiscountKind::NationalHoliday);
    }

    #[test]
    fn same_station_charges_base_rate() {
        let e = entry("XYZ-555", "Raiwand Interchange", "2023-10-20T08:00:00Z");
        let b = calculate_toll(&e, "Raiwand Interchange", &at("2023-10-20T08:05:00Z")).unwrap();

        assert_eq!(b.distance_cost, 0.0);
        assert_eq!(b.distance_breakdown, "Distance: 0KM, Rate: 0.2/KM");
        assert_eq!(b.total_charged, 20.0);
    }

    #[test]
    fn calendar_follows_timestamp_offset() {
        // 23:30 Friday UTC is already Saturday at +05:00
        let e = entry("ABC-123", "NS Interchange", "2023-10-20T08:00:00Z");
        let b = calculate_toll(&e, "Bahria Interchange", &at("2023-10-21T04:30:00+05:00")).unwrap();
        assert_eq!(b.distance_breakdown, "Distance: 29KM, Rate: 0.3/KM");
    }

    #[test]
    fn unknown_exit_station() {
        let e = entry("ABC-123", "NS Interchange", "2023-10-20T08:00:00Z");
        assert_eq!(
            calculate_toll(&e, "Nowhere", &at("2023-10-20T09:00:00Z")),
            Err(DomainError::UnknownInterchange("Nowhere".into()))
        );
    }

    #[test]
    fn totals_are_consistent() {
        let e = entry("ABC-124", "Zero point", "2023-10-23T08:00:00Z");
        for station in crate::domain::interchange::INTERCHANGES {
            let b = calculate_toll(&e, station.name, &at("2023-10-23T12:00:00Z")).unwrap();
            assert!(b.discount >= 0.0 && b.discount <= b.sub_total);
            assert!(b.total_charged >= 0.0);
            assert!((b.sub_total - b.discount - b.total_charged).abs() < 0.011);
        }
    }
}
