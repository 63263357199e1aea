//! Fixed toll rates

/// Flat charge for every trip.
pub const BASE_RATE: f64 = 20.0;

/// Charge per kilometre on weekdays.
pub const PER_KM_RATE: f64 = 0.2;

/// Per-km rate multiplier on Saturday and Sunday.
pub const WEEKEND_RATE_MULTIPLIER: f64 = 1.5;

/// Share of the subtotal waived for eligible number plates.
pub const NUMBER_PLATE_DISCOUNT: f64 = 0.10;

/// Share of the subtotal waived on national holidays.
pub const NATIONAL_HOLIDAY_DISCOUNT: f64 = 0.50;

/// National holidays as `(month, day)`, valid for every year.
pub const NATIONAL_HOLIDAYS: &[(u32, u32)] = &[(3, 23), (8, 14), (12, 25)];
