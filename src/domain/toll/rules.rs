//! Toll rule primitives
//!
//! Calendar rules read the timestamp in its own offset, so a gate sending
//! `+05:00` times is judged by its local weekday and date.

use chrono::{Datelike, Weekday};

use super::rates::NATIONAL_HOLIDAYS;

/// `LLL-NNN`: three uppercase ASCII letters, a dash, three ASCII digits.
pub fn is_valid_number_plate(plate: &str) -> bool {
    let bytes = plate.as_bytes();
    bytes.len() == 7
        && bytes[..3].iter().all(u8::is_ascii_uppercase)
        && bytes[3] == b'-'
        && bytes[4..].iter().all(u8::is_ascii_digit)
}

pub fn is_weekend<D: Datelike>(date: &D) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_national_holiday<D: Datelike>(date: &D) -> bool {
    NATIONAL_HOLIDAYS.contains(&(date.month(), date.day()))
}

/// Plate-parity discount, judged on the day the vehicle entered:
/// even plates on Monday and Wednesday, odd plates on Tuesday and Thursday.
pub fn applies_number_plate_discount<D: Datelike>(plate: &str, entry_date: &D) -> bool {
    let Some(digit) = plate.chars().last().and_then(|c| c.to_digit(10)) else {
        return false;
    };
    let even = digit % 2 == 0;

    match entry_date.weekday() {
        Weekday::Mon | Weekday::Wed => even,
        Weekday::Tue | Weekday::Thu => !even,
        _ => false,
    }
}
