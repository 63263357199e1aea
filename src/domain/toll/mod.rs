//! Toll rates, rule primitives and the fee calculator

pub mod calculator;
pub mod rates;
pub mod rules;

pub use calculator::{calculate_toll, DiscountKind, TollBreakdown};
pub use rules::{applies_number_plate_discount, is_national_holiday, is_valid_number_plate, is_weekend};
