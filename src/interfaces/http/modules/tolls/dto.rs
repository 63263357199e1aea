//! Entry/exit gate DTOs

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{ExitReceipt, GateCommand};
use crate::domain::{DiscountKind, VehicleEntry};

/// Body for both `/entry` and `/exit`. camelCase keys are accepted too.
///
/// No field limits here: `TollService` checks every field in a fixed order.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct GateRequest {
    /// Station name; defaults to the operator's interchange from the token
    #[serde(default)]
    pub interchange: Option<String>,
    /// `LLL-NNN`
    #[serde(default, alias = "numberPlate")]
    pub number_plate: Option<String>,
    /// RFC 3339, `YYYY-MM-DDTHH:MM:SS` (UTC) or `YYYY-MM-DD`; defaults to now
    #[serde(default, alias = "dateTime")]
    pub date_time: Option<String>,
}

impl From<GateRequest> for GateCommand {
    fn from(req: GateRequest) -> Self {
        Self {
            interchange: req.interchange,
            number_plate: req.number_plate,
            date_time: req.date_time,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleEntryDto {
    pub id: String,
    pub number_plate: String,
    pub entry_interchange: String,
    pub entry_date_time: DateTime<FixedOffset>,
}

impl From<VehicleEntry> for VehicleEntryDto {
    fn from(e: VehicleEntry) -> Self {
        Self {
            id: e.id,
            number_plate: e.number_plate,
            entry_interchange: e.entry_interchange,
            entry_date_time: e.entry_date_time,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EntryResponse {
    pub message: String,
    pub entry: VehicleEntryDto,
}

/// Toll charged on exit. Money fields are rounded to 2 decimals.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExitResponse {
    pub message: String,
    pub number_plate: String,
    pub entry_interchange: String,
    pub exit_interchange: String,
    pub entry_date_time: DateTime<FixedOffset>,
    pub exit_date_time: DateTime<FixedOffset>,
    pub base_rate: f64,
    pub distance_cost: f64,
    /// e.g. `Distance: 29KM, Rate: 0.2/KM`
    pub distance_breakdown: String,
    pub sub_total: f64,
    pub discount: f64,
    pub total_charged: f64,
    /// `none`, `national_holiday` or `number_plate`
    #[schema(value_type = String)]
    pub discount_type: DiscountKind,
}

impl From<ExitReceipt> for ExitResponse {
    fn from(r: ExitReceipt) -> Self {
        Self {
            message: "Toll calculated successfully.".to_string(),
            number_plate: r.number_plate,
            entry_interchange: r.entry_interchange,
            exit_interchange: r.exit_interchange,
            entry_date_time: r.entry_date_time,
            exit_date_time: r.exit_date_time,
            base_rate: r.breakdown.base_rate,
            distance_cost: r.breakdown.distance_cost,
            distance_breakdown: r.breakdown.distance_breakdown,
            sub_total: r.breakdown.sub_total,
            discount: r.breakdown.discount,
            total_charged: r.breakdown.total_charged,
            discount_type: r.breakdown.discount_kind,
        }
    }
}
