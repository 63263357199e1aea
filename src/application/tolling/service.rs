//! Toll gate service: entry/exit lifecycle
//!
//! Validation always runs before any repository access. Per plate the
//! lifecycle is `absent -> open -> absent`: entry inserts, exit deletes.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tracing::{info, warn};

use crate::domain::interchange::{is_known_interchange, INTERCHANGES};
use crate::domain::toll::{calculate_toll, is_valid_number_plate, DiscountKind, TollBreakdown};
use crate::domain::{DomainError, DomainResult, Interchange, RepositoryProvider, VehicleEntry};
use crate::shared::errors::Gate;
use crate::shared::time::resolve_gate_timestamp;

const REQUIRED_FIELDS_MESSAGE: &str = "Interchange and Number Plate are required.";

/// Input for both gates. Missing values arrive as `None`.
#[derive(Debug, Clone, Default)]
pub struct GateCommand {
    pub interchange: Option<String>,
    pub number_plate: Option<String>,
    pub date_time: Option<String>,
}

/// Result of a completed trip.
#[derive(Debug, Clone)]
pub struct ExitReceipt {
    pub number_plate: String,
    pub entry_interchange: String,
    pub exit_interchange: String,
    pub entry_date_time: DateTime<FixedOffset>,
    pub exit_date_time: DateTime<FixedOffset>,
    pub breakdown: TollBreakdown,
}

struct GateRequest {
    interchange: String,
    number_plate: String,
    at: DateTime<FixedOffset>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolve the station (explicit value, then the operator's home station)
/// and validate the request in a fixed order.
fn validate(
    gate: Gate,
    cmd: &GateCommand,
    home_interchange: Option<&str>,
) -> DomainResult<GateRequest> {
    let interchange = non_empty(cmd.interchange.as_deref()).or(non_empty(home_interchange));
    let plate = non_empty(cmd.number_plate.as_deref());

    let (Some(interchange), Some(plate)) = (interchange, plate) else {
        return Err(DomainError::MissingField(REQUIRED_FIELDS_MESSAGE.to_string()));
    };

    if !is_known_interchange(interchange) {
        return Err(DomainError::InvalidGateInterchange {
            gate,
            interchange: interchange.to_string(),
        });
    }

    if !is_valid_number_plate(plate) {
        return Err(DomainError::InvalidNumberPlate(plate.to_string()));
    }

    let at = resolve_gate_timestamp(cmd.date_time.as_deref())?;

    Ok(GateRequest {
        interchange: interchange.to_string(),
        number_plate: plate.to_string(),
        at,
    })
}

pub struct TollService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TollService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Station directory, in motorway order.
    pub fn interchanges(&self) -> &'static [Interchange] {
        INTERCHANGES
    }

    /// Open a trip for a vehicle passing an entry gate.
    pub async fn record_entry(
        &self,
        cmd: GateCommand,
        home_interchange: Option<&str>,
    ) -> DomainResult<VehicleEntry> {
        let req = validate(Gate::Entry, &cmd, home_interchange).inspect_err(|e| {
            warn!(error = %e, "Entry rejected");
        })?;

        let entries = self.repos.vehicle_entries();
        if entries.find_open_by_plate(&req.number_plate).await?.is_some() {
            warn!(number_plate = %req.number_plate, "Duplicate entry rejected");
            return Err(DomainError::DuplicateEntry(req.number_plate));
        }

        let entry = VehicleEntry::new(req.number_plate, req.interchange, req.at);
        entries.insert(entry.clone()).await?;

        metrics::counter!("toll_vehicle_entries_total", "interchange" => entry.entry_interchange.clone())
            .increment(1);
        info!(
            entry_id = %entry.id,
            number_plate = %entry.number_plate,
            interchange = %entry.entry_interchange,
            entry_date_time = %entry.entry_date_time,
            "Vehicle entered"
        );

        Ok(entry)
    }

    /// Close the open trip for a vehicle and compute its toll.
    pub async fn record_exit(
        &self,
        cmd: GateCommand,
        home_interchange: Option<&str>,
    ) -> DomainResult<ExitReceipt> {
        let req = validate(Gate::Exit, &cmd, home_interchange).inspect_err(|e| {
            warn!(error = %e, "Exit rejected");
        })?;

        let entries = self.repos.vehicle_entries();
        let Some(entry) = entries.find_open_by_plate(&req.number_plate).await? else {
            warn!(number_plate = %req.number_plate, "Exit without entry");
            return Err(DomainError::NoOpenEntry(req.number_plate));
        };

        if req.at < entry.entry_date_time {
            warn!(
                number_plate = %req.number_plate,
                entry_date_time = %entry.entry_date_time,
                exit_date_time = %req.at,
                "Exit before entry rejected"
            );
            return Err(DomainError::InvalidTimeOrdering);
        }

        let breakdown = calculate_toll(&entry, &req.interchange, &req.at)?;
        entries.delete(&entry.id).await?;

        metrics::counter!("toll_vehicle_exits_total", "interchange" => req.interchange.clone())
            .increment(1);
        metrics::histogram!("toll_charged_amount").record(breakdown.total_charged);
        if breakdown.discount_kind != DiscountKind::None {
            metrics::counter!("toll_discounts_total", "kind" => breakdown.discount_kind.to_string())
                .increment(1);
        }
        info!(
            number_plate = %entry.number_plate,
            from = %entry.entry_interchange,
            to = %req.interchange,
            total_charged = breakdown.total_charged,
            discount = %breakdown.discount_kind,
            "Toll calculated"
        );

        Ok(ExitReceipt {
            number_plate: entry.number_plate,
            entry_interchange: entry.entry_interchange,
            exit_interchange: req.interchange,
            entry_date_time: entry.entry_date_time,
            exit_date_time: req.at,
            breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::{UserRepositoryInterface, VehicleEntryRepository};
    use crate::infrastructure::storage::{InMemoryRepositoryProvider, InMemoryUsers};

    fn service() -> TollService {
        TollService::new(Arc::new(InMemoryRepositoryProvider::new()))
    }

    fn cmd(interchange: Option<&str>, plate: Option<&str>, at: Option<&str>) -> GateCommand {
        GateCommand {
            interchange: interchange.map(String::from),
            number_plate: plate.map(String::from),
            date_time: at.map(String::from),
        }
    }

    #[tokio::test]
    async fn entry_then_exit_charges_and_closes_trip() {
        let svc = service();
        let entry = svc
            .record_entry(
                cmd(Some("NS Interchange"), Some("ABC-123"), Some("2023-10-20T08:00:00Z")),
                None,
            )
            .await
            .unwrap();
        assert_eq!(entry.entry_interchange, "NS Interchange");

        let receipt = svc
            .record_exit(
                cmd(Some("Bahria Interchange"), Some("ABC-123"), Some("2023-10-20T09:00:00Z")),
                None,
            )
            .await
            .unwrap();
        assert_eq!(receipt.breakdown.total_charged, 25.8);
        assert_eq!(receipt.entry_interchange, "NS Interchange");
        assert_eq!(receipt.exit_interchange, "Bahria Interchange");

        // trip is closed: a second exit finds nothing, a new entry is accepted
        let err = svc
            .record_exit(cmd(Some("Bahria Interchange"), Some("ABC-123"), None), None)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NoOpenEntry("ABC-123".into()));
        svc.record_entry(cmd(Some("Zero point"), Some("ABC-123"), None), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn double_entry_is_rejected() {
        let svc = service();
        svc.record_entry(cmd(Some("Zero point"), Some("ABC-123"), None), None)
            .await
            .unwrap();
        let err = svc
            .record_entry(cmd(Some("Ph4 Interchange"), Some("ABC-123"), None), None)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateEntry("ABC-123".into()));
    }

    #[tokio::test]
    async fn home_interchange_is_the_default_station() {
        let svc = service();
        let entry = svc
            .record_entry(cmd(None, Some("ABC-123"), None), Some("Lake City Interchange"))
            .await
            .unwrap();
        assert_eq!(entry.entry_interchange, "Lake City Interchange");

        // explicit station wins over the home station
        let receipt = svc
            .record_exit(
                cmd(Some("Lake City Interchange"), Some("ABC-123"), None),
                Some("Zero point"),
            )
            .await
            .unwrap();
        assert_eq!(receipt.exit_interchange, "Lake City Interchange");
    }

    #[tokio::test]
    async fn validation_order() {
        let svc = service();

        let missing = svc.record_entry(cmd(None, Some("ABC-123"), None), None).await;
        assert_eq!(
            missing,
            Err(DomainError::MissingField(REQUIRED_FIELDS_MESSAGE.into()))
        );
        let empty_plate = svc.record_entry(cmd(Some("Zero point"), Some(""), None), None).await;
        assert!(matches!(empty_plate, Err(DomainError::MissingField(_))));

        // unknown station is reported before a bad plate
        let unknown = svc
            .record_exit(cmd(Some("Nowhere"), Some("bad"), None), None)
            .await;
        assert_eq!(
            unknown.map(|_| ()),
            Err(DomainError::InvalidGateInterchange {
                gate: Gate::Exit,
                interchange: "Nowhere".into()
            })
        );

        let plate = svc
            .record_entry(cmd(Some("Zero point"), Some("abc-123"), None), None)
            .await;
        assert_eq!(plate, Err(DomainError::InvalidNumberPlate("abc-123".into())));

        let time = svc
            .record_entry(cmd(Some("Zero point"), Some("ABC-123"), Some("soon")), None)
            .await;
        assert_eq!(time, Err(DomainError::InvalidTimestamp("soon".into())));
    }

    #[tokio::test]
    async fn exit_before_entry_keeps_trip_open() {
        let svc = service();
        svc.record_entry(
            cmd(Some("Zero point"), Some("ABC-123"), Some("2023-10-23T10:00:00Z")),
            None,
        )
        .await
        .unwrap();

        let err = svc
            .record_exit(
                cmd(Some("Ph4 Interchange"), Some("ABC-123"), Some("2023-10-23T09:59:59Z")),
                None,
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidTimeOrdering);

        // equal timestamps are allowed
        let receipt = svc
            .record_exit(
                cmd(Some("Ph4 Interchange"), Some("ABC-123"), Some("2023-10-23T10:00:00Z")),
                None,
            )
            .await
            .unwrap();
        assert_eq!(receipt.breakdown.sub_total, 22.0);
    }

    /// Another gate inserted the same plate between the lookup and the insert.
    #[derive(Default)]
    struct RacingEntries;

    #[async_trait]
    impl VehicleEntryRepository for RacingEntries {
        async fn find_open_by_plate(&self, _number_plate: &str) -> DomainResult<Option<VehicleEntry>> {
            Ok(None)
        }

        async fn insert(&self, entry: VehicleEntry) -> DomainResult<()> {
            Err(DomainError::DuplicateEntry(entry.number_plate))
        }

        async fn delete(&self, _id: &str) -> DomainResult<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RacingRepos {
        entries: RacingEntries,
        users: InMemoryUsers,
    }

    impl RepositoryProvider for RacingRepos {
        fn vehicle_entries(&self) -> &dyn VehicleEntryRepository {
            &self.entries
        }

        fn users(&self) -> &dyn UserRepositoryInterface {
            &self.users
        }
    }

    #[tokio::test]
    async fn concurrent_entry_loses_to_unique_plate() {
        let svc = TollService::new(Arc::new(RacingRepos::default()));
        let err = svc
            .record_entry(cmd(Some("Zero point"), Some("ABC-123"), None), None)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateEntry("ABC-123".into()));
    }

    #[test]
    fn directory_matches_station_table() {
        let svc = service();
        let names: Vec<_> = svc.interchanges().iter().map(|i| i.name).collect();
        assert_eq!(names.first(), Some(&"Zero point"));
        assert_eq!(names.last(), Some(&"Bahria Interchange"));
    }
}
