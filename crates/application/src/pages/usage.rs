use super::listing::Listing;
use super::{PageContext, distinct_values, vehicle_link};
use crate::export::{ExportError, ExportFile, UsageCsv, export_csv};
use crate::view::{UsageFilter, UsageTotals, VehicleIndex, asset_code_or_missing, effective_ownership};
use chrono::NaiveDate;
use domain::{DomainError, SortKey, UsageRecord};
use serde::Serialize;
use std::sync::Arc;

pub const EMPTY_MESSAGE: &str = "No usage records found";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageRow {
    pub id: String,
    pub usage_date: Option<NaiveDate>,
    pub asset_code: String,
    pub vehicle_link: Option<String>,
    pub total_hours: Option<f64>,
    pub km_travelled: Option<f64>,
    pub jobs_count: Option<i32>,
    pub project_code: Option<String>,
    /// Snapshot taken with the record, falling back to the vehicle's current value
    pub ownership_type: Option<String>,
    pub is_offline: bool,
    pub source: Option<String>,
}

impl UsageRow {
    fn build(record: &UsageRecord, index: &VehicleIndex) -> Self {
        let vehicle = index.resolve(record);
        Self {
            id: record.id.clone(),
            usage_date: record.usage_date,
            asset_code: asset_code_or_missing(vehicle),
            vehicle_link: vehicle_link(record.vehicle_id.as_deref()),
            total_hours: record.total_hours,
            km_travelled: record.km_travelled,
            jobs_count: record.jobs_count,
            project_code: record.project_code.clone(),
            ownership_type: effective_ownership(record, vehicle).map(str::to_string),
            is_offline: record.is_offline.unwrap_or(false),
            source: record.source.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageView {
    pub rows: Vec<UsageRow>,
    pub totals: UsageTotals,
    pub total_records: usize,
    pub filtered_records: usize,
    /// Options for the ownership selector, over all loaded records
    pub ownership_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

pub struct UsageRecordsPage {
    listing: Listing<UsageRecord, UsageFilter>,
}

impl UsageRecordsPage {
    pub fn new(ctx: Arc<PageContext>) -> Self {
        Self {
            listing: Listing::new(ctx, SortKey::UsageDateDesc),
        }
    }

    pub async fn view(&self, filter: &UsageFilter) -> Result<UsageView, DomainError> {
        let snapshot = self.listing.snapshot(filter).await?;
        let filtered = &snapshot.filtered;

        Ok(UsageView {
            rows: filtered
                .iter()
                .map(|record| UsageRow::build(record, &snapshot.index))
                .collect(),
            totals: UsageTotals::from_records(filtered),
            total_records: snapshot.all.len(),
            filtered_records: filtered.len(),
            ownership_types: distinct_values(
                snapshot
                    .all
                    .iter()
                    .map(|record| effective_ownership(record, snapshot.index.resolve(record))),
            ),
            empty_message: filtered.is_empty().then_some(EMPTY_MESSAGE),
        })
    }

    pub async fn export(
        &self,
        filter: &UsageFilter,
        today: NaiveDate,
    ) -> Result<ExportFile, ExportError> {
        let snapshot = self.listing.snapshot(filter).await?;
        export_csv::<_, UsageCsv>(&snapshot.filtered, &snapshot.index, today)
    }

    pub fn refresh(&self) {
        self.listing.refresh();
    }
}
