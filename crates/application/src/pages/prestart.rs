use super::listing::Listing;
use super::{PageContext, distinct_values, prestart_link, vehicle_link};
use crate::export::{ExportError, ExportFile, PrestartCsv, export_csv};
use crate::view::{PrestartFilter, PrestartSummary, VehicleIndex, asset_code_or_missing};
use chrono::{NaiveDate, NaiveDateTime};
use domain::{CheckResult, DomainError, PrestartCheck, SortKey};
use serde::Serialize;
use std::sync::Arc;

pub const EMPTY_MESSAGE: &str = "No prestart checks found";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrestartRow {
    pub id: String,
    pub link: String,
    pub prestart_datetime: Option<NaiveDateTime>,
    pub asset_code: String,
    pub vehicle_link: Option<String>,
    pub operator_name: Option<String>,
    pub prestart_type: Option<String>,
    pub overall_result: Option<CheckResult>,
    pub defect_count: Option<i32>,
    pub client_name: Option<String>,
    pub project_name: Option<String>,
}

impl PrestartRow {
    fn build(check: &PrestartCheck, index: &VehicleIndex) -> Self {
        Self {
            id: check.id.clone(),
            link: prestart_link(&check.id),
            prestart_datetime: check.prestart_datetime,
            asset_code: asset_code_or_missing(index.resolve(check)),
            vehicle_link: vehicle_link(check.vehicle_id.as_deref()),
            operator_name: check.operator_name.clone(),
            prestart_type: check.prestart_type.clone(),
            overall_result: check.overall_result,
            defect_count: check.defect_count,
            client_name: check.client_name.clone(),
            project_name: check.project_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrestartView {
    pub rows: Vec<PrestartRow>,
    pub summary: PrestartSummary,
    pub total_records: usize,
    pub filtered_records: usize,
    pub prestart_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

pub struct PrestartChecksPage {
    listing: Listing<PrestartCheck, PrestartFilter>,
}

impl PrestartChecksPage {
    pub fn new(ctx: Arc<PageContext>) -> Self {
        Self {
            listing: Listing::new(ctx, SortKey::PrestartDatetimeDesc),
        }
    }

    pub async fn view(&self, filter: &PrestartFilter) -> Result<PrestartView, DomainError> {
        let snapshot = self.listing.snapshot(filter).await?;
        let filtered = &snapshot.filtered;

        Ok(PrestartView {
            rows: filtered
                .iter()
                .map(|check| PrestartRow::build(check, &snapshot.index))
                .collect(),
            summary: PrestartSummary::from_records(filtered),
            total_records: snapshot.all.len(),
            filtered_records: filtered.len(),
            prestart_types: distinct_values(
                snapshot.all.iter().map(|c| c.prestart_type.as_deref()),
            ),
            empty_message: filtered.is_empty().then_some(EMPTY_MESSAGE),
        })
    }

    pub async fn export(
        &self,
        filter: &PrestartFilter,
        today: NaiveDate,
    ) -> Result<ExportFile, ExportError> {
        let snapshot = self.listing.snapshot(filter).await?;
        export_csv::<_, PrestartCsv>(&snapshot.filtered, &snapshot.index, today)
    }

    pub fn refresh(&self) {
        self.listing.refresh();
    }
}
