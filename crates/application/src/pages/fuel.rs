use super::listing::Listing;
use super::{PageContext, distinct_values, vehicle_link};
use crate::export::{ExportError, ExportFile, FuelCsv, export_csv};
use crate::view::{FuelFilter, FuelTotals, VehicleIndex, asset_code_or_missing};
use chrono::{NaiveDate, NaiveDateTime};
use domain::{DomainError, FuelTransaction, SortKey};
use serde::Serialize;
use std::sync::Arc;

pub const EMPTY_MESSAGE: &str = "No fuel transactions found";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelRow {
    pub id: String,
    pub transaction_datetime: Option<NaiveDateTime>,
    pub asset_code: String,
    pub rego: Option<String>,
    pub vehicle_link: Option<String>,
    pub litres: Option<f64>,
    pub unit_price: Option<f64>,
    pub total_cost: Option<f64>,
    pub site_location: Option<String>,
    pub fuel_type: Option<String>,
    pub odometer_at_fill: Option<f64>,
}

impl FuelRow {
    fn build(tx: &FuelTransaction, index: &VehicleIndex) -> Self {
        let vehicle = index.resolve(tx);
        Self {
            id: tx.id.clone(),
            transaction_datetime: tx.transaction_datetime,
            asset_code: asset_code_or_missing(vehicle),
            rego: vehicle.and_then(|v| v.rego.clone()),
            vehicle_link: vehicle_link(tx.vehicle_id.as_deref()),
            litres: tx.litres,
            unit_price: tx.unit_price,
            total_cost: tx.total_cost,
            site_location: tx.site_location.clone(),
            fuel_type: tx.fuel_type.clone(),
            odometer_at_fill: tx.odometer_at_fill,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FuelView {
    pub rows: Vec<FuelRow>,
    pub totals: FuelTotals,
    pub total_records: usize,
    pub filtered_records: usize,
    /// Options for the fuel type selector
    pub fuel_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

pub struct FuelTransactionsPage {
    listing: Listing<FuelTransaction, FuelFilter>,
}

impl FuelTransactionsPage {
    pub fn new(ctx: Arc<PageContext>) -> Self {
        Self {
            listing: Listing::new(ctx, SortKey::TransactionDatetimeDesc),
        }
    }

    pub async fn view(&self, filter: &FuelFilter) -> Result<FuelView, DomainError> {
        let snapshot = self.listing.snapshot(filter).await?;
        let filtered = &snapshot.filtered;

        Ok(FuelView {
            rows: filtered
                .iter()
                .map(|tx| FuelRow::build(tx, &snapshot.index))
                .collect(),
            totals: FuelTotals::from_records(filtered),
            total_records: snapshot.all.len(),
            filtered_records: filtered.len(),
            fuel_types: distinct_values(snapshot.all.iter().map(|tx| tx.fuel_type.as_deref())),
            empty_message: filtered.is_empty().then_some(EMPTY_MESSAGE),
        })
    }

    pub async fn export(
        &self,
        filter: &FuelFilter,
        today: NaiveDate,
    ) -> Result<ExportFile, ExportError> {
        let snapshot = self.listing.snapshot(filter).await?;
        export_csv::<_, FuelCsv>(&snapshot.filtered, &snapshot.index, today)
    }

    pub fn refresh(&self) {
        self.listing.refresh();
    }
}
