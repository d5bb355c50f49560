//! Flat CSV serialisation of the filtered listings.
//!
//! Cells are written unescaped: a comma or quote inside a value lands in the
//! output verbatim.

use crate::view::VehicleIndex;
use crate::view::lookup::asset_code_or_missing;
use chrono::{NaiveDate, NaiveDateTime};
use domain::{
    DomainError, FileDelivery, FuelTransaction, PrestartCheck, UsageRecord, Vehicle, VehicleLinked,
};
use thiserror::Error;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV flush failed: {0}")]
    Flush(String),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A rendered export, ready to hand to a [`FileDelivery`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

impl ExportFile {
    pub async fn deliver(&self, delivery: &dyn FileDelivery) -> Result<(), ExportError> {
        delivery
            .deliver(&self.file_name, self.content.as_bytes())
            .await?;
        Ok(())
    }
}

/// Fixed column set and cell formatting for one page's export
pub trait CsvLayout<R> {
    /// Used as the file name prefix
    const TOPIC: &'static str;
    const HEADER: &'static [&'static str];

    fn row(record: &R, vehicle: Option<&Vehicle>) -> Vec<String>;
}

pub struct FuelCsv;
pub struct PrestartCsv;
pub struct UsageCsv;

fn datetime_cell(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(DATETIME_FORMAT).to_string())
        .unwrap_or_default()
}

fn date_cell(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn number_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn text_cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl CsvLayout<FuelTransaction> for FuelCsv {
    const TOPIC: &'static str = "fuel";
    const HEADER: &'static [&'static str] = &[
        "Date/Time",
        "Asset Code",
        "Litres",
        "Unit Price",
        "Total Cost",
        "Location",
        "Fuel Type",
        "Odometer",
    ];

    fn row(r: &FuelTransaction, vehicle: Option<&Vehicle>) -> Vec<String> {
        vec![
            datetime_cell(r.transaction_datetime),
            asset_code_or_missing(vehicle),
            number_cell(r.litres),
            number_cell(r.unit_price),
            number_cell(r.total_cost),
            text_cell(&r.site_location),
            text_cell(&r.fuel_type),
            number_cell(r.odometer_at_fill),
        ]
    }
}

impl CsvLayout<PrestartCheck> for PrestartCsv {
    const TOPIC: &'static str = "prestarts";
    const HEADER: &'static [&'static str] = &[
        "Date",
        "Asset Code",
        "Operator",
        "Type",
        "Result",
        "Defects",
        "Client",
        "Project",
    ];

    fn row(r: &PrestartCheck, vehicle: Option<&Vehicle>) -> Vec<String> {
        vec![
            datetime_cell(r.prestart_datetime),
            asset_code_or_missing(vehicle),
            text_cell(&r.operator_name),
            text_cell(&r.prestart_type),
            r.overall_result
                .map(|res| res.as_str().to_string())
                .unwrap_or_default(),
            number_cell(r.defect_count),
            text_cell(&r.client_name),
            text_cell(&r.project_name),
        ]
    }
}

impl CsvLayout<UsageRecord> for UsageCsv {
    const TOPIC: &'static str = "usage";
    const HEADER: &'static [&'static str] = &[
        "Date", "Asset Code", "Hours", "Km", "Jobs", "Project", "Offline", "Source",
    ];

    fn row(r: &UsageRecord, vehicle: Option<&Vehicle>) -> Vec<String> {
        let offline = if r.is_offline.unwrap_or(false) {
            "Yes"
        } else {
            "No"
        };
        vec![
            date_cell(r.usage_date),
            asset_code_or_missing(vehicle),
            number_cell(r.total_hours),
            number_cell(r.km_travelled),
            number_cell(r.jobs_count),
            text_cell(&r.project_code),
            offline.to_string(),
            text_cell(&r.source),
        ]
    }
}

/// `<topic>-<YYYY-MM-DD>.csv`
pub fn export_file_name(topic: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", topic, date.format(DATE_FORMAT))
}

/// Header line followed by one line per record, in the given order
pub fn render_csv<R, L>(records: &[R], index: &VehicleIndex) -> Result<String, ExportError>
where
    R: VehicleLinked,
    L: CsvLayout<R>,
{
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);

    wtr.write_record(L::HEADER)?;
    for record in records {
        wtr.write_record(L::row(record, index.resolve(record)))?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(data)?)
}

pub fn export_csv<R, L>(
    records: &[R],
    index: &VehicleIndex,
    today: NaiveDate,
) -> Result<ExportFile, ExportError>
where
    R: VehicleLinked,
    L: CsvLayout<R>,
{
    Ok(ExportFile {
        file_name: export_file_name(L::TOPIC, today),
        content: render_csv::<R, L>(records, index)?,
    })
}
