//! Filter predicates for the listing pages.
//!
//! Every filter is a plain value: a free-text `search` plus categorical
//! [`Selection`]s. A record passes when every clause passes.

use super::lookup::VehicleIndex;
use domain::{
    CheckResult, FuelTransaction, HireProvider, PrestartCheck, ProviderStatus, Selection,
    UsageRecord, Vehicle, VehicleLinked,
};
use serde::{Deserialize, Serialize};

/// Case-insensitive substring test over a page's searchable fields.
///
/// Empty search passes; absent fields never match.
pub fn search_matches(search: &str, fields: &[Option<&str>]) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// State clause: `All` passes, otherwise the resolved vehicle must match
fn state_matches(state: &Selection<String>, vehicle: Option<&Vehicle>) -> bool {
    state.matches_str(vehicle.and_then(|v| v.state.as_deref()))
}

fn vehicle_asset_code(vehicle: Option<&Vehicle>) -> Option<&str> {
    vehicle.and_then(|v| v.asset_code.as_deref())
}

fn vehicle_rego(vehicle: Option<&Vehicle>) -> Option<&str> {
    vehicle.and_then(|v| v.rego.as_deref())
}

/// Inclusion decision for a record paired with its resolved vehicle
pub trait RecordFilter<R> {
    fn accepts(&self, record: &R, vehicle: Option<&Vehicle>) -> bool;
}

/// Keep the records that pass `filter`, preserving their order
pub fn filter_records<R, F>(records: &[R], index: &VehicleIndex, filter: &F) -> Vec<R>
where
    R: VehicleLinked + Clone,
    F: RecordFilter<R>,
{
    records
        .iter()
        .filter(|record| filter.accepts(record, index.resolve(*record)))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelFilter {
    pub search: String,
    pub state: Selection<String>,
    pub fuel_type: Selection<String>,
}

impl RecordFilter<FuelTransaction> for FuelFilter {
    fn accepts(&self, record: &FuelTransaction, vehicle: Option<&Vehicle>) -> bool {
        search_matches(
            &self.search,
            &[
                vehicle_asset_code(vehicle),
                vehicle_rego(vehicle),
                record.site_location.as_deref(),
            ],
        ) && state_matches(&self.state, vehicle)
            && self.fuel_type.matches_str(record.fuel_type.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PrestartFilter {
    pub search: String,
    pub state: Selection<String>,
    pub overall_result: Selection<CheckResult>,
    pub prestart_type: Selection<String>,
}

impl RecordFilter<PrestartCheck> for PrestartFilter {
    fn accepts(&self, record: &PrestartCheck, vehicle: Option<&Vehicle>) -> bool {
        search_matches(
            &self.search,
            &[
                vehicle_asset_code(vehicle),
                vehicle_rego(vehicle),
                record.operator_name.as_deref(),
                record.client_name.as_deref(),
                record.project_name.as_deref(),
            ],
        ) && state_matches(&self.state, vehicle)
            && self.overall_result.matches(record.overall_result.as_ref())
            && self.prestart_type.matches_str(record.prestart_type.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageFilter {
    pub search: String,
    pub state: Selection<String>,
    pub ownership_type: Selection<String>,
}

/// The record's own snapshot when present, else the vehicle's current value
pub fn effective_ownership<'a>(
    record: &'a UsageRecord,
    vehicle: Option<&'a Vehicle>,
) -> Option<&'a str> {
    record
        .ownership_type_snapshot
        .as_deref()
        .or_else(|| vehicle.and_then(|v| v.ownership_type.as_deref()))
}

impl RecordFilter<UsageRecord> for UsageFilter {
    fn accepts(&self, record: &UsageRecord, vehicle: Option<&Vehicle>) -> bool {
        search_matches(
            &self.search,
            &[
                vehicle_asset_code(vehicle),
                vehicle_rego(vehicle),
                record.project_code.as_deref(),
            ],
        ) && state_matches(&self.state, vehicle)
            && self
                .ownership_type
                .matches_str(effective_ownership(record, vehicle))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderFilter {
    pub search: String,
    pub status: Selection<ProviderStatus>,
}

impl ProviderFilter {
    pub fn accepts(&self, provider: &HireProvider) -> bool {
        search_matches(
            &self.search,
            &[
                Some(provider.name.as_str()),
                provider.contact_name.as_deref(),
                provider.contact_email.as_deref(),
            ],
        ) && self.status.matches(provider.status.as_ref())
    }

    pub fn apply(&self, providers: &[HireProvider]) -> Vec<HireProvider> {
        providers
            .iter()
            .filter(|p| self.accepts(p))
            .cloned()
            .collect()
    }
}
