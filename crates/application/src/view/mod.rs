//! Derived views: pure functions of (records, lookup index, filter)

pub mod aggregate;
pub mod filter;
pub mod lookup;
pub mod memo;

pub use aggregate::{FuelTotals, PrestartSummary, UsageTotals};
pub use filter::{
    FuelFilter, PrestartFilter, ProviderFilter, RecordFilter, UsageFilter, effective_ownership,
    filter_records,
};
pub use lookup::{MISSING, VehicleIndex, asset_code_or_missing};
pub use memo::{ByIdentity, Memo};
