//! Application layer - Page services, export and the provider form

pub mod cache;
pub mod export;
pub mod pages;
pub mod provider;
pub mod view;

pub use cache::EntityCache;
pub use export::{ExportError, ExportFile};
pub use pages::{FuelTransactionsPage, PageContext, PrestartChecksPage, UsageRecordsPage};
pub use provider::{FormError, FormMode, ProviderFields, ProviderForm, ProviderService};
