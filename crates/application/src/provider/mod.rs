//! Hire provider maintenance: the create/edit form and the service behind it

mod form;
mod service;

pub use form::{FormError, FormMode, ProviderFields, ProviderForm};
pub use service::{EMPTY_MESSAGE, ProviderService, ProviderView};
