mod entity;
mod payload;
mod repository;

pub use entity::{HireProvider, ProviderStatus};
pub use payload::ProviderPayload;
pub use repository::HireProviderRepository;
