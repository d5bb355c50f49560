pub mod directory;
pub mod memory;

pub use directory::DirectoryDelivery;
pub use memory::MemoryDelivery;
