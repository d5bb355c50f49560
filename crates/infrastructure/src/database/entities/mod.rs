pub mod fuel_transactions;
pub mod hire_providers;
pub mod prestart_checks;
pub mod usage_records;
pub mod vehicles;
