use domain::{Vehicle, VehicleLinked};
use std::collections::HashMap;

/// Placeholder shown when a record's vehicle cannot be resolved
pub const MISSING: &str = "-";

/// Vehicle identifier -> vehicle, built once per data refresh
#[derive(Debug, Clone, Default)]
pub struct VehicleIndex {
    by_id: HashMap<String, Vehicle>,
}

impl VehicleIndex {
    /// Later entries win when an identifier repeats
    pub fn build(vehicles: &[Vehicle]) -> Self {
        let mut by_id = HashMap::with_capacity(vehicles.len());
        for vehicle in vehicles {
            by_id.insert(vehicle.id.clone(), vehicle.clone());
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.by_id.get(id)
    }

    /// Resolve a record's foreign key, if it has one
    pub fn resolve<R: VehicleLinked>(&self, record: &R) -> Option<&Vehicle> {
        record.vehicle_id().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Asset code for display, `"-"` when the vehicle or its code is absent
pub fn asset_code_or_missing(vehicle: Option<&Vehicle>) -> String {
    vehicle
        .and_then(|v| v.asset_code.clone())
        .unwrap_or_else(|| MISSING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::FuelTransaction;

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let vehicles = vec![
            Vehicle::new("v1", "FIRST"),
            Vehicle::new("v2", "OTHER"),
            Vehicle::new("v1", "SECOND"),
        ];

        let index = VehicleIndex::build(&vehicles);

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("v1").and_then(|v| v.asset_code.as_deref()),
            Some("SECOND")
        );
    }

    #[test]
    fn test_resolve_absent_vehicle() {
        let index = VehicleIndex::build(&[Vehicle::new("v1", "T-101")]);

        let linked = FuelTransaction {
            id: "f1".to_string(),
            vehicle_id: Some("v1".to_string()),
            ..Default::default()
        };
        let dangling = FuelTransaction {
            id: "f2".to_string(),
            vehicle_id: Some("v9".to_string()),
            ..Default::default()
        };
        let unlinked = FuelTransaction::default();

        assert!(index.resolve(&linked).is_some());
        assert!(index.resolve(&dangling).is_none());
        assert!(index.resolve(&unlinked).is_none());
    }

    #[test]
    fn test_asset_code_fallback() {
        let with_code = Vehicle::new("v1", "T-101");
        let without_code = Vehicle {
            id: "v2".to_string(),
            ..Default::default()
        };

        assert_eq!(asset_code_or_missing(Some(&with_code)), "T-101");
        assert_eq!(asset_code_or_missing(Some(&without_code)), "-");
        assert_eq!(asset_code_or_missing(None), "-");
    }

    #[test]
    fn test_empty_index() {
        let index = VehicleIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.get("v1").is_none());
    }
}
