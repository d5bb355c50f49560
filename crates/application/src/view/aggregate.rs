use domain::{FuelTransaction, PrestartCheck, UsageRecord};
use serde::Serialize;

/// Fuel page summary. Average price is zero when no litres were recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FuelTotals {
    pub total_cost: f64,
    pub total_litres: f64,
    pub average_unit_price: f64,
}

impl FuelTotals {
    pub fn from_records(records: &[FuelTransaction]) -> Self {
        let (total_cost, total_litres) = records.iter().fold((0.0, 0.0), |(cost, litres), r| {
            (
                cost + r.total_cost.unwrap_or(0.0),
                litres + r.litres.unwrap_or(0.0),
            )
        });

        let average_unit_price = if total_litres == 0.0 {
            0.0
        } else {
            total_cost / total_litres
        };

        Self {
            total_cost,
            total_litres,
            average_unit_price,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct UsageTotals {
    pub total_hours: f64,
    pub total_km: f64,
    pub total_jobs: i64,
}

impl UsageTotals {
    pub fn from_records(records: &[UsageRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, r| Self {
            total_hours: acc.total_hours + r.total_hours.unwrap_or(0.0),
            total_km: acc.total_km + r.km_travelled.unwrap_or(0.0),
            total_jobs: acc.total_jobs + i64::from(r.jobs_count.unwrap_or(0)),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PrestartSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub total_defects: i64,
}

impl PrestartSummary {
    pub fn from_records(records: &[PrestartCheck]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Default::default()
        };
        for r in records {
            match r.overall_result {
                Some(result) if result.is_pass() => summary.passed += 1,
                Some(_) => summary.failed += 1,
                None => {}
            }
            summary.total_defects += i64::from(r.defect_count.unwrap_or(0));
        }
        summary
    }
}
