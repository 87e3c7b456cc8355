use chrono::NaiveDate;
use serde::Serialize;

use crate::record::Observation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub count: u64,
}

/// Contiguous run of records with the smallest summed count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimumWindow {
    pub start_index: usize,
    pub records: Vec<Observation>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub total_cars: u64,
    pub daily_totals: Vec<DailyTotal>,
    pub top_periods: Vec<Observation>,
    pub min_period: MinimumWindow,
}
