use chrono::NaiveDate;
use std::collections::HashMap;

use crate::error::{Result, TrafficError};
use crate::record::Observation;
use crate::stats::{DailyTotal, MinimumWindow};

pub const DEFAULT_TOP_PERIODS: usize = 3;
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Read-only queries over a parsed traffic log.
///
/// Each query works from the records as given; nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct TrafficAnalyzer<'a> {
    records: &'a [Observation],
}

impl<'a> TrafficAnalyzer<'a> {
    pub fn new(records: &'a [Observation]) -> Self {
        Self { records }
    }

    pub fn total_cars(&self) -> Result<u64> {
        sum_counts(self.records)
    }

    /// Per-day sums, ascending by date.
    pub fn daily_totals(&self) -> Result<Vec<DailyTotal>> {
        let mut counts: HashMap<NaiveDate, u64> = HashMap::new();
        for record in self.records {
            let total = counts.entry(record.date()).or_insert(0);
            *total = total
                .checked_add(record.count)
                .ok_or(TrafficError::CountOverflow)?;
        }

        let mut totals: Vec<DailyTotal> = counts
            .into_iter()
            .map(|(date, count)| DailyTotal { date, count })
            .collect();
        totals.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(totals)
    }

    /// The `n` busiest records, highest count first. Equal counts keep the
    /// earlier timestamp first; `n == 0` yields an empty list.
    pub fn top_periods(&self, n: usize) -> Vec<Observation> {
        let mut sorted = self.records.to_vec();
        sorted.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.timestamp.cmp(&b.timestamp))
        });
        sorted.truncate(n);
        sorted
    }

    /// Leftmost run of `window_size` consecutive records (by position, not
    /// by time) with the smallest summed count.
    pub fn min_contiguous_period(&self, window_size: usize) -> Result<MinimumWindow> {
        if window_size == 0 {
            return Err(TrafficError::InvalidWindowSize);
        }
        if window_size > self.records.len() {
            return Err(TrafficError::InsufficientRecords {
                actual: self.records.len(),
                required: window_size,
            });
        }

        let mut best_start = 0;
        let mut best_total = u64::MAX;
        for (start, window) in self.records.windows(window_size).enumerate() {
            let total = sum_counts(window)?;
            // strict: ties keep the earliest start
            if total < best_total {
                best_start = start;
                best_total = total;
            }
        }

        Ok(MinimumWindow {
            start_index: best_start,
            records: self.records[best_start..best_start + window_size].to_vec(),
            total: best_total,
        })
    }
}

fn sum_counts(records: &[Observation]) -> Result<u64> {
    records
        .iter()
        .try_fold(0u64, |acc, r| acc.checked_add(r.count))
        .ok_or(TrafficError::CountOverflow)
}
