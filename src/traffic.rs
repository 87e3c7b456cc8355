use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::analyzer::TrafficAnalyzer;
use crate::parser;
use crate::record::{format_timestamp, Observation};
use crate::stats::AnalysisResult;

/// Parses the log at `path` and computes every statistic in the report.
pub fn analyze_traffic_file(path: &Path, top: usize, window: usize) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "traffic_analysis", file_path = ?path, "Starting traffic analysis");

    let records = parser::parse_traffic_file(path)
        .with_context(|| format!("Failed to load traffic data from {}", path.display()))?;

    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        info!(
            action = "load",
            component = "traffic_analysis",
            record_count = records.len(),
            first_timestamp = format_timestamp(&first.timestamp),
            last_timestamp = format_timestamp(&last.timestamp),
            "Loaded traffic records"
        );
    } else {
        warn!(action = "load", component = "traffic_analysis", "Traffic log contains no records");
    }

    let result = analyze_records(&records, top, window)?;

    info!(
        action = "complete",
        component = "traffic_analysis",
        total_cars = result.total_cars,
        days = result.daily_totals.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Traffic analysis completed"
    );
    Ok(result)
}

pub fn analyze_records(records: &[Observation], top: usize, window: usize) -> Result<AnalysisResult> {
    let analyzer = TrafficAnalyzer::new(records);

    let min_period = analyzer
        .min_contiguous_period(window)
        .context("Failed to find minimum period")?;

    Ok(AnalysisResult {
        total_cars: analyzer.total_cars()?,
        daily_totals: analyzer.daily_totals()?,
        top_periods: analyzer.top_periods(top),
        min_period,
    })
}
