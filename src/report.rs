use anyhow::{Context, Result};

use crate::record::{format_date, format_timestamp};
use crate::stats::AnalysisResult;
use crate::utils::window_hours_label;

const SEPARATOR_WIDTH: usize = 60;

/// Renders the four-section plain-text report. Entries are printed in the
/// order they are given.
pub fn render_report(result: &AnalysisResult, top: usize, window: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_section_header(&mut lines, "TOTAL CARS".to_string());
    lines.push(result.total_cars.to_string());
    lines.push(String::new());

    push_section_header(&mut lines, "DAILY TOTALS".to_string());
    for daily in &result.daily_totals {
        lines.push(format!("{} {}", format_date(&daily.date), daily.count));
    }
    lines.push(String::new());

    push_section_header(&mut lines, format!("TOP {top} HALF HOURS WITH MOST CARS"));
    for record in &result.top_periods {
        lines.push(format!("{} {}", format_timestamp(&record.timestamp), record.count));
    }
    lines.push(String::new());

    push_section_header(
        &mut lines,
        format!(
            "MINIMUM {} HOUR PERIOD ({window} CONTIGUOUS HALF HOURS)",
            window_hours_label(window)
        ),
    );
    for record in &result.min_period.records {
        lines.push(format!("{} {}", format_timestamp(&record.timestamp), record.count));
    }
    lines.push(String::new());
    lines.push(format!(
        "Total cars in this period: {}",
        result.min_period.total
    ));

    lines.join("\n")
}

fn push_section_header(lines: &mut Vec<String>, title: String) {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    lines.push(separator.clone());
    lines.push(title);
    lines.push(separator);
}

pub fn render_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize analysis result")
}
