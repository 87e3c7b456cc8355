use chrono::{NaiveDateTime, Timelike};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::error::{Result, TrafficError};
use crate::record::Observation;

/// Reads a traffic log from disk and parses every record in it.
pub fn parse_traffic_file(path: &Path) -> Result<Vec<Observation>> {
    let start_time = Instant::now();
    info!(action = "start", component = "record_parser", file_path = ?path, "Reading traffic log");

    if !path.exists() {
        return Err(TrafficError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let records = parse_lines(&content)?;

    info!(
        action = "complete",
        component = "record_parser",
        record_count = records.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Parsed traffic log"
    );
    Ok(records)
}

/// Parses `<timestamp> <count>` lines, skipping blank ones.
///
/// Stops at the first bad line; line numbers are 1-based and count blank
/// lines too, so they match what an editor shows.
pub fn parse_lines(content: &str) -> Result<Vec<Observation>> {
    let mut records = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records.push(parse_record(line, line_num + 1)?);
    }

    Ok(records)
}

fn parse_record(line: &str, line_num: usize) -> Result<Observation> {
    let format_error = || TrafficError::Format {
        line: line_num,
        content: line.to_string(),
    };

    let mut tokens = line.split_whitespace();
    let (Some(timestamp), Some(count), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(format_error());
    };

    let timestamp: NaiveDateTime = timestamp.parse().map_err(|_| format_error())?;
    // chrono stores a leap second as nanosecond >= 1e9; the log format has none
    if timestamp.nanosecond() >= 1_000_000_000 {
        return Err(format_error());
    }
    let count: i128 = count.parse().map_err(|_| format_error())?;

    if count < 0 {
        return Err(TrafficError::NegativeCount {
            line: line_num,
            content: line.to_string(),
            count,
        });
    }

    let count = u64::try_from(count).map_err(|_| TrafficError::CountOutOfRange {
        line: line_num,
        content: line.to_string(),
    })?;

    Ok(Observation::new(timestamp, count))
}
