use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::analyzer::{DEFAULT_TOP_PERIODS, DEFAULT_WINDOW_SIZE};

#[derive(Parser, Debug)]
#[command(
    name = "traffic-counter",
    about = "Analyze traffic counter data from a file",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the input file with traffic data
    pub input_file: PathBuf,

    /// Number of busiest half hours to display
    #[arg(short, long, default_value_t = DEFAULT_TOP_PERIODS)]
    pub top: usize,

    /// Number of contiguous records in the minimum period
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_report_sizes() {
        let args = Args::try_parse_from(["traffic-counter", "data.txt"]).unwrap();
        assert_eq!(args.input_file, PathBuf::from("data.txt"));
        assert_eq!(args.top, 3);
        assert_eq!(args.window, 3);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.verbose);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "traffic-counter",
            "-t",
            "5",
            "--window",
            "4",
            "--format",
            "json",
            "-v",
            "data.txt",
        ])
        .unwrap();
        assert_eq!(args.top, 5);
        assert_eq!(args.window, 4);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.verbose);
    }

    #[test]
    fn input_file_is_required() {
        assert!(Args::try_parse_from(["traffic-counter"]).is_err());
    }
}
