pub mod analyzer;
pub mod args;
pub mod error;
pub mod parser;
pub mod record;
pub mod report;
pub mod stats;
pub mod traffic;
pub mod utils;

pub use analyzer::TrafficAnalyzer;
pub use args::{Args, OutputFormat};
pub use error::{Result, TrafficError};
pub use parser::{parse_lines, parse_traffic_file};
pub use record::Observation;
pub use report::{render_json, render_report};
pub use stats::{AnalysisResult, DailyTotal, MinimumWindow};
pub use traffic::analyze_traffic_file;
