//! WiFi Station Exporter - Convert `iw` station dumps into Prometheus metrics.
//!
//! This crate provides:
//! - nom-based field parsers for station-dump attribute lines
//! - A single-pass extractor that groups lines into per-station records
//! - A Prometheus text-format renderer with a fixed set of metric families
//!
//! # Example
//!
//! ```rust
//! use wifi_station_exporter::{extract_stations, format_prometheus_metrics, split_terminated_lines};
//!
//! let dump = "Station 00:11:22:33:44:55 (on wlan0)\n\trx bytes:\t1000\n";
//! let stations = extract_stations(&split_terminated_lines(dump));
//! let output = format_prometheus_metrics(&stations);
//!
//! assert!(output.contains("wifi_received_bytes_total{mac=\"00:11:22:33:44:55\"} 1000\n"));
//! ```

pub mod extract;
pub mod input;
pub mod metrics;
pub mod parser;
pub mod station;

pub use extract::{ExtractSummary, extract_stations, extract_stations_with_summary};
pub use input::{InputError, read_lines, read_stdin_lines, split_terminated_lines};
pub use metrics::{METRIC_FAMILIES, MetricFamily, MetricKind, format_prometheus_metrics};
pub use parser::{parse_bitrate, parse_duration, parse_integer, parse_mac};
pub use station::StationRecord;

use tracing::{debug, info};

/// Convert raw station-dump text into Prometheus text format.
///
/// This is the library entry point for callers that already hold the dump
/// as a string. Output is a pure function of the input text.
pub fn convert(text: &str) -> String {
    convert_lines(&split_terminated_lines(text))
}

/// Extract stations from station-dump lines and render them as metrics.
///
/// Logs the station count at info level, and the extraction counters and
/// each station at debug level. The `wifi-station-exporter` binary calls this
/// on the lines read from stdin.
pub fn convert_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let (stations, summary) = extract_stations_with_summary(lines);

    info!(
        "Parsed {} stations from {} lines",
        stations.len(),
        summary.lines
    );
    debug!(
        "{} station markers, {} fields updated ({} defaulted), {} lines ignored",
        summary.boundaries,
        summary.fields_updated,
        summary.fields_defaulted,
        summary.unrecognized_lines
    );
    for station in &stations {
        debug!("{}", station);
    }

    format_prometheus_metrics(&stations)
}
