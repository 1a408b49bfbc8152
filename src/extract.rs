//! Station extraction from station-dump lines.
//!
//! A single forward pass groups attribute lines under the most recent
//! `Station` line. One record buffer is open at a time: it is sealed when the
//! next `Station` line arrives, and at end of input it is kept only if it has
//! a MAC address.

use tracing::trace;

use crate::parser::{find_bitrate, find_duration, find_integer, parse_mac};
use crate::station::StationRecord;

/// Substring that marks the start of a new station block.
pub const STATION_MARKER: &str = "Station";

/// A keyed attribute line and the field it updates.
pub struct FieldRule {
    /// Substring identifying the line.
    pub keyword: &'static str,
    /// Extracts the raw value, `None` if no token was found.
    pub parse: fn(&str) -> Option<i64>,
    /// Stores the value on the open record.
    pub set: fn(&mut StationRecord, i64),
}

/// Attribute rules in priority order. The first matching keyword wins.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        keyword: "rx bytes:",
        parse: find_integer,
        set: |s, v| s.rx_bytes = v,
    },
    FieldRule {
        keyword: "rx packets:",
        parse: find_integer,
        set: |s, v| s.rx_packets = v,
    },
    FieldRule {
        keyword: "tx bytes:",
        parse: find_integer,
        set: |s, v| s.tx_bytes = v,
    },
    FieldRule {
        keyword: "tx packets:",
        parse: find_integer,
        set: |s, v| s.tx_packets = v,
    },
    FieldRule {
        keyword: "tx failed:",
        parse: find_integer,
        set: |s, v| s.tx_failed = v,
    },
    FieldRule {
        keyword: "signal:",
        parse: find_integer,
        set: |s, v| s.signal = v,
    },
    FieldRule {
        keyword: "tx bitrate:",
        parse: find_bitrate,
        set: |s, v| s.tx_bitrate = v,
    },
    FieldRule {
        keyword: "rx bitrate:",
        parse: find_bitrate,
        set: |s, v| s.rx_bitrate = v,
    },
    FieldRule {
        keyword: "inactive time:",
        parse: find_duration,
        set: |s, v| s.inactive_time = v,
    },
    FieldRule {
        keyword: "connected time:",
        parse: find_duration,
        set: |s, v| s.connected_time = v,
    },
];

/// Find the rule for an attribute line.
#[inline]
pub fn match_rule(line: &str) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|rule| line.contains(rule.keyword))
}

/// Counters describing one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Lines consumed.
    pub lines: usize,
    /// `Station` lines seen.
    pub boundaries: usize,
    /// Attribute lines that matched a rule.
    pub fields_updated: usize,
    /// Matched attribute lines whose value was missing and set to 0.
    pub fields_defaulted: usize,
    /// Lines that matched neither the marker nor any rule.
    pub unrecognized_lines: usize,
}

/// Accumulates records while lines stream past.
#[derive(Debug, Default)]
struct Extractor {
    /// `None` until the first line has been consumed.
    current: Option<StationRecord>,
    stations: Vec<StationRecord>,
    summary: ExtractSummary,
}

impl Extractor {
    fn push_line(&mut self, line: &str) {
        self.summary.lines += 1;

        if line.contains(STATION_MARKER) {
            self.summary.boundaries += 1;
            if let Some(previous) = self.current.take() {
                self.stations.push(previous);
            }
            self.current = Some(StationRecord::with_mac(parse_mac(line)));
            return;
        }

        let record = self.current.get_or_insert_with(StationRecord::default);
        match match_rule(line) {
            Some(rule) => {
                self.summary.fields_updated += 1;
                let value = (rule.parse)(line).unwrap_or_else(|| {
                    self.summary.fields_defaulted += 1;
                    trace!(
                        "No value for '{}' in: {}",
                        rule.keyword.trim_end_matches(':'),
                        line
                    );
                    0
                });
                (rule.set)(record, value);
            }
            None => {
                self.summary.unrecognized_lines += 1;
                trace!("Ignoring line: {}", line);
            }
        }
    }

    fn finish(mut self) -> (Vec<StationRecord>, ExtractSummary) {
        if let Some(last) = self.current.take().filter(StationRecord::has_mac) {
            self.stations.push(last);
        }
        (self.stations, self.summary)
    }
}

/// Group station-dump lines into station records, in input order.
///
/// # Example
///
/// ```
/// use wifi_station_exporter::extract::extract_stations;
///
/// let lines = [
///     "Station 00:11:22:33:44:55 (on wlan0)",
///     "\trx bytes:\t1000",
///     "\ttx bitrate:\t54.0 MBit/s",
/// ];
/// let stations = extract_stations(&lines);
/// assert_eq!(stations.len(), 1);
/// assert_eq!(stations[0].rx_bytes, 1000);
/// assert_eq!(stations[0].tx_bitrate, 54_000_000);
/// ```
pub fn extract_stations<S: AsRef<str>>(lines: &[S]) -> Vec<StationRecord> {
    extract_stations_with_summary(lines).0
}

/// Like [`extract_stations`], also returning counters for the pass.
pub fn extract_stations_with_summary<S: AsRef<str>>(
    lines: &[S],
) -> (Vec<StationRecord>, ExtractSummary) {
    let mut extractor = Extractor::default();
    for line in lines {
        extractor.push_line(line.as_ref());
    }
    extractor.finish()
}
