//! Prometheus text-format rendering.
//!
//! Formats station records as a fixed set of metric families, one sample
//! per station per family, labelled by MAC address.

use std::fmt;

use crate::station::StationRecord;

/// Prometheus metric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Monotonically increasing total
    Counter,
    /// Instantaneous value
    Gauge,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::Counter => write!(f, "counter"),
            MetricKind::Gauge => write!(f, "gauge"),
        }
    }
}

/// One exported metric family and the station field it reads.
pub struct MetricFamily {
    /// Metric name, written verbatim.
    pub name: &'static str,
    /// Type declared on the `# TYPE` line.
    pub kind: MetricKind,
    /// Reads the sample value from a station.
    pub value: fn(&StationRecord) -> i64,
}

/// Exported families, in output order.
pub const METRIC_FAMILIES: [MetricFamily; 8] = [
    MetricFamily {
        name: "wifi_received_bytes_total",
        kind: MetricKind::Counter,
        value: |s| s.rx_bytes,
    },
    MetricFamily {
        name: "wifi_received_packets_total",
        kind: MetricKind::Counter,
        value: |s| s.rx_packets,
    },
    MetricFamily {
        name: "wifi_received_bitrate",
        kind: MetricKind::Gauge,
        value: |s| s.rx_bitrate,
    },
    MetricFamily {
        name: "wifi_transmitted_bytes_total",
        kind: MetricKind::Counter,
        value: |s| s.tx_bytes,
    },
    MetricFamily {
        name: "wifi_transmitted_packets_total",
        kind: MetricKind::Counter,
        value: |s| s.tx_packets,
    },
    MetricFamily {
        name: "wifi_transmitted_failed_total",
        kind: MetricKind::Counter,
        value: |s| s.tx_failed,
    },
    MetricFamily {
        name: "wifi_transmitted_bitrate",
        kind: MetricKind::Gauge,
        value: |s| s.tx_bitrate,
    },
    MetricFamily {
        name: "wifi_signal",
        kind: MetricKind::Gauge,
        value: |s| s.signal,
    },
];

/// Format station records as Prometheus text format.
///
/// Every family gets its `# TYPE` line even when there are no stations.
/// MAC labels are written verbatim.
pub fn format_prometheus_metrics(stations: &[StationRecord]) -> String {
    let mut output = String::with_capacity(256 + stations.len() * 512);

    for family in &METRIC_FAMILIES {
        output.push_str(&format!("# TYPE {} {}\n", family.name, family.kind));
        for station in stations {
            output.push_str(&format!(
                "{}{{mac=\"{}\"}} {}\n",
                family.name,
                station.mac,
                (family.value)(station)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_station(mac: &str) -> StationRecord {
        StationRecord {
            rx_bytes: 1,
            rx_packets: 2,
            tx_bytes: 3,
            tx_packets: 4,
            tx_failed: 5,
            signal: -6,
            tx_bitrate: 7,
            rx_bitrate: 8,
            inactive_time: 9,
            connected_time: 10,
            ..StationRecord::with_mac(mac)
        }
    }

    #[test]
    fn test_format_prometheus_metrics_empty() {
        let output = format_prometheus_metrics(&[]);

        assert_eq!(
            output,
            "# TYPE wifi_received_bytes_total counter\n\
             # TYPE wifi_received_packets_total counter\n\
             # TYPE wifi_received_bitrate gauge\n\
             # TYPE wifi_transmitted_bytes_total counter\n\
             # TYPE wifi_transmitted_packets_total counter\n\
             # TYPE wifi_transmitted_failed_total counter\n\
             # TYPE wifi_transmitted_bitrate gauge\n\
             # TYPE wifi_signal gauge\n"
        );
    }

    #[test]
    fn test_format_prometheus_metrics_with_data() {
        let output = format_prometheus_metrics(&[sample_station("00:11:22:33:44:55")]);

        assert!(output.contains("wifi_received_bytes_total{mac=\"00:11:22:33:44:55\"} 1\n"));
        assert!(output.contains("wifi_received_packets_total{mac=\"00:11:22:33:44:55\"} 2\n"));
        assert!(output.contains("wifi_received_bitrate{mac=\"00:11:22:33:44:55\"} 8\n"));
        assert!(output.contains("wifi_transmitted_bytes_total{mac=\"00:11:22:33:44:55\"} 3\n"));
        assert!(output.contains("wifi_transmitted_packets_total{mac=\"00:11:22:33:44:55\"} 4\n"));
        assert!(output.contains("wifi_transmitted_failed_total{mac=\"00:11:22:33:44:55\"} 5\n"));
        assert!(output.contains("wifi_transmitted_bitrate{mac=\"00:11:22:33:44:55\"} 7\n"));
        assert!(output.contains("wifi_signal{mac=\"00:11:22:33:44:55\"} -6\n"));
        // Durations are parsed but not exported.
        assert!(!output.contains(" 9\n"));
        assert!(!output.contains(" 10\n"));
    }

    #[test]
    fn test_samples_follow_station_order() {
        let stations = [
            StationRecord::with_mac("bb:bb:bb:bb:bb:bb"),
            StationRecord::with_mac("aa:aa:aa:aa:aa:aa"),
        ];
        let output = format_prometheus_metrics(&stations);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), METRIC_FAMILIES.len() * 3);
        assert_eq!(lines[0], "# TYPE wifi_received_bytes_total counter");
        assert_eq!(lines[1], "wifi_received_bytes_total{mac=\"bb:bb:bb:bb:bb:bb\"} 0");
        assert_eq!(lines[2], "wifi_received_bytes_total{mac=\"aa:aa:aa:aa:aa:aa\"} 0");
        assert_eq!(lines[21], "# TYPE wifi_signal gauge");
    }

    #[test]
    fn test_mac_label_is_not_escaped() {
        let output = format_prometheus_metrics(&[StationRecord::with_mac("a\"b")]);
        assert!(output.contains("wifi_signal{mac=\"a\"b\"} 0\n"));
    }

    #[test]
    fn test_prometheus_format_validity() {
        let stations = [sample_station("00:11:22:33:44:55"), StationRecord::default()];
        let output = format_prometheus_metrics(&stations);

        for line in output.lines() {
            if line.starts_with('#') {
                let parts: Vec<&str> = line.split_whitespace().collect();
                assert_eq!(parts.len(), 4, "Invalid type line: {}", line);
                assert!(parts[3] == "counter" || parts[3] == "gauge");
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(parts.len(), 2, "Invalid metric line: {}", line);
            assert!(parts[1].parse::<i64>().is_ok(), "Invalid value: {}", line);
        }
    }

    #[test]
    fn test_counter_names_end_in_total() {
        for family in &METRIC_FAMILIES {
            assert_eq!(
                family.name.ends_with("_total"),
                family.kind == MetricKind::Counter,
                "{}",
                family.name
            );
        }
    }

    proptest! {
        #[test]
        fn prop_rendering_is_deterministic(
            values in prop::collection::vec((any::<i64>(), any::<i64>(), any::<i64>()), 0..8)
        ) {
            let stations: Vec<StationRecord> = values
                .iter()
                .enumerate()
                .map(|(i, (rx_bytes, tx_bitrate, signal))| StationRecord {
                    rx_bytes: *rx_bytes,
                    tx_bitrate: *tx_bitrate,
                    signal: *signal,
                    ..StationRecord::with_mac(format!("00:00:00:00:00:{:02x}", i))
                })
                .collect();

            let first = format_prometheus_metrics(&stations);
            let second = format_prometheus_metrics(&stations);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(
                first.lines().count(),
                METRIC_FAMILIES.len() * (stations.len() + 1)
            );
        }
    }
}
