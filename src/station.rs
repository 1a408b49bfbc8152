//! Data structures representing wireless stations.
//!
//! A [`StationRecord`] holds the counters and gauges reported for one
//! associated station in a station-dump block.

use std::fmt;

/// Per-station attributes parsed from one station-dump block.
///
/// # Example
///
/// A block like:
/// ```text
/// Station 00:11:22:33:44:55 (on wlan0)
///         rx bytes:       123456
///         signal:         -52 dBm
///         tx bitrate:     65.0 MBit/s MCS 7 short GI
/// ```
///
/// Would be parsed into a `StationRecord` with:
/// - `mac`: "00:11:22:33:44:55"
/// - `rx_bytes`: 123456
/// - `signal`: -52
/// - `tx_bitrate`: 65000000
///
/// Every other field keeps its zero default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRecord {
    /// MAC address of the station. Empty if none could be extracted.
    pub mac: String,

    /// Bytes received from the station.
    pub rx_bytes: i64,

    /// Packets received from the station.
    pub rx_packets: i64,

    /// Bytes transmitted to the station.
    pub tx_bytes: i64,

    /// Packets transmitted to the station.
    pub tx_packets: i64,

    /// Transmissions that failed.
    pub tx_failed: i64,

    /// Signal strength in dBm.
    pub signal: i64,

    /// Last transmit bitrate in bits per second.
    pub tx_bitrate: i64,

    /// Last receive bitrate in bits per second.
    pub rx_bitrate: i64,

    /// Time since the station was last active, in whole seconds.
    pub inactive_time: i64,

    /// Time the station has been associated, in whole seconds.
    pub connected_time: i64,
}

impl StationRecord {
    /// Create an empty record for the given MAC address.
    pub fn with_mac(mac: impl Into<String>) -> Self {
        Self {
            mac: mac.into(),
            ..Default::default()
        }
    }

    /// Returns true if a MAC address was extracted for this station.
    #[inline]
    pub fn has_mac(&self) -> bool {
        !self.mac.is_empty()
    }
}

impl fmt::Display for StationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mac = if self.has_mac() { &self.mac } else { "<none>" };
        write!(
            f,
            "{} rx={}B/{}p tx={}B/{}p failed={} signal={} dBm rx_rate={} tx_rate={} inactive={}s connected={}s",
            mac,
            self.rx_bytes,
            self.rx_packets,
            self.tx_bytes,
            self.tx_packets,
            self.tx_failed,
            self.signal,
            self.rx_bitrate,
            self.tx_bitrate,
            self.inactive_time,
            self.connected_time,
        )
    }
}
