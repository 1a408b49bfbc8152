//! Field parsers for station-dump attribute lines.
//!
//! This module uses the `nom` parsing library to pull single values out of
//! the free-form lines printed by `iw dev <iface> station dump`. Each parser
//! scans the line for the leftmost position where its token grammar matches,
//! so surrounding labels and trailing annotations are skipped.
//!
//! # Line Format
//!
//! ```text
//! Station 00:11:22:33:44:55 (on wlan0)
//!         inactive time:  304 ms
//!         rx bytes:       123456
//!         signal:         -52 [-54, -55] dBm
//!         tx bitrate:     65.0 MBit/s MCS 7 short GI
//!         connected time: 3482 seconds
//! ```
//!
//! The `find_*` functions return `None` when no token is present. The
//! `parse_*` functions are total and fall back to zero (or an empty MAC).

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_while, take_while_m_n},
    character::complete::{char, digit1, one_of},
    combinator::{opt, recognize},
    multi::count,
};

/// Unit suffix shared by every bitrate, after the optional SI prefixes.
const BITS_PER_SECOND: &str = "Bit/s";

/// Marker that switches a duration from seconds to milliseconds.
const MILLISECONDS: &str = "ms";

/// Check if a character may appear in one MAC address octet.
fn is_mac_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Check if a character is an SI prefix accepted before `Bit/s`.
fn is_rate_prefix(c: char) -> bool {
    matches!(c, 'K' | 'M' | 'G')
}

/// Run `parser` at every character offset of `line` and return the output of
/// the leftmost match.
fn find_first<'a, O, P>(line: &'a str, mut parser: P) -> Option<O>
where
    P: Parser<&'a str, Output = O>,
{
    line.char_indices()
        .find_map(|(offset, _)| parser.parse(&line[offset..]).ok().map(|(_, out)| out))
}

/// Recognize a MAC address: six octets of two characters, colons optional.
fn mac_address(input: &str) -> IResult<&str, &str> {
    recognize(count(
        (take_while_m_n(2, 2, is_mac_char), opt(char(':'))),
        6,
    ))
    .parse(input)
}

/// Recognize an integer with an optional sign (e.g. "123456" or "-52").
fn signed_integer(input: &str) -> IResult<&str, &str> {
    recognize((opt(one_of("+-")), digit1)).parse(input)
}

/// Recognize a decimal number with a fractional part (e.g. "65.0").
fn signed_decimal(input: &str) -> IResult<&str, &str> {
    recognize((opt(one_of("+-")), digit1, char('.'), digit1)).parse(input)
}

/// Recognize a bitrate unit with optional prefixes (e.g. "MBit/s").
fn bitrate_unit(input: &str) -> IResult<&str, &str> {
    recognize((take_while(is_rate_prefix), tag(BITS_PER_SECOND))).parse(input)
}

/// Multiplier for a bitrate unit token.
///
/// Only a token longer than the bare `Bit/s` carries a prefix, and only its
/// first character is significant.
fn unit_multiplier(unit: &str) -> f64 {
    if unit.len() <= BITS_PER_SECOND.len() {
        return 1.0;
    }
    match unit.chars().next() {
        Some('K') => 1_000.0,
        Some('M') => 1_000_000.0,
        Some('G') => 1_000_000_000.0,
        _ => 1.0,
    }
}

/// Find the leftmost MAC-address-shaped token in a line.
pub fn find_mac(line: &str) -> Option<&str> {
    find_first(line, mac_address)
}

/// Extract the MAC address from a `Station` line, or an empty string.
///
/// # Example
///
/// ```
/// use wifi_station_exporter::parser::parse_mac;
///
/// assert_eq!(parse_mac("Station 00:11:22:33:44:55 (on wlan0)"), "00:11:22:33:44:55");
/// assert_eq!(parse_mac("Station (on wlan0)"), "");
/// ```
pub fn parse_mac(line: &str) -> &str {
    find_mac(line).unwrap_or_default()
}

/// Find the first integer token in a line.
///
/// Only the leftmost token is considered: if it does not fit in an `i64` the
/// result is `None` rather than a later token.
pub fn find_integer(line: &str) -> Option<i64> {
    find_first(line, signed_integer).and_then(|token| token.parse().ok())
}

/// Parse the first integer in a line, defaulting to 0.
///
/// ```
/// use wifi_station_exporter::parser::parse_integer;
///
/// assert_eq!(parse_integer("\trx bytes:\t123456"), 123456);
/// assert_eq!(parse_integer("\tsignal:  \t-52 [-54, -55] dBm"), -52);
/// assert_eq!(parse_integer("\trx bytes:\tn/a"), 0);
/// ```
pub fn parse_integer(line: &str) -> i64 {
    find_integer(line).unwrap_or(0)
}

/// Find a bitrate in bits per second.
///
/// The value is the first decimal number in the line, scaled by the prefix
/// of the first `[KMG]*Bit/s` unit and truncated toward zero.
pub fn find_bitrate(line: &str) -> Option<i64> {
    let value: f64 = find_first(line, signed_decimal)?.parse().ok()?;
    let multiplier = find_first(line, bitrate_unit).map_or(1.0, unit_multiplier);
    Some((value * multiplier) as i64)
}

/// Parse a bitrate in bits per second, defaulting to 0.
///
/// ```
/// use wifi_station_exporter::parser::parse_bitrate;
///
/// assert_eq!(parse_bitrate("\ttx bitrate:\t54.0 MBit/s"), 54_000_000);
/// assert_eq!(parse_bitrate("\trx bitrate:\t6.0 Bit/s"), 6);
/// ```
pub fn parse_bitrate(line: &str) -> i64 {
    find_bitrate(line).unwrap_or(0)
}

/// Find a duration in whole seconds.
///
/// A line containing `ms` anywhere is read as milliseconds and truncated.
pub fn find_duration(line: &str) -> Option<i64> {
    let raw = find_integer(line)?;
    if line.contains(MILLISECONDS) {
        Some(raw / 1000)
    } else {
        Some(raw)
    }
}

/// Parse a duration in whole seconds, defaulting to 0.
pub fn parse_duration(line: &str) -> i64 {
    find_duration(line).unwrap_or(0)
}
