//! WiFi Station Exporter CLI - Print Prometheus metrics for `iw` station dumps.
//!
//! ```text
//! iw dev wlan0 station dump | wifi-station-exporter > wifi.prom
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wifi_station_exporter::{convert_lines, input::read_stdin_lines};

/// WiFi Station Exporter - Convert `iw dev <iface> station dump` output on
/// stdin into Prometheus text-format metrics on stdout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "WIFI_EXPORTER_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging. stdout is reserved for metrics.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let lines = read_stdin_lines().context("Failed to read station dump from stdin")?;
    let output = convert_lines(&lines);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write metrics to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_log_level() {
        let args = Args::try_parse_from(["wifi-station-exporter"]).expect("Should parse");
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_args_reject_unknown_flags() {
        assert!(Args::try_parse_from(["wifi-station-exporter", "--listen", ":9100"]).is_err());
    }
}
