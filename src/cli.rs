use clap::Parser;
use temporal_window::Ttl;

use crate::timestamp_mode::TimestampMode;

/// Count events from a line stream over a sliding time window.
///
/// Every non-empty input line is an event. After each event one report line
/// is printed with the number of events seen within the window.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// How long an event stays in the window, e.g. "30s" or "1m 30s"
    #[arg(long, value_name = "DURATION", default_value = "1m")]
    pub ttl: Ttl,

    /// Also count the events seen within this trailing span of the window
    #[arg(long, value_name = "DURATION")]
    pub since: Option<Ttl>,

    /// Read events from this file instead of stdin
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<String>,

    /// Prefix each report with the current time: time, datetime or off
    #[arg(long, value_name = "MODE", default_value = "off")]
    pub timestamp: TimestampMode,

    /// List the live events of the window after each report
    #[arg(long)]
    pub show: bool,

    /// Write log to this file
    #[arg(long, value_name = "FILE")]
    pub log: Option<String>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}
