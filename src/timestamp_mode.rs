use std::fmt::Display;

use chrono::{DateTime, Utc};
use strum::{EnumIter, EnumString};

/// How the wall-clock time of a report is printed. Display only; expiry never
/// looks at wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TimestampMode {
    Time,
    DateTime,
    Off,
}

impl Default for TimestampMode {
    fn default() -> Self {
        Self::Off
    }
}

impl TimestampMode {
    pub fn format(&self) -> Option<&str> {
        match self {
            TimestampMode::Time => Some("%H:%M:%S"),
            TimestampMode::DateTime => Some("%Y-%m-%d %H:%M:%S"),
            TimestampMode::Off => None,
        }
    }

    pub fn render(&self, at: DateTime<Utc>) -> Option<String> {
        self.format().map(|fmt| at.format(fmt).to_string())
    }
}

impl Display for TimestampMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TimestampMode::Time => "time",
                TimestampMode::DateTime => "datetime",
                TimestampMode::Off => "off",
            }
        )
    }
}
