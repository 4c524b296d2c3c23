use std::str::FromStr;
use std::time::Duration;

use crate::error::WindowError;

/// A validated, non-negative time-to-live.
///
/// `std::time::Duration` is unsigned, so a `Ttl` built from one is always
/// valid. Signed sources (`chrono::Duration`, user supplied strings) go
/// through `TryFrom`/`FromStr` and are rejected when negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ttl(Duration);

impl Ttl {
    pub const ZERO: Ttl = Ttl(Duration::ZERO);

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl From<Duration> for Ttl {
    fn from(duration: Duration) -> Self {
        Ttl(duration)
    }
}

impl From<Ttl> for Duration {
    fn from(ttl: Ttl) -> Self {
        ttl.0
    }
}

impl TryFrom<chrono::Duration> for Ttl {
    type Error = WindowError;

    fn try_from(duration: chrono::Duration) -> Result<Self, Self::Error> {
        duration.to_std().map(Ttl).map_err(|_| {
            WindowError::InvalidConfiguration(format!(
                "ttl must not be negative, got {}",
                duration
            ))
        })
    }
}

impl FromStr for Ttl {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(WindowError::InvalidConfiguration(format!(
                "ttl must not be negative, got {:?}",
                s
            )));
        }

        humantime::parse_duration(s).map(Ttl).map_err(|err| {
            WindowError::InvalidConfiguration(format!("invalid ttl {:?}: {}", s, err))
        })
    }
}

impl std::fmt::Display for Ttl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", humantime::format_duration(self.0))
    }
}
