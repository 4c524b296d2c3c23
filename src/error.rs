#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The window was configured with a value it cannot honour,
    /// e.g. a negative time-to-live.
    InvalidConfiguration(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            WindowError::InvalidConfiguration(s) => write!(f, "invalid configuration: {}", s),
        }
    }
}

impl std::error::Error for WindowError {}
