//! A time-windowed, append-only collection.
//!
//! [`TemporalWindow`] stamps every inserted value with a monotonic clock
//! reading and hides values older than its time-to-live. Expired values are
//! purged lazily whenever the window is touched, so there are no timer
//! threads or background sweepers.
//!
//! ```
//! use std::time::Duration;
//! use temporal_window::{ManualClock, TemporalWindow, Ttl};
//!
//! let clock = ManualClock::new();
//! let mut window = TemporalWindow::with_clock(Ttl::from(Duration::from_secs(2)), clock.clone());
//!
//! window.insert("a");
//! clock.advance(Duration::from_secs(1));
//! assert_eq!(window.elements(), vec!["a"]);
//!
//! clock.advance(Duration::from_secs(2));
//! assert!(window.elements().is_empty());
//! ```

pub mod clock;
pub mod error;
pub mod ttl;
pub mod window;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::WindowError;
pub use ttl::Ttl;
pub use window::{Iter, TemporalWindow};
