use std::collections::{vec_deque, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::clock::{Clock, MonotonicClock};
use crate::error::WindowError;
use crate::ttl::Ttl;

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    inserted_at: Instant,
}

impl<T> Entry<T> {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.inserted_at) > ttl
    }
}

/// An append-only sequence whose elements expire `ttl` after insertion.
///
/// Expired elements are purged lazily: `insert`, `elements`,
/// `elements_since` and `purge_expired` sweep before doing anything else,
/// while `iter`, `len` and `is_empty` look at what is currently retained.
///
/// The window does no locking of its own. Mutation needs `&mut self`; owners
/// sharing a window between threads must wrap it in a `Mutex` themselves.
#[derive(Clone)]
pub struct TemporalWindow<T, C = MonotonicClock> {
    entries: VecDeque<Entry<T>>,
    ttl: Duration,
    clock: C,
}

impl<T> TemporalWindow<T> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(Ttl::from(ttl), MonotonicClock)
    }

    /// Builds a window from a signed duration, rejecting negative values.
    pub fn try_new(ttl: chrono::Duration) -> Result<Self, WindowError> {
        Ok(Self::with_clock(Ttl::try_from(ttl)?, MonotonicClock))
    }
}

impl<T, C: Clock> TemporalWindow<T, C> {
    pub fn with_clock(ttl: Ttl, clock: C) -> Self {
        debug!("Created a temporal window with ttl={}", ttl);
        Self {
            entries: VecDeque::new(),
            ttl: ttl.as_duration(),
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of retained elements, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends `value` stamped with the current clock reading, then sweeps
    /// using that same reading.
    pub fn insert(&mut self, value: T) {
        let now = self.clock.now();
        self.entries.push_back(Entry {
            value,
            inserted_at: now,
        });
        self.sweep(now);
    }

    /// Removes every expired element and returns how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        self.sweep(now)
    }

    /// Retained values in insertion order. Does not sweep.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    // Entries are stamped in insertion order by a monotonic clock, so the
    // expired ones always form a prefix.
    fn sweep(&mut self, now: Instant) -> usize {
        let mut removed = 0;
        while let Some(entry) = self.entries.front() {
            if !entry.is_expired(now, self.ttl) {
                break;
            }
            self.entries.pop_front();
            removed += 1;
        }

        if removed > 0 {
            trace!(
                "Purged {} expired entries, {} remain",
                removed,
                self.entries.len()
            );
        }
        removed
    }
}

impl<T: Clone, C: Clock> TemporalWindow<T, C> {
    /// Sweeps, then returns every live value in insertion order.
    pub fn elements(&mut self) -> Vec<T> {
        self.purge_expired();
        self.entries.iter().map(|e| e.value.clone()).collect()
    }

    /// Sweeps, then returns the live values inserted at or after `threshold`.
    ///
    /// `threshold` must come from the same clock as the window's. A
    /// threshold in the future yields nothing.
    pub fn elements_since(&mut self, threshold: Instant) -> Vec<T> {
        self.purge_expired();
        let start = self
            .entries
            .partition_point(|entry| entry.inserted_at < threshold);
        self.entries
            .range(start..)
            .map(|e| e.value.clone())
            .collect()
    }
}

impl<T, C: Clock> Extend<T> for TemporalWindow<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for TemporalWindow<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalWindow")
            .field("ttl", &self.ttl)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<'a, T, C: Clock> IntoIterator for &'a TemporalWindow<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    inner: vec_deque::Iter<'a, Entry<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| &entry.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
