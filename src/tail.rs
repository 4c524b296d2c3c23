use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use log::{debug, info};
use temporal_window::{Clock, MonotonicClock, TemporalWindow, Ttl};

use crate::timestamp_mode::TimestampMode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub ttl: Ttl,
    pub since: Option<Ttl>,
    pub timestamp: TimestampMode,
    pub show: bool,
}

/// What the window looked like right after an event was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub event: String,
    pub in_window: usize,
    pub in_span: Option<usize>,
    pub live: Option<Vec<String>>,
}

impl Report {
    pub fn render(&self, timestamp: Option<String>) -> String {
        let mut out = String::new();
        if let Some(ts) = timestamp {
            out.push_str(&ts);
            out.push(' ');
        }
        out.push_str(&format!("window={}", self.in_window));
        if let Some(n) = self.in_span {
            out.push_str(&format!(" since={}", n));
        }
        out.push(' ');
        out.push_str(&self.event);

        if let Some(live) = &self.live {
            for event in live {
                out.push_str("\n  ");
                out.push_str(event);
            }
        }
        out
    }
}

/// Sliding-window event counter over a line stream.
pub struct Tail<C: Clock = MonotonicClock> {
    window: TemporalWindow<String, C>,
    span: Option<Duration>,
    timestamp: TimestampMode,
    show: bool,
}

impl Tail {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        Self::with_clock(settings, MonotonicClock)
    }
}

impl<C: Clock> Tail<C> {
    pub fn with_clock(settings: Settings, clock: C) -> anyhow::Result<Self> {
        if let Some(since) = settings.since {
            if since > settings.ttl {
                anyhow::bail!(
                    "--since ({}) must not be longer than --ttl ({})",
                    since,
                    settings.ttl
                );
            }
        }

        Ok(Self {
            window: TemporalWindow::with_clock(settings.ttl, clock),
            span: settings.since.map(|s| s.as_duration()),
            timestamp: settings.timestamp,
            show: settings.show,
        })
    }

    pub fn record(&mut self, event: String) -> Report {
        self.window.insert(event.clone());
        let live = self.window.elements();

        let in_span = self.span.map(|span| {
            match self.window.clock().now().checked_sub(span) {
                Some(threshold) => self.window.elements_since(threshold).len(),
                // Span reaches back past the clock's origin
                None => live.len(),
            }
        });

        Report {
            event,
            in_window: live.len(),
            in_span,
            live: self.show.then_some(live),
        }
    }

    /// Records every non-empty line of `input` and writes one report per
    /// event to `output`. Returns the number of events recorded.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> anyhow::Result<usize> {
        info!(
            "Counting events over a {} window",
            humantime::format_duration(self.window.ttl())
        );

        let mut recorded = 0;
        for line in input.lines() {
            let line = line.context("Failed to read event")?;
            let event = line.trim_end();
            if event.is_empty() {
                continue;
            }

            let report = self.record(event.to_string());
            debug!("Recorded event #{}: {:?}", recorded + 1, report);
            writeln!(output, "{}", report.render(self.timestamp.render(Utc::now())))
                .context("Failed to write report")?;
            output.flush().context("Failed to flush report")?;
            recorded += 1;
        }

        info!("Input exhausted after {} events", recorded);
        Ok(recorded)
    }
}
