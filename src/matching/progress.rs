//! Progress reporting for long scans.
//!
//! The matching code never prints directly; it notifies a [`Progress`]
//! observer at a fixed cadence driven by a [`ProgressTicker`].

use tracing::info;

/// Source report lines between progress notifications
pub const SOURCE_PROGRESS_INTERVAL: usize = 5_000;

/// Reference lines between progress notifications
pub const REFERENCE_PROGRESS_INTERVAL: usize = 50_000;

/// Observer for scan progress
pub trait Progress {
    /// A query was found at `line` of report `source`
    fn scanning_source(&mut self, _source: &str, _line: usize) {}

    /// The reference scan for one query reached `line` of `target`
    fn scanning_reference(&mut self, _target: &str, _line: usize) {}
}

/// Discards all notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Reports progress through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn scanning_source(&mut self, source: &str, line: usize) {
        info!("\tSearching {source}, line: {line}");
    }

    fn scanning_reference(&mut self, target: &str, line: usize) {
        info!("\t\tSearching {target}, line: {line}");
    }
}

/// Decides when a position has advanced far enough to report again
#[derive(Debug, Clone)]
pub struct ProgressTicker {
    interval: usize,
    last: usize,
}

impl ProgressTicker {
    pub fn new(interval: usize) -> Self {
        Self { interval, last: 0 }
    }

    /// Returns true once every `interval` positions
    pub fn tick(&mut self, position: usize) -> bool {
        if self.interval == 0 || position < self.last + self.interval {
            return false;
        }
        self.last = position - position % self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_cadence() {
        let mut ticker = ProgressTicker::new(5_000);
        assert!(!ticker.tick(10));
        assert!(!ticker.tick(4_999));
        assert!(ticker.tick(5_003));
        assert!(!ticker.tick(9_999));
        assert!(ticker.tick(10_000));
        assert!(ticker.tick(27_000));
        assert!(!ticker.tick(29_999));
    }

    #[test]
    fn test_zero_interval_never_ticks() {
        let mut ticker = ProgressTicker::new(0);
        assert!(!ticker.tick(1_000_000));
    }
}
