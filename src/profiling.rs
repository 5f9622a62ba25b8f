//! Render metrics for the corner readout.
//!
//! The incremental redraw only pays off if most ticks are skipped, so the
//! metrics track the tick/redraw split. Toggled onto the screen with the `X`
//! button.

use core::fmt::Write as _;

use heapless::String;

/// Tick, redraw and scan counters, updated by the main loop.
pub struct RenderMetrics {
    /// Total main-loop ticks since startup.
    pub ticks: u64,
    /// Ticks that actually wrote pixels (second hand moved).
    pub redraws: u64,
    /// Network scans performed.
    pub scans: u32,
}

impl RenderMetrics {
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            redraws: 0,
            scans: 0,
        }
    }

    /// Record one main-loop tick.
    #[inline]
    pub const fn record_tick(&mut self, redrawn: bool) {
        self.ticks += 1;
        if redrawn {
            self.redraws += 1;
        }
    }

    /// Record one completed network scan.
    #[inline]
    pub const fn record_scan(&mut self) {
        self.scans += 1;
    }

    /// Ticks that skipped all pixel work.
    #[inline]
    #[allow(dead_code)]
    pub const fn skipped(&self) -> u64 {
        self.ticks - self.redraws
    }

    /// One-line summary for the corner readout.
    pub fn readout(&self) -> String<48> {
        let mut s = String::new();
        let _ = write!(s, "T:{} R:{} S:{}", self.ticks, self.redraws, self.scans);
        s
    }
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}
