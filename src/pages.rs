//! Page navigation between the watch face and the spectrum analyzer.
//!
//! Press `Y` to toggle between pages. Switching clears the screen and
//! repaints the new page's static content.

/// Available pages in the watch application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Analog watch face with incremental hand redraw.
    #[default]
    WatchFace,

    /// WiFi spectrum analyzer with per-channel congestion chart.
    Analyzer,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::WatchFace => Self::Analyzer,
            Self::Analyzer => Self::WatchFace,
        }
    }
}
