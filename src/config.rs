//! Application configuration constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Layout calculations like `SCREEN_WIDTH / 17` are computed at compile time as
//! `const`, avoiding per-frame arithmetic. These constants are used throughout
//! the rendering code instead of recalculating positions every frame.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (square smartwatch panel: 240x240).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Dial center coordinate (same for x and y on a square panel).
pub const CENTER: u8 = 120;

// =============================================================================
// Hand Geometry
// =============================================================================

/// Hour hand length in pixels, measured from the dial center.
pub const HOUR_HAND_LEN: usize = 50;

/// Minute hand length in pixels.
pub const MINUTE_HAND_LEN: usize = 90;

/// Second hand length in pixels.
pub const SECOND_HAND_LEN: usize = 100;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Fixed delay after each tick (~50 polls/second). The actual redraw rate is
/// bounded by pixel movement of the second hand, not by this delay.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Interval between network scans while the analyzer page is active.
pub const SCAN_INTERVAL: Duration = Duration::from_secs(5);

// =============================================================================
// Analyzer Graph Layout (pre-computed for the fixed 240x240 panel)
// =============================================================================

/// Height of the colored title banner (ProFont 18pt glyph height, rounded up).
pub const BANNER_HEIGHT: i32 = 24;

/// Y coordinate of the graph base axle. Leaves two 10px text lines below it
/// for the channel numbers and per-channel AP counts.
pub const GRAPH_BASELINE: i32 = (SCREEN_HEIGHT - 20) as i32;

/// Usable bar height between the base axle and the banner/status text area.
pub const GRAPH_HEIGHT: i32 = GRAPH_BASELINE - BANNER_HEIGHT - 30;

/// Horizontal spacing per WiFi channel. 14 channels on a 17-slot grid so the
/// smeared triangle outlines of the edge channels stay on screen.
pub const CHANNEL_WIDTH: i32 = (SCREEN_WIDTH / 17) as i32;

/// Half-width of a triangular signal outline at the baseline.
pub const SIGNAL_WIDTH: i32 = CHANNEL_WIDTH * 2;
