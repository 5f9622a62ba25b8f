//! Color constants for the watch face and spectrum analyzer.
//!
//! # Optimization: Using Built-in `RgbColor` Trait Constants
//!
//! The `embedded_graphics` crate provides pre-defined color constants through the
//! `RgbColor` trait. Using these instead of manually constructing `Rgb565::new(r, g, b)`
//! ensures optimal values and improves code clarity.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to many embedded displays (including the ST7789 panels
//! in small smartwatches) and requires no conversion when writing to the display.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Screen background; also used to erase stale pixels.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Primary marks, hour hand, status text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Second hand; channel palette.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Banner segment; channel palette.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31). Minute hand; banner background.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Channel palette.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure cyan (0, 63, 31). Channel palette.
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Pure magenta (31, 0, 31). Channel palette.
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Orange for the channel palette. RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for the 48 minor clock marks. Subtle next to the white major marks.
/// RGB565: (15, 31, 15) - roughly 50% brightness.
pub const DARK_GRAY: Rgb565 = Rgb565::new(15, 31, 15);

// =============================================================================
// Watch Face Palette
// =============================================================================

/// Background color behind the dial and graph.
pub const BACKGROUND: Rgb565 = BLACK;

/// Major clock marks (every 5 minutes).
pub const MARK_COLOR: Rgb565 = WHITE;

/// Minor clock marks (the remaining 48).
pub const SUBMARK_COLOR: Rgb565 = DARK_GRAY;

/// Hour hand color.
pub const HOUR_COLOR: Rgb565 = WHITE;

/// Minute hand color.
pub const MINUTE_COLOR: Rgb565 = BLUE;

/// Second hand color.
pub const SECOND_COLOR: Rgb565 = RED;

// =============================================================================
// Analyzer Channel Palette
// =============================================================================

/// Per-channel chart colors for WiFi channels 1 to 14. The six-color cycle
/// keeps adjacent overlapping channels visually distinct.
pub const CHANNEL_COLORS: [Rgb565; 14] = [
    RED, ORANGE, YELLOW, GREEN, CYAN, MAGENTA, RED, ORANGE, YELLOW, GREEN, CYAN, MAGENTA, RED, ORANGE,
];
