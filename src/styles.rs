//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! # Optimization: Static Style Constants
//!
//! `MonoTextStyle` and `TextStyle` construction involves copying font references
//! and building style structs. Defining them as `const` lets the compiler compute
//! the style objects at compile time and store them in the binary's read-only
//! data section.
//!
//! # Dynamic Color Styles
//!
//! The analyzer colors its chart labels per channel, so those styles need runtime
//! colors. [`LABEL_FONT`] is exposed for `MonoTextStyle::new(LABEL_FONT, color)`
//! with minimal overhead - just the color varies, the font reference is shared.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{BLACK, BLUE, GREEN, RED, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Left-aligned text anchored at its top edge. Matches cursor-style text
/// placement where the given point is the glyph's top-left corner.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels). Exposed for creating dynamic-color styles.
/// Usage: `MonoTextStyle::new(LABEL_FONT, channel_color)`
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Width of one [`LABEL_FONT`] glyph, used for label width estimates.
pub const LABEL_CHAR_WIDTH: i32 = 6;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small white text for status lines on the dark background.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small white-on-black text for the corner metrics readout. The opaque
/// background erases the previous readout as the numbers change.
pub const READOUT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyleBuilder::new()
    .font(&FONT_6X10)
    .text_color(WHITE)
    .background_color(BLACK)
    .build();

// =============================================================================
// Analyzer Banner Styles (white on colored segments, ProFont 18pt)
// =============================================================================

/// First banner segment: white on red.
pub const BANNER_STYLE_RED: MonoTextStyle<'static, Rgb565> = MonoTextStyleBuilder::new()
    .font(&PROFONT_18_POINT)
    .text_color(WHITE)
    .background_color(RED)
    .build();

/// Second banner segment: white on green.
pub const BANNER_STYLE_GREEN: MonoTextStyle<'static, Rgb565> = MonoTextStyleBuilder::new()
    .font(&PROFONT_18_POINT)
    .text_color(WHITE)
    .background_color(GREEN)
    .build();

/// Third banner segment: white on blue.
pub const BANNER_STYLE_BLUE: MonoTextStyle<'static, Rgb565> = MonoTextStyleBuilder::new()
    .font(&PROFONT_18_POINT)
    .text_color(WHITE)
    .background_color(BLUE)
    .build();

/// Width of one ProFont 18pt glyph, used to lay out the banner segments.
pub const BANNER_CHAR_WIDTH: i32 = 12;
