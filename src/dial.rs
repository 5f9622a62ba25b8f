//! Dial geometry: time to hand angles, and angles to panel coordinates.
//!
//! All positions are expressed in "sixtieths of a turn" measured clockwise
//! from 12 o'clock, so the second hand position is simply the seconds value
//! (plus a millisecond fraction for smooth sweep). The minute and hour
//! positions fold in the faster hands so every hand moves continuously
//! instead of snapping once per minute.
//!
//! Two edge projections are provided: [`DialShape::Round`] places a point on
//! a circle with `cos`/`sin`, [`DialShape::Square`] projects the same angle
//! onto the square panel border with a tangent interpolation per edge. Hands
//! always sweep the round projection; the square projection shapes the clock
//! marks on square panels. Float results truncate toward zero when converted
//! to `u8` panel coordinates.

use embedded_graphics::pixelcolor::Rgb565;

use crate::cache::CachedPoint;
use crate::colors::{MARK_COLOR, SUBMARK_COLOR};
use crate::config::CENTER;

/// One sixtieth of a full turn, in radians.
pub const SIXTIETH_RADIAN: f32 = 0.104_719_76;

/// Quarter turn, in radians. Subtracted so sixtieth 0 points at 12 o'clock.
pub const RIGHT_ANGLE_RADIAN: f32 = 1.570_796_3;

/// Outline of the dial border.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialShape {
    /// Circular dial: marks sit on a ring inside the panel.
    Round,
    /// Square dial: marks hug the panel border.
    Square,
}

/// Continuous hand positions in sixtieths of a turn.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HandPositions {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandPositions {
    /// Fold a wall-clock reading into continuous hand positions.
    ///
    /// The second hand advances with the millisecond fraction, the minute
    /// hand with the seconds, the hour hand with the minutes, so all three
    /// sweep smoothly between ticks.
    pub fn from_time(hour: u8, minute: u8, second: u8, millis: u32) -> Self {
        let second_pos = f32::from(second) + (millis % 1000) as f32 * 0.001;
        let minute_pos = f32::from(minute) + second_pos / 60.0;
        let hour_pos = 5.0 * f32::from(hour) + minute_pos / 12.0;
        Self {
            hour: hour_pos,
            minute: minute_pos,
            second: second_pos,
        }
    }
}

/// Project a dial position onto the panel.
///
/// `sixtieth` may be any float; it is wrapped into `0..60`. `radius` is the
/// distance from the dial center (round) or the half-width of the square
/// border the point is projected onto.
pub fn dial_point(shape: DialShape, sixtieth: f32, radius: f32) -> CachedPoint {
    let i = sixtieth.rem_euclid(60.0);
    let c = f32::from(CENTER);
    match shape {
        DialShape::Round => {
            let a = SIXTIETH_RADIAN * i - RIGHT_ANGLE_RADIAN;
            CachedPoint::new((a.cos() * radius + c) as u8, (a.sin() * radius + c) as u8)
        }
        DialShape::Square => {
            // Four border edges, switched on the sixtieth. The tangent maps
            // the angle to an offset along the edge; the top and left edges
            // carry a one-pixel inset so the border corners meet cleanly.
            if !(8.0..53.0).contains(&i) {
                // Top edge (53..60 and 0..8)
                let t = (SIXTIETH_RADIAN * i).tan();
                CachedPoint::new((c + t * radius) as u8, (c + 1.0 - radius) as u8)
            } else if i < 23.0 {
                // Right edge
                let t = (SIXTIETH_RADIAN * i - RIGHT_ANGLE_RADIAN).tan();
                CachedPoint::new((c + radius) as u8, (c + t * radius) as u8)
            } else if i < 38.0 {
                // Bottom edge
                let t = (SIXTIETH_RADIAN * i).tan();
                CachedPoint::new((c - t * radius) as u8, (c + radius) as u8)
            } else {
                // Left edge
                let t = (SIXTIETH_RADIAN * i - RIGHT_ANGLE_RADIAN).tan();
                CachedPoint::new((c + 1.0 - radius) as u8, (c - t * radius) as u8)
            }
        }
    }
}

/// Endpoints and color of clock mark `i` (0..60).
///
/// Multiples of 15 get the longest marks, multiples of 5 medium ones, the
/// rest short submarks. The radii differ per dial shape so round dials keep
/// their marks on a ring while square dials run them along the border.
pub fn mark_endpoints(shape: DialShape, i: u8) -> (CachedPoint, CachedPoint, Rgb565) {
    let (inner_r, outer_r, color) = if i % 15 == 0 {
        match shape {
            DialShape::Round => (104.0, 120.0, MARK_COLOR),
            DialShape::Square => (102.0, 120.0, MARK_COLOR),
        }
    } else if i % 5 == 0 {
        match shape {
            DialShape::Round => (112.0, 120.0, MARK_COLOR),
            DialShape::Square => (108.0, 120.0, MARK_COLOR),
        }
    } else {
        match shape {
            DialShape::Round => (114.0, 114.0, SUBMARK_COLOR),
            DialShape::Square => (114.0, 120.0, SUBMARK_COLOR),
        }
    };
    let inner = dial_point(shape, f32::from(i), inner_r);
    let outer = dial_point(shape, f32::from(i), outer_r);
    (inner, outer, color)
}
