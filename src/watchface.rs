//! Analog watch face frame driver.
//!
//! Owns the dial shape, the three hand pixel caches and the last drawn
//! second-hand endpoint. [`WatchFace::init`] paints the 60 static clock
//! marks once; [`WatchFace::update`] performs the per-tick incremental hand
//! redraw and skips all work when the second hand has not moved by a pixel.
//!
//! # Hand Overlap
//!
//! Hands redraw in fixed order hour, minute, second. Each hand's erase pass
//! is filtered against the caches of the hands drawn after it in a previous
//! frame: the hour hand refuses to erase pixels the second hand claims, the
//! minute hand respects both the hour and second caches, and the second hand
//! (drawn last, on top) checks nothing. A pixel a faster hand steals while
//! crossing is repainted on the next tick by the unchanged-pixel rewrite in
//! the renderer, so overlap artifacts last at most one tick. This keeps the
//! hot path a pure diff without any z-buffer.

use embedded_graphics::Drawable;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::{Line, Primitive, PrimitiveStyle};

use crate::cache::{CachedPoint, PixelCache};
use crate::colors::{HOUR_COLOR, MINUTE_COLOR, SECOND_COLOR};
use crate::config::{CENTER, HOUR_HAND_LEN, MINUTE_HAND_LEN, SECOND_HAND_LEN};
use crate::dial::{DialShape, HandPositions, dial_point, mark_endpoints};
use crate::render::{FrameBatch, draw_hand_line};

/// Analog watch face with incremental hand redraw.
pub struct WatchFace {
    shape: DialShape,
    /// Second-hand endpoint of the last redrawn frame, sentinel before the
    /// first frame and after a reset.
    prev_second_tip: CachedPoint,
    hour_cache: PixelCache<{ HOUR_HAND_LEN + 1 }>,
    minute_cache: PixelCache<{ MINUTE_HAND_LEN + 1 }>,
    second_cache: PixelCache<{ SECOND_HAND_LEN + 1 }>,
}

impl WatchFace {
    pub const fn new(shape: DialShape) -> Self {
        Self {
            shape,
            prev_second_tip: CachedPoint::SENTINEL,
            hour_cache: PixelCache::new(),
            minute_cache: PixelCache::new(),
            second_cache: PixelCache::new(),
        }
    }

    /// Draw the 60 static clock marks. Call once after clearing the screen.
    pub fn init<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        for i in 0..60 {
            let (inner, outer, color) = mark_endpoints(self.shape, i);
            Line::new(Point::from(outer), Point::from(inner))
                .into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(display)
                .ok();
        }
    }

    /// Advance the face to the given wall-clock reading.
    ///
    /// Returns `true` when a redraw happened. When the second-hand endpoint
    /// pixel is unchanged since the last redraw the whole tick is skipped:
    /// no minute/hour recompute, no pixel writes.
    pub fn update<D>(&mut self, display: &mut D, hour: u8, minute: u8, second: u8, millis: u32) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let pos = HandPositions::from_time(hour, minute, second, millis);
        let second_tip = dial_point(DialShape::Round, pos.second, SECOND_HAND_LEN as f32);
        if second_tip == self.prev_second_tip {
            return false;
        }

        let minute_tip = dial_point(DialShape::Round, pos.minute, MINUTE_HAND_LEN as f32);
        let hour_tip = dial_point(DialShape::Round, pos.hour, HOUR_HAND_LEN as f32);
        let center = CachedPoint::new(CENTER, CENTER);

        let mut batch = FrameBatch::new();
        let Self {
            hour_cache,
            minute_cache,
            second_cache,
            ..
        } = self;

        draw_hand_line(&mut batch, center, hour_tip, HOUR_COLOR, hour_cache, &[second_cache.as_slice()]);
        draw_hand_line(
            &mut batch,
            center,
            minute_tip,
            MINUTE_COLOR,
            minute_cache,
            &[hour_cache.as_slice(), second_cache.as_slice()],
        );
        draw_hand_line(&mut batch, center, second_tip, SECOND_COLOR, second_cache, &[]);
        batch.flush(display);

        self.prev_second_tip = second_tip;
        true
    }

    /// Forget all drawn pixels so the face can be re-initialized after the
    /// screen was cleared (page switch).
    pub fn reset(&mut self) {
        self.hour_cache.clear_all();
        self.minute_cache.clear_all();
        self.second_cache.clear_all();
        self.prev_second_tip = CachedPoint::SENTINEL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BACKGROUND, SECOND_COLOR};
    use crate::testing::RecordingDisplay;

    fn lit_cache_points<const N: usize>(cache: &PixelCache<N>) -> std::vec::Vec<CachedPoint> {
        cache.as_slice().iter().copied().filter(|p| !p.is_sentinel()).collect()
    }

    #[test]
    fn test_first_update_draws_all_hands() {
        let mut display = RecordingDisplay::new();
        let mut face = WatchFace::new(DialShape::Square);

        assert!(face.update(&mut display, 10, 10, 30, 0), "First tick must redraw");
        assert!(display.write_count() > 0);
        assert_eq!(
            face.second_cache.occupied(),
            SECOND_HAND_LEN + 1,
            "Second hand must fill its whole cache on the first draw"
        );
    }

    #[test]
    fn test_unchanged_second_pixel_skips_redraw() {
        let mut display = RecordingDisplay::new();
        let mut face = WatchFace::new(DialShape::Square);

        face.update(&mut display, 10, 10, 30, 0);
        let writes = display.write_count();

        // A few milliseconds later the endpoint pixel is identical
        assert!(!face.update(&mut display, 10, 10, 30, 1), "Sub-pixel movement must be skipped");
        assert_eq!(display.write_count(), writes, "A skipped tick must write zero pixels");
    }

    #[test]
    fn test_cache_matches_screen_after_tick_sequence() {
        let mut display = RecordingDisplay::new();
        let mut face = WatchFace::new(DialShape::Square);

        // Hands well separated: hour ~10h, minute ~10m, second sweeping 30..=32
        for s in 30..=32 {
            face.update(&mut display, 10, 10, s, 0);
        }

        // Every cached pixel must be lit in some hand color (overlap pixels may
        // carry another hand's color, but never the background).
        let all_cached = lit_cache_points(&face.hour_cache)
            .into_iter()
            .chain(lit_cache_points(&face.minute_cache))
            .chain(lit_cache_points(&face.second_cache));
        for p in all_cached {
            let color = display.pixel(i32::from(p.x), i32::from(p.y));
            assert!(color.is_some(), "Cached pixel ({}, {}) must not be background", p.x, p.y);
            assert_ne!(color, Some(BACKGROUND));
        }

        // Every second-colored pixel on screen belongs to the second cache
        let second_cache = lit_cache_points(&face.second_cache);
        for (x, y) in display.pixels_of(SECOND_COLOR) {
            let p = CachedPoint::new(x as u8, y as u8);
            assert!(
                second_cache.contains(&p),
                "Red pixel ({x}, {y}) on screen is not claimed by the second hand"
            );
        }
    }

    #[test]
    fn test_overlap_pixel_survives_until_both_release() {
        let mut display = RecordingDisplay::new();
        let mut face = WatchFace::new(DialShape::Square);

        // Hour at 12 and minute near 12: the two hands share the vertical
        // pixel column above the center for the hour hand's full length.
        face.update(&mut display, 0, 0, 20, 0);
        let shared: std::vec::Vec<CachedPoint> = lit_cache_points(&face.hour_cache)
            .into_iter()
            .filter(|p| lit_cache_points(&face.minute_cache).contains(p))
            .collect();
        assert!(!shared.is_empty(), "Hour and minute hands at 12 must share pixels");

        // Minute hand moves one step; shared pixels stay claimed by the hour hand
        let old_minute = lit_cache_points(&face.minute_cache);
        face.update(&mut display, 0, 1, 21, 0);
        for p in &shared {
            assert!(
                display.pixel(i32::from(p.x), i32::from(p.y)).is_some(),
                "Shared pixel ({}, {}) must survive while the hour hand claims it",
                p.x,
                p.y
            );
        }

        // Pixels only the minute hand held are erased once it moves off them
        let hour_now = lit_cache_points(&face.hour_cache);
        let minute_now = lit_cache_points(&face.minute_cache);
        let second_now = lit_cache_points(&face.second_cache);
        for p in old_minute {
            let still_claimed = hour_now.contains(&p) || minute_now.contains(&p) || second_now.contains(&p);
            if !still_claimed {
                assert_eq!(
                    display.pixel(i32::from(p.x), i32::from(p.y)),
                    None,
                    "Released pixel ({}, {}) must be erased",
                    p.x,
                    p.y
                );
            }
        }
    }

    #[test]
    fn test_reset_forgets_previous_frame() {
        let mut display = RecordingDisplay::new();
        let mut face = WatchFace::new(DialShape::Square);

        face.update(&mut display, 10, 10, 30, 0);
        face.reset();
        assert_eq!(face.second_cache.occupied(), 0, "Reset must clear the caches");

        // The exact same time must redraw after a reset
        assert!(face.update(&mut display, 10, 10, 30, 0), "Reset must force the next tick to redraw");
    }

    #[test]
    fn test_init_draws_marks() {
        let mut display = RecordingDisplay::new();
        let face = WatchFace::new(DialShape::Square);
        face.init(&mut display);
        assert!(display.write_count() > 60, "60 marks must paint more than one pixel each");
    }
}
