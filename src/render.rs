//! Incremental line renderer with batched pixel writes.
//!
//! # Optimization: Diff-Based Hand Redraw
//!
//! Instead of clearing and repainting the whole dial every frame, each hand
//! line is walked with Bresenham in lockstep with the hand's pixel cache.
//! Pixels already on screen are skipped, new pixels are drawn, and stale
//! pixels from the previous frame are erased with the background color. A
//! full second-hand sweep touches ~100 pixels; the diff typically touches a
//! handful.
//!
//! # Optimization: One Flush Per Frame
//!
//! Individual pixel writes accumulate in a [`FrameBatch`] and reach the
//! display as a single [`DrawTarget::draw_iter`] call, so a display driver
//! can keep its bus transaction open across the whole frame instead of
//! re-addressing the panel per pixel.

use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;

use crate::cache::{CachedPoint, PixelCache};
use crate::colors::BACKGROUND;
use crate::config::{HOUR_HAND_LEN, MINUTE_HAND_LEN, SECOND_HAND_LEN};

/// Worst case pixel writes in one frame: every hand draws a full new line
/// and erases a full old one.
pub const FRAME_BATCH_CAPACITY: usize = 2 * (HOUR_HAND_LEN + 1 + MINUTE_HAND_LEN + 1 + SECOND_HAND_LEN + 1);

// =============================================================================
// Frame Batch
// =============================================================================

/// Accumulates pixel writes for one frame, flushed as a single `draw_iter`.
///
/// Capacity is derived from the hand lengths so the batch can never overflow
/// during a hand redraw pass.
pub struct FrameBatch {
    pixels: Vec<Pixel<Rgb565>, FRAME_BATCH_CAPACITY>,
}

impl FrameBatch {
    pub const fn new() -> Self {
        Self { pixels: Vec::new() }
    }

    /// Queue one pixel write.
    #[inline]
    pub fn push(&mut self, p: CachedPoint, color: Rgb565) {
        let _ = self.pixels.push(Pixel(p.into(), color));
    }

    /// Number of queued writes.
    #[inline]
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Issue all queued writes as one `draw_iter` call and clear the batch.
    pub fn flush<D>(&mut self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.draw_iter(self.pixels.iter().copied()).ok();
        self.pixels.clear();
    }
}

impl Default for FrameBatch {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cross-Checked Pixel Writes
// =============================================================================

/// Queue a pixel write unless another hand currently claims that pixel.
///
/// `claims` holds the cache slices of the hands that must not be disturbed.
/// The sentinel entries in those slices are harmless here: no hand pixel can
/// ever be `(0, 0)`.
fn write_checked(
    batch: &mut FrameBatch,
    p: CachedPoint,
    color: Rgb565,
    claims: &[&[CachedPoint]],
) {
    for cache in claims {
        if cache.contains(&p) {
            return;
        }
    }
    batch.push(p, color);
}

// =============================================================================
// Cached Line Draw/Erase
// =============================================================================

/// Redraw one hand line incrementally against its pixel cache.
///
/// Walks the Bresenham line from `start` to `end` one step at a time,
/// comparing step `i` against cache slot `i`:
///
/// - pixel unchanged: skipped, unless cross-checks are in force, in which
///   case it is rewritten through the claim filter. This restores pixels
///   another hand erased while moving off a shared spot last frame.
/// - pixel moved: the new pixel is drawn, the old one erased with the
///   background color (both through the claim filter), and the slot updated.
///
/// Slots past the end of the new line are erased and reset, handling lines
/// that got shorter (steep/shallow transitions change the step count).
///
/// The walk is bounded by both the line length and the cache capacity `N`.
pub fn draw_hand_line<const N: usize>(
    batch: &mut FrameBatch,
    start: CachedPoint,
    end: CachedPoint,
    color: Rgb565,
    cache: &mut PixelCache<N>,
    claims: &[&[CachedPoint]],
) {
    let mut x0 = i16::from(start.x);
    let mut y0 = i16::from(start.y);
    let mut x1 = i16::from(end.x);
    let mut y1 = i16::from(end.y);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        core::mem::swap(&mut x0, &mut y0);
        core::mem::swap(&mut x1, &mut y1);
    }

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let mut err = dx / 2;
    let xstep: i16 = if x0 < x1 { 1 } else { -1 };
    let ystep: i16 = if y0 < y1 { 1 } else { -1 };

    let steps = (dx as usize + 1).min(N);
    for i in 0..steps {
        let p = if steep {
            CachedPoint::new(y0 as u8, x0 as u8)
        } else {
            CachedPoint::new(x0 as u8, y0 as u8)
        };
        let old = cache.get(i);
        if p == old {
            if !claims.is_empty() {
                write_checked(batch, p, color, claims);
            }
        } else {
            write_checked(batch, p, color, claims);
            if !old.is_sentinel() {
                write_checked(batch, old, BACKGROUND, claims);
            }
            cache.set(i, p);
        }

        if err < dy {
            y0 += ystep;
            err += dx;
        }
        err -= dy;
        x0 += xstep;
    }

    // Erase the tail of a line that got shorter
    for i in steps..N {
        let old = cache.get(i);
        if !old.is_sentinel() {
            write_checked(batch, old, BACKGROUND, claims);
            cache.clear(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{RED, WHITE};
    use crate::testing::RecordingDisplay;

    #[test]
    fn test_first_draw_fills_cache_and_screen() {
        let mut display = RecordingDisplay::new();
        let mut batch = FrameBatch::new();
        let mut cache: PixelCache<11> = PixelCache::new();

        draw_hand_line(&mut batch, CachedPoint::new(120, 120), CachedPoint::new(120, 110), RED, &mut cache, &[]);
        batch.flush(&mut display);

        assert_eq!(cache.occupied(), 11, "A 10px vertical line fills 11 cache slots");
        for y in 110..=120 {
            assert_eq!(display.pixel(120, y), Some(RED), "Pixel (120, {y}) must be drawn");
        }
    }

    #[test]
    fn test_unchanged_line_writes_nothing() {
        let mut display = RecordingDisplay::new();
        let mut batch = FrameBatch::new();
        let mut cache: PixelCache<11> = PixelCache::new();
        let start = CachedPoint::new(120, 120);
        let end = CachedPoint::new(130, 115);

        draw_hand_line(&mut batch, start, end, RED, &mut cache, &[]);
        batch.flush(&mut display);
        let writes_after_first = display.write_count();

        // Same line, no cross-checks: every step matches its cache slot
        draw_hand_line(&mut batch, start, end, RED, &mut cache, &[]);
        assert!(batch.is_empty(), "Redrawing an identical line must queue zero writes");
        batch.flush(&mut display);
        assert_eq!(display.write_count(), writes_after_first);
    }

    #[test]
    fn test_moved_line_erases_stale_pixels() {
        let mut display = RecordingDisplay::new();
        let mut batch = FrameBatch::new();
        let mut cache: PixelCache<11> = PixelCache::new();
        let start = CachedPoint::new(120, 120);

        draw_hand_line(&mut batch, start, CachedPoint::new(120, 110), RED, &mut cache, &[]);
        batch.flush(&mut display);

        draw_hand_line(&mut batch, start, CachedPoint::new(110, 120), RED, &mut cache, &[]);
        batch.flush(&mut display);

        // Old vertical pixels are gone except the shared center
        for y in 110..120 {
            assert_eq!(display.pixel(120, y), None, "Stale pixel (120, {y}) must be erased");
        }
        for x in 110..=120 {
            assert_eq!(display.pixel(x, 120), Some(RED), "New pixel ({x}, 120) must be drawn");
        }
    }

    #[test]
    fn test_shorter_line_erases_tail() {
        let mut display = RecordingDisplay::new();
        let mut batch = FrameBatch::new();
        let mut cache: PixelCache<11> = PixelCache::new();
        let start = CachedPoint::new(120, 120);

        draw_hand_line(&mut batch, start, CachedPoint::new(120, 110), RED, &mut cache, &[]);
        batch.flush(&mut display);

        // Same direction, but only half the length
        draw_hand_line(&mut batch, start, CachedPoint::new(120, 115), RED, &mut cache, &[]);
        batch.flush(&mut display);

        assert_eq!(cache.occupied(), 6, "Tail slots must be reset to sentinel");
        for y in 110..115 {
            assert_eq!(display.pixel(120, y), None, "Tail pixel (120, {y}) must be erased");
        }
    }

    #[test]
    fn test_claimed_pixels_survive_erase() {
        let mut display = RecordingDisplay::new();
        let mut batch = FrameBatch::new();
        let mut cache: PixelCache<11> = PixelCache::new();
        let start = CachedPoint::new(120, 120);

        draw_hand_line(&mut batch, start, CachedPoint::new(120, 110), WHITE, &mut cache, &[]);
        batch.flush(&mut display);

        // Another hand claims part of the old line; moving away must not erase it
        let claimed = [CachedPoint::new(120, 118), CachedPoint::new(120, 119)];
        draw_hand_line(&mut batch, start, CachedPoint::new(110, 120), WHITE, &mut cache, &[&claimed]);
        batch.flush(&mut display);

        assert_eq!(display.pixel(120, 118), Some(WHITE), "Claimed pixel must survive the erase pass");
        assert_eq!(display.pixel(120, 119), Some(WHITE), "Claimed pixel must survive the erase pass");
        assert_eq!(display.pixel(120, 115), None, "Unclaimed stale pixels are still erased");
    }

    #[test]
    fn test_walk_bounded_by_cache_capacity() {
        let mut display = RecordingDisplay::new();
        let mut batch = FrameBatch::new();
        let mut cache: PixelCache<4> = PixelCache::new();

        // 10px line against a 4-slot cache: only 4 steps may land
        draw_hand_line(&mut batch, CachedPoint::new(120, 120), CachedPoint::new(120, 110), RED, &mut cache, &[]);
        batch.flush(&mut display);
        assert_eq!(cache.occupied(), 4, "Walk must stop at the cache capacity");
        assert_eq!(display.write_count(), 4);
    }

    #[test]
    fn test_batch_capacity_covers_worst_case() {
        assert_eq!(
            FRAME_BATCH_CAPACITY,
            2 * (51 + 91 + 101),
            "Batch must fit a full draw plus a full erase of all three hands"
        );
    }
}
