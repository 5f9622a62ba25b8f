//! Per-hand dirty-pixel caches for incremental redraw.
//!
//! Each clock hand remembers exactly which pixels it drew last frame in a
//! fixed-capacity buffer, one slot per Bresenham step. On the next frame the
//! renderer walks the new line in lockstep with the cache, touching only the
//! pixels that differ. The origin `(0, 0)` is reserved as the "slot unused"
//! sentinel; the dial geometry keeps every real hand pixel away from the
//! origin, so the sentinel can never collide with drawn content.

/// A screen position remembered by a hand, in `u8` panel coordinates.
///
/// `(0, 0)` is the [`SENTINEL`](Self::SENTINEL) marking an unused cache slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CachedPoint {
    pub x: u8,
    pub y: u8,
}

impl CachedPoint {
    /// Marker for an unused cache slot.
    pub const SENTINEL: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether this entry is the unused-slot marker.
    #[inline]
    pub const fn is_sentinel(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl From<CachedPoint> for embedded_graphics::prelude::Point {
    #[inline]
    fn from(p: CachedPoint) -> Self {
        Self::new(i32::from(p.x), i32::from(p.y))
    }
}

/// Fixed-capacity pixel cache owned by one hand.
///
/// `N` is the hand length plus one (one slot per pixel of the longest possible
/// Bresenham walk). All accessors are bounds-checked: reads past the end
/// return the sentinel and writes past the end are ignored, so a caller
/// walking a line longer than the cache cannot corrupt neighboring state.
pub struct PixelCache<const N: usize> {
    slots: [CachedPoint; N],
}

impl<const N: usize> PixelCache<N> {
    /// Create an empty cache (all slots sentinel).
    pub const fn new() -> Self {
        Self {
            slots: [CachedPoint::SENTINEL; N],
        }
    }

    /// Read slot `i`, or the sentinel when `i` is out of range.
    #[inline]
    pub fn get(&self, i: usize) -> CachedPoint {
        self.slots.get(i).copied().unwrap_or(CachedPoint::SENTINEL)
    }

    /// Write slot `i`. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, i: usize, p: CachedPoint) {
        if let Some(slot) = self.slots.get_mut(i) {
            *slot = p;
        }
    }

    /// Reset slot `i` to the sentinel. Out-of-range indices are ignored.
    #[inline]
    pub fn clear(&mut self, i: usize) {
        self.set(i, CachedPoint::SENTINEL);
    }

    /// Reset every slot to the sentinel.
    pub fn clear_all(&mut self) {
        self.slots = [CachedPoint::SENTINEL; N];
    }

    /// View the slots for cross-checking by other hands.
    #[inline]
    pub fn as_slice(&self) -> &[CachedPoint] {
        &self.slots
    }

    /// Number of slots holding a real pixel.
    #[allow(dead_code)]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|p| !p.is_sentinel()).count()
    }
}

impl<const N: usize> Default for PixelCache<N> {
    fn default() -> Self {
        Self::new()
    }
}
