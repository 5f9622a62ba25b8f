//! Recording draw target for unit tests.
//!
//! Stores every non-background pixel write in a map so tests can assert the
//! exact screen state after a redraw pass. Writing the background color
//! removes the pixel, mirroring how an erase looks on a real panel.

use std::collections::HashMap;
use std::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::BACKGROUND;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// In-memory 240x240 draw target that records pixel state and write counts.
pub struct RecordingDisplay {
    pixels: HashMap<(i32, i32), Rgb565>,
    write_count: usize,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            pixels: HashMap::new(),
            write_count: 0,
        }
    }

    /// Color at `(x, y)`, or `None` when the pixel shows the background.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.pixels.get(&(x, y)).copied()
    }

    /// Total in-bounds pixel writes received, erases included.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// All coordinates currently lit in the given color.
    pub fn pixels_of(&self, color: Rgb565) -> Vec<(i32, i32)> {
        self.pixels
            .iter()
            .filter(|&(_, &c)| c == color)
            .map(|(&pos, _)| pos)
            .collect()
    }

    /// All coordinates not showing the background.
    pub fn lit_pixels(&self) -> Vec<(i32, i32)> {
        self.pixels.keys().copied().collect()
    }
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for RecordingDisplay {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for RecordingDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Out-of-bounds writes are dropped, like a panel driver would
            if point.x < 0 || point.y < 0 || point.x >= SCREEN_WIDTH as i32 || point.y >= SCREEN_HEIGHT as i32 {
                continue;
            }
            self.write_count += 1;
            if color == BACKGROUND {
                self.pixels.remove(&(point.x, point.y));
            } else {
                self.pixels.insert((point.x, point.y), color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::RED;
    use embedded_graphics::prelude::Point;

    #[test]
    fn test_records_and_erases() {
        let mut display = RecordingDisplay::new();
        display.draw_iter([Pixel(Point::new(5, 5), RED)]).unwrap();
        assert_eq!(display.pixel(5, 5), Some(RED));

        display.draw_iter([Pixel(Point::new(5, 5), BACKGROUND)]).unwrap();
        assert_eq!(display.pixel(5, 5), None, "Background write must erase the pixel");
        assert_eq!(display.write_count(), 2);
    }

    #[test]
    fn test_ignores_out_of_bounds() {
        let mut display = RecordingDisplay::new();
        display.draw_iter([Pixel(Point::new(240, 0), RED), Pixel(Point::new(-1, 5), RED)]).unwrap();
        assert_eq!(display.write_count(), 0, "Off-panel writes must be dropped");
        assert!(display.lit_pixels().is_empty());
    }
}
