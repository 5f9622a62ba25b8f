// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->u8, u64->u8 casts for pixel/time math
#![allow(clippy::cast_precision_loss)] // i32/usize->f32 in graphics calculations
#![allow(clippy::cast_sign_loss)] // i16->u8 where the value range is known positive
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges

//! Analog watch face and WiFi spectrum analyzer for a 240x240 smartwatch panel.
//!
//! Two pages share the display:
//!
//! - **Watch face**: square dial with 60 clock marks and three sweeping
//!   hands. Hands redraw incrementally: each hand diffs its new Bresenham
//!   line against the pixels it drew last frame and touches only the
//!   difference, so a typical tick writes a handful of pixels instead of
//!   repainting the dial. Ticks where the second hand has not moved by a
//!   whole pixel are skipped entirely.
//! - **Spectrum analyzer**: scans for WiFi networks on a fixed interval and
//!   plots one triangular signal outline per access point, with per-channel
//!   AP counts, peak labels and a least-congested-channel report for
//!   channels 1-11.
//!
//! # Optimization Summary
//!
//! - **Dirty-pixel caches**: each hand owns a fixed `(len + 1)`-slot cache of
//!   the pixels it drew, walked in lockstep with the new line ([`cache`],
//!   [`render`]).
//! - **One bus flush per frame**: all pixel writes of a hand redraw pass
//!   accumulate in a [`render::FrameBatch`] and reach the display as a single
//!   `draw_iter` call.
//! - **Pre-computed layout constants**: dial center, hand lengths and the
//!   analyzer graph layout are `const` in [`config`].
//! - **Static text styles**: banner and label styles are `const` in
//!   [`styles`]; only the per-channel label colors are built at runtime.
//! - **Heapless strings**: status lines and labels format into
//!   `heapless::String` buffers, no heap allocation on the render path.
//!
//! # Controls (Simulator Mode)
//!
//! | Button | Key | Action |
//! |--------|-----|--------|
//! | X | `X` | Toggle the tick/redraw/scan readout |
//! | Y | `Y` | Switch between watch face and analyzer |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod cache;
mod colors;
mod config;
mod dial;
mod pages;
mod profiling;
mod render;
mod spectrum;
mod styles;
mod watchface;

#[cfg(test)]
mod testing;

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use colors::BACKGROUND;
use config::{FRAME_TIME, SCAN_INTERVAL, SCREEN_HEIGHT, SCREEN_WIDTH};
use dial::DialShape;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::Vec;
use pages::Page;
use profiling::RenderMetrics;
use spectrum::{AuthMode, NetworkScanner, ScanEntry, ScanOutcome};
use styles::{LEFT_TOP, READOUT_STYLE};
use watchface::WatchFace;

/// Area cleared when the corner readout is toggled off (28 label glyphs).
const READOUT_CLEAR_SIZE: Size = Size::new(168, 10);

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("T-Watch", &output_settings);

    let mut face = WatchFace::new(DialShape::Square);
    display.clear(BACKGROUND).ok();
    face.init(&mut display);
    window.update(&display);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    // Page navigation state (watch face is default, Y button toggles)
    let mut page = Page::default();

    // Corner readout state (X button toggles)
    let mut show_stats = false;

    // Synthetic scan source; rescans on a fixed interval while the analyzer
    // page is visible. None forces a scan on the next analyzer tick.
    let mut scanner = SimScanner::new();
    let mut last_scan: Option<Instant> = None;

    let mut metrics = RenderMetrics::new();

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, button presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        // Y button: switch page, clear and repaint statics
                        Keycode::Y => {
                            page = page.toggle();
                            display.clear(BACKGROUND).ok();
                            match page {
                                Page::WatchFace => {
                                    face.reset();
                                    face.init(&mut display);
                                }
                                Page::Analyzer => {
                                    spectrum::init_analyzer(&mut display);
                                    last_scan = None;
                                }
                            }
                        }
                        // X button: toggle the metrics readout; repaint the
                        // statics it covered when switching it off
                        Keycode::X => {
                            show_stats = !show_stats;
                            if !show_stats {
                                Rectangle::new(Point::zero(), READOUT_CLEAR_SIZE)
                                    .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
                                    .draw(&mut display)
                                    .ok();
                                match page {
                                    Page::WatchFace => face.init(&mut display),
                                    Page::Analyzer => spectrum::draw_banner(&mut display),
                                }
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // ======================================================================
        // Page-Based Rendering
        // ======================================================================

        match page {
            Page::WatchFace => {
                let (hour, minute, second, millis) = wall_clock_time();
                let redrawn = face.update(&mut display, hour, minute, second, millis);
                metrics.record_tick(redrawn);
            }
            Page::Analyzer => {
                let scan_due = last_scan.is_none_or(|at| at.elapsed() >= SCAN_INTERVAL);
                if scan_due {
                    let outcome = scanner.scan_networks();
                    spectrum::update_analyzer(&mut display, &outcome);
                    metrics.record_scan();
                    last_scan = Some(Instant::now());
                }
                metrics.record_tick(false);
            }
        }

        if show_stats {
            Text::with_text_style(&metrics.readout(), Point::zero(), READOUT_STYLE, LEFT_TOP)
                .draw(&mut display)
                .ok();
        }

        // Update window with rendered frame
        window.update(&display);

        // Sleep out the rest of the tick (~50 polls/second)
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Current wall-clock time of day as `(hour, minute, second, millis)`, UTC.
fn wall_clock_time() -> (u8, u8, u8, u32) {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO);
    let secs = now.as_secs();
    let hour = ((secs / 3600) % 24) as u8;
    let minute = ((secs / 60) % 60) as u8;
    let second = (secs % 60) as u8;
    (hour, minute, second, now.subsec_millis())
}

// =============================================================================
// Synthetic Scan Source (simulator mode)
// =============================================================================

/// Fixed neighborhood of networks whose signal strengths wobble over time.
///
/// Covers the interesting analyzer cases: two SSIDs from one radio on
/// channel 1 (BSSID-prefix dedup), two distinct APs contending on channel 6,
/// a hidden SSID on channel 3 (BSSID fallback label) and open networks
/// (starred labels).
const SIM_NETWORKS: [(&str, [u8; 6], u8, f32, AuthMode, f32); 6] = [
    ("HomeNet", [0xA4, 0x91, 0x10, 0x07, 0x3C, 0x01], 1, -45.0, AuthMode::Secured, 0.31),
    ("HomeNet-Guest", [0xA4, 0x91, 0x10, 0x07, 0x3C, 0x02], 1, -47.0, AuthMode::Secured, 0.29),
    ("CoffeeShop", [0x58, 0x2F, 0x40, 0xAA, 0x10, 0x6E], 6, -68.0, AuthMode::Open, 0.53),
    ("Office-5F", [0x0C, 0x80, 0x63, 0x12, 0x9B, 0x20], 6, -58.0, AuthMode::Secured, 0.41),
    ("", [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x42], 3, -75.0, AuthMode::Secured, 0.67),
    ("PrinterDirect", [0x30, 0x05, 0x5C, 0xC7, 0x44, 0x88], 11, -80.0, AuthMode::Open, 0.23),
];

struct SimScanner {
    /// Signal generation time parameter (advances each scan)
    t: f32,
}

impl SimScanner {
    const fn new() -> Self {
        Self { t: 0.0 }
    }
}

impl NetworkScanner for SimScanner {
    fn scan_networks(&mut self) -> ScanOutcome {
        self.t += 1.0;
        let mut entries = Vec::new();
        for (ssid, bssid, channel, base_rssi, auth, freq) in SIM_NETWORKS {
            let rssi = fake_signal(self.t, base_rssi - 6.0, base_rssi + 6.0, freq) as i32;
            let mut name = heapless::String::new();
            name.push_str(ssid).ok();
            let _ = entries.push(ScanEntry {
                ssid: name,
                bssid,
                channel,
                rssi,
                auth,
            });
        }
        ScanOutcome::from_entries(entries)
    }
}

/// Generate a sinusoidal signal oscillating between min and max values.
///
/// Used to simulate RSSI readings in demo mode.
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
