//! WiFi spectrum analyzer: scan snapshots to a per-channel congestion chart.
//!
//! A scan delivers a batch of [`ScanEntry`] values through the
//! [`NetworkScanner`] seam. Each update recomputes [`ChannelStats`] from
//! scratch, then plots one triangular signal outline per access point, labels
//! the strongest AP of every channel, and reports the least congested
//! channels in the 1-11 range.
//!
//! # Congestion Model
//!
//! Every distinct AP contributes `(rssi - floor)^2` of noise to its own
//! channel. Because 2.4 GHz channels overlap, neighbors within four channels
//! receive a share of that noise that shrinks with distance: weight
//! `(5 - d) / 5` at distance `d`, in integer math. APs broadcasting multiple
//! SSIDs from one radio are collapsed by their BSSID prefix so a single
//! physical device is counted once.

use core::fmt::Write as _;

use embedded_graphics::Drawable;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::{Line, Primitive, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::{String, Vec};

use crate::colors::{BACKGROUND, BLUE, CHANNEL_COLORS, WHITE};
use crate::config::{
    BANNER_HEIGHT, CHANNEL_WIDTH, GRAPH_BASELINE, GRAPH_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, SIGNAL_WIDTH,
};
use crate::styles::{
    BANNER_CHAR_WIDTH, BANNER_STYLE_BLUE, BANNER_STYLE_GREEN, BANNER_STYLE_RED, LABEL_CHAR_WIDTH, LABEL_FONT,
    LABEL_STYLE_WHITE, LEFT_TOP,
};

// =============================================================================
// Scan Model
// =============================================================================

/// Number of 2.4 GHz WiFi channels tracked.
pub const CHANNEL_COUNT: usize = 14;

/// Maximum scan results kept from one sweep.
pub const MAX_NETWORKS: usize = 32;

/// Weakest RSSI shown on the chart; readings below are trimmed to this.
pub const RSSI_FLOOR: i32 = -100;

/// Strongest RSSI; readings at or above reach the full graph height.
pub const RSSI_CEILING: i32 = -40;

/// BSSID bytes compared when collapsing multi-SSID radios.
const BSSID_PREFIX_LEN: usize = 5;

/// Authentication mode of a scanned network, reduced to what the chart shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthMode {
    /// Unencrypted network, flagged with `*` on its chart label.
    Open,
    /// Any encrypted mode.
    Secured,
}

/// One network found by a scan sweep.
#[derive(Clone, Debug)]
pub struct ScanEntry {
    pub ssid: String<32>,
    pub bssid: [u8; 6],
    pub channel: u8,
    pub rssi: i32,
    pub auth: AuthMode,
}

/// Result of one scan sweep. An empty sweep is a normal outcome, not an error.
#[derive(Clone, Debug)]
pub enum ScanOutcome {
    /// No networks in range.
    Empty,
    /// At least one network found.
    Found(Vec<ScanEntry, MAX_NETWORKS>),
}

impl ScanOutcome {
    pub fn from_entries(entries: Vec<ScanEntry, MAX_NETWORKS>) -> Self {
        if entries.is_empty() { Self::Empty } else { Self::Found(entries) }
    }
}

/// Source of scan sweeps. The simulator binary supplies a synthetic
/// implementation; hardware would wrap its WiFi driver here.
pub trait NetworkScanner {
    fn scan_networks(&mut self) -> ScanOutcome;
}

// =============================================================================
// Channel Statistics
// =============================================================================

/// Clamp a channel number to the tracked range and convert to an array index.
#[inline]
fn channel_index(channel: u8) -> usize {
    usize::from(channel.clamp(1, CHANNEL_COUNT as u8) - 1)
}

fn bssid_prefix_matches(a: &[u8; 6], b: &[u8; 6]) -> bool {
    a[..BSSID_PREFIX_LEN] == b[..BSSID_PREFIX_LEN]
}

/// Per-channel statistics recomputed from one scan sweep.
pub struct ChannelStats {
    /// Distinct access points per channel (BSSID-prefix deduplicated).
    pub ap_count: [u8; CHANNEL_COUNT],
    /// Accumulated noise per channel, including neighbor smear.
    pub noise: [i32; CHANNEL_COUNT],
    /// Strongest RSSI seen per channel.
    pub peak_rssi: [i32; CHANNEL_COUNT],
    /// Index into the scan results of the strongest entry per channel.
    pub peak_idx: [Option<usize>; CHANNEL_COUNT],
}

impl ChannelStats {
    pub fn collect(entries: &[ScanEntry]) -> Self {
        let mut stats = Self {
            ap_count: [0; CHANNEL_COUNT],
            noise: [0; CHANNEL_COUNT],
            peak_rssi: [RSSI_FLOOR; CHANNEL_COUNT],
            peak_idx: [None; CHANNEL_COUNT],
        };

        for (i, entry) in entries.iter().enumerate() {
            let idx = channel_index(entry.channel);

            // Peak tracking sees every entry, including duplicate radios
            if stats.peak_rssi[idx] < entry.rssi {
                stats.peak_rssi[idx] = entry.rssi;
                stats.peak_idx[idx] = Some(i);
            }

            // Collapse multiple SSIDs broadcast by one radio on one channel
            let duplicate = entries[..i]
                .iter()
                .any(|prev| prev.channel == entry.channel && bssid_prefix_matches(&prev.bssid, &entry.bssid));
            if duplicate {
                continue;
            }

            stats.ap_count[idx] += 1;

            // Noise smear over neighboring channels, fading with distance
            let base = (entry.rssi - RSSI_FLOOR) * (entry.rssi - RSSI_FLOOR);
            for d in -4i32..=4 {
                let j = idx as i32 + d;
                if (0..CHANNEL_COUNT as i32).contains(&j) {
                    stats.noise[j as usize] += base * (5 - d.abs()) / 5;
                }
            }
        }

        stats
    }

    /// Channels 1..=11 whose noise equals the minimum over that range.
    /// Channels 12-14 are excluded since they are unusable in many regions.
    pub fn least_congested(&self) -> Vec<u8, 11> {
        let min_noise = self.noise[..11].iter().copied().min().unwrap_or(0);
        let mut channels = Vec::new();
        for (idx, &noise) in self.noise[..11].iter().enumerate() {
            if noise == min_noise {
                let _ = channels.push(idx as u8 + 1);
            }
        }
        channels
    }
}

// =============================================================================
// Chart Rendering
// =============================================================================

/// Map an RSSI reading to a bar height in `1..=GRAPH_HEIGHT`.
fn signal_height(rssi: i32) -> i32 {
    let mapped = 1 + (rssi - RSSI_FLOOR) * (GRAPH_HEIGHT - 1) / (RSSI_CEILING - RSSI_FLOOR);
    mapped.clamp(1, GRAPH_HEIGHT)
}

/// X coordinate of a channel's center on the graph.
#[inline]
fn channel_offset(idx: usize) -> i32 {
    (idx as i32 + 2) * CHANNEL_WIDTH
}

fn bssid_string(bssid: &[u8; 6]) -> String<17> {
    let mut s = String::new();
    let _ = write!(
        s,
        "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        bssid[0], bssid[1], bssid[2], bssid[3], bssid[4], bssid[5]
    );
    s
}

/// Paint the full analyzer page background and banner. Call once when the
/// analyzer page is entered.
pub fn init_analyzer<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLUE).ok();
    draw_banner(display);
}

/// Repaint just the three banner segments. The segments carry their own
/// background colors, so this also repairs overdrawn banner pixels.
pub fn draw_banner<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(" ESP ", Point::zero(), BANNER_STYLE_RED, LEFT_TOP)
        .draw(display)
        .ok();
    Text::with_text_style(" WiFi ", Point::new(5 * BANNER_CHAR_WIDTH, 0), BANNER_STYLE_GREEN, LEFT_TOP)
        .draw(display)
        .ok();
    Text::with_text_style(" Analyzer", Point::new(11 * BANNER_CHAR_WIDTH, 0), BANNER_STYLE_BLUE, LEFT_TOP)
        .draw(display)
        .ok();
}

/// Redraw the whole graph area from one scan outcome.
pub fn update_analyzer<D>(display: &mut D, outcome: &ScanOutcome)
where
    D: DrawTarget<Color = Rgb565>,
{
    // Clear everything below the banner
    Rectangle::new(
        Point::new(0, BANNER_HEIGHT),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - BANNER_HEIGHT as u32),
    )
    .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
    .draw(display)
    .ok();

    let entries: &[ScanEntry] = match outcome {
        ScanOutcome::Empty => {
            Text::with_text_style("no networks found", Point::new(0, BANNER_HEIGHT), LABEL_STYLE_WHITE, LEFT_TOP)
                .draw(display)
                .ok();
            return;
        }
        ScanOutcome::Found(entries) => entries,
    };

    let stats = ChannelStats::collect(entries);

    // Status line: count and the quietest channels
    let mut status: String<80> = String::new();
    let _ = write!(status, "{} networks found, lesser noise ch:", entries.len());
    for (i, channel) in stats.least_congested().iter().enumerate() {
        let _ = write!(status, "{}{channel}", if i == 0 { " " } else { ", " });
    }
    Text::with_text_style(&status, Point::new(0, BANNER_HEIGHT), LABEL_STYLE_WHITE, LEFT_TOP)
        .draw(display)
        .ok();

    // Triangular signal outlines, one per entry
    for (i, entry) in entries.iter().enumerate() {
        let idx = channel_index(entry.channel);
        let color = CHANNEL_COLORS[idx];
        let height = signal_height(entry.rssi);
        let offset = channel_offset(idx);
        let style = PrimitiveStyle::with_stroke(color, 1);

        let peak = Point::new(offset, GRAPH_BASELINE - height);
        Line::new(peak, Point::new(offset - SIGNAL_WIDTH, GRAPH_BASELINE + 1))
            .into_styled(style)
            .draw(display)
            .ok();
        Line::new(peak, Point::new(offset + SIGNAL_WIDTH, GRAPH_BASELINE + 1))
            .into_styled(style)
            .draw(display)
            .ok();

        // Label only the strongest entry of each channel
        if stats.peak_idx[idx] == Some(i) {
            draw_peak_label(display, entry, idx, height, color);
        }
    }

    draw_base_axle(display, &stats);
}

/// `SSID(rssi)` label above a channel's peak, `*` appended for open networks.
/// Falls back to the BSSID when the SSID is hidden.
fn draw_peak_label<D>(display: &mut D, entry: &ScanEntry, idx: usize, height: i32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut label: String<48> = String::new();
    let fallback = bssid_string(&entry.bssid);
    let name: &str = if entry.ssid.is_empty() { &fallback } else { &entry.ssid };
    let shown_rssi = entry.rssi.max(RSSI_FLOOR);
    let _ = write!(label, "{name}({shown_rssi})");
    if entry.auth == AuthMode::Open {
        let _ = label.push('*');
    }

    // Keep the label on screen: shift left at the right border, pin wide
    // labels to the left border
    let text_width = (name.chars().count() as i32 + 6) * LABEL_CHAR_WIDTH;
    let x = if text_width > SCREEN_WIDTH as i32 {
        0
    } else {
        (idx as i32 * CHANNEL_WIDTH).min(SCREEN_WIDTH as i32 - text_width)
    };

    let style = MonoTextStyle::new(LABEL_FONT, color);
    Text::with_text_style(&label, Point::new(x, GRAPH_BASELINE - 10 - height), style, LEFT_TOP)
        .draw(display)
        .ok();
}

/// Horizontal base axle with channel numbers and per-channel AP counts.
fn draw_base_axle<D>(display: &mut D, stats: &ChannelStats)
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(0, GRAPH_BASELINE), Point::new(SCREEN_WIDTH as i32 - 1, GRAPH_BASELINE))
        .into_styled(PrimitiveStyle::with_stroke(WHITE, 1))
        .draw(display)
        .ok();

    for idx in 0..CHANNEL_COUNT {
        let channel = idx as u8 + 1;
        let offset = channel_offset(idx);
        let style = MonoTextStyle::new(LABEL_FONT, CHANNEL_COLORS[idx]);

        let mut number: String<2> = String::new();
        let _ = write!(number, "{channel}");
        let number_x = offset - if channel < 10 { 3 } else { 6 };
        Text::with_text_style(&number, Point::new(number_x, GRAPH_BASELINE + 2), style, LEFT_TOP)
            .draw(display)
            .ok();

        if stats.ap_count[idx] > 0 {
            let mut count: String<5> = String::new();
            let _ = write!(count, "{{{}}}", stats.ap_count[idx]);
            let count_x = offset - if stats.ap_count[idx] < 10 { 9 } else { 12 };
            Text::with_text_style(&count, Point::new(count_x, GRAPH_BASELINE + 10), style, LEFT_TOP)
                .draw(display)
                .ok();
        }
    }
}
