//! Diagnostic plots rendered as plain images.
//!
//! These are the data behind the curve and histogram views; callers decide
//! whether to save, display, or discard them.

use crate::histogram::Histogram;
use crate::linear::Corners;
use crate::lut::ToneLut;
use crate::raster::{Channels, Image};

/// Side length of the square LUT plot and height of histogram plots.
pub const PLOT_SIZE: u32 = 256;

/// Gray level of curve dots in the LUT plot.
const CURVE_LEVEL: u8 = 125;

/// Gray level of corner markers in the LUT plot.
const CORNER_LEVEL: u8 = 255;

/// Fraction of the plot height used by the tallest histogram bar.
const HISTOGRAM_HEADROOM: f32 = 0.9;

/// Plot the first channel of `lut` on a black 256×256 grayscale canvas.
///
/// Input runs left to right, output bottom to top. Optional corners are
/// marked brighter than the curve.
pub fn render_lut_plot(lut: &ToneLut, corners: Option<&Corners>) -> Image {
    let mut plot = Image::filled(PLOT_SIZE, PLOT_SIZE, Channels::Gray, 0);

    for (i, &value) in lut.table(0).iter().enumerate() {
        put_dot(&mut plot, i as i64, 255 - value as i64, &[CURVE_LEVEL]);
    }

    if let Some(c) = corners {
        for (x, y) in [(c.x1, c.y1), (c.x2, c.y2)] {
            put_dot(
                &mut plot,
                x.round() as i64,
                255 - y.round() as i64,
                &[CORNER_LEVEL],
            );
        }
    }

    plot
}

/// Plot each channel's histogram side by side on a black RGB canvas.
///
/// Each channel panel is 256 pixels wide and scaled by its own maximum
/// count. Gray histograms are drawn in white, RGB channels in their color.
pub fn render_histogram(hist: &Histogram) -> Image {
    let n = hist.bins.len() as u32;
    let mut plot = Image::filled(PLOT_SIZE * n, PLOT_SIZE, Channels::Rgb, 0);
    let bar_max = (HISTOGRAM_HEADROOM * PLOT_SIZE as f32) as u32;

    for (c, (bins, max)) in hist.bins.iter().zip(hist.max_counts()).enumerate() {
        if max == 0 {
            continue;
        }
        let color = channel_color(hist.channels, c);
        for (i, &count) in bins.iter().enumerate() {
            let height = (count as f64 * bar_max as f64 / max as f64).round() as u32;
            let x = c as u32 * PLOT_SIZE + i as u32;
            for y in (PLOT_SIZE - height)..PLOT_SIZE {
                set_pixel(&mut plot, x, y, &color);
            }
        }
    }

    plot
}

fn channel_color(channels: Channels, channel: usize) -> [u8; 3] {
    match (channels, channel) {
        (Channels::Gray, _) => [255, 255, 255],
        (Channels::Rgb, 0) => [255, 0, 0],
        (Channels::Rgb, 1) => [0, 255, 0],
        (Channels::Rgb, _) => [0, 0, 255],
    }
}

fn set_pixel(img: &mut Image, x: u32, y: u32, color: &[u8]) {
    let n = img.channels().count();
    let offset = (y as usize * img.width() as usize + x as usize) * n;
    img.pixels_mut()[offset..offset + n].copy_from_slice(color);
}

/// Draw a small plus-shaped marker, skipping parts outside the canvas.
fn put_dot(img: &mut Image, x: i64, y: i64, color: &[u8]) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    for (dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
        let (px, py) = (x + dx, y + dy);
        if (0..w).contains(&px) && (0..h).contains(&py) {
            set_pixel(img, px as u32, py as u32, color);
        }
    }
}
