// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-pixel enhancement operators. All operators mutate the RGB channels in
// place and leave alpha untouched.

use image::RgbaImage;

/// Clamp a transformed sample back into the 8-bit range.
fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

/// Shift every channel by `delta` on the -50..50 scale, 2.55 intensity units
/// per step.
pub(crate) fn apply_brightness(image: &mut RgbaImage, delta: f64) {
    let shift = delta * 2.55;
    for pixel in image.pixels_mut() {
        for channel in &mut pixel.0[..3] {
            *channel = clamp_channel(f64::from(*channel) + shift);
        }
    }
}

/// Scale every channel around the 128 midpoint by `(delta + 100) / 100`.
/// Mid-gray is a fixed point for any delta.
pub(crate) fn apply_contrast(image: &mut RgbaImage, delta: f64) {
    let factor = (delta + 100.0) / 100.0;
    let intercept = 128.0 * (1.0 - factor);
    for pixel in image.pixels_mut() {
        for channel in &mut pixel.0[..3] {
            *channel = clamp_channel(f64::from(*channel) * factor + intercept);
        }
    }
}

/// Blend every channel away from (or toward, for negative deltas) the pixel's
/// luma by `(delta + 100) / 100`. Gray pixels are unaffected.
pub(crate) fn apply_saturation(image: &mut RgbaImage, delta: f64) {
    let factor = (delta + 100.0) / 100.0;
    for pixel in image.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        let gray = 0.2989 * f64::from(r) + 0.5870 * f64::from(g) + 0.1140 * f64::from(b);
        pixel.0[0] = clamp_channel(gray + factor * (f64::from(r) - gray));
        pixel.0[1] = clamp_channel(gray + factor * (f64::from(g) - gray));
        pixel.0[2] = clamp_channel(gray + factor * (f64::from(b) - gray));
    }
}

/// 3x3 sharpen with center weight 5 and orthogonal neighbors -1. Reads from
/// an unmodified copy so freshly written pixels never feed the kernel, and
/// leaves the 1-pixel border as-is.
pub(crate) fn apply_sharpen(image: &mut RgbaImage) {
    let (width, height) = image.dimensions();
    if width < 3 || height < 3 {
        return;
    }
    let source = image.clone();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            for channel in 0..3 {
                let center = f64::from(source.get_pixel(x, y).0[channel]);
                let up = f64::from(source.get_pixel(x, y - 1).0[channel]);
                let down = f64::from(source.get_pixel(x, y + 1).0[channel]);
                let left = f64::from(source.get_pixel(x - 1, y).0[channel]);
                let right = f64::from(source.get_pixel(x + 1, y).0[channel]);
                image.get_pixel_mut(x, y).0[channel] =
                    clamp_channel(5.0 * center - up - down - left - right);
            }
        }
    }
}

// -- Tests --------------------------------------------------------------------
