// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photometric analysis — buffer statistics, the quality estimator, and the
// auto-correction planner that feeds the enhancement engine.

use image::RgbaImage;

// -- Statistics ---------------------------------------------------------------

/// Aggregate photometric statistics gathered in a single pass over a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PhotoStats {
    /// Mean of the per-pixel channel average, 0-255.
    pub mean_brightness: f64,
    /// Spread between the brightest and darkest pixel, 0-255.
    pub brightness_range: f64,
    /// Mean per-pixel saturation ((max-min)/max), scaled to 0-255.
    pub mean_saturation: f64,
}

/// Walk the buffer once and collect brightness and saturation statistics.
/// Alpha is ignored throughout.
pub(crate) fn photo_stats(image: &RgbaImage) -> PhotoStats {
    let pixel_count = u64::from(image.width()) * u64::from(image.height());
    if pixel_count == 0 {
        return PhotoStats {
            mean_brightness: 0.0,
            brightness_range: 0.0,
            mean_saturation: 0.0,
        };
    }

    let mut total_brightness = 0.0f64;
    let mut total_saturation = 0.0f64;
    let mut min_brightness = 255.0f64;
    let mut max_brightness = 0.0f64;

    for pixel in image.pixels() {
        let [r, g, b, _] = pixel.0;
        let brightness = (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0;
        total_brightness += brightness;
        min_brightness = min_brightness.min(brightness);
        max_brightness = max_brightness.max(brightness);

        let max = f64::from(r.max(g).max(b));
        let min = f64::from(r.min(g).min(b));
        if max > 0.0 {
            total_saturation += (max - min) / max * 255.0;
        }
    }

    PhotoStats {
        mean_brightness: total_brightness / pixel_count as f64,
        brightness_range: max_brightness - min_brightness,
        mean_saturation: total_saturation / pixel_count as f64,
    }
}

// -- Quality estimation -------------------------------------------------------

/// Estimate a 0-100 quality score from brightness and contrast statistics.
///
/// The score starts at a base of 70 and earns bonuses for landing in the
/// preferred exposure and contrast bands. Purely a function of the stats, so
/// re-scoring an unchanged buffer always returns the same value.
pub(crate) fn quality_score(stats: &PhotoStats) -> u8 {
    let mut score: u32 = 70;

    if (100.0..=150.0).contains(&stats.mean_brightness) {
        score += 15;
    } else if (80.0..=170.0).contains(&stats.mean_brightness) {
        score += 10;
    }

    if (100.0..=200.0).contains(&stats.brightness_range) {
        score += 15;
    } else if (80.0..=220.0).contains(&stats.brightness_range) {
        score += 10;
    }

    score.min(100) as u8
}

// -- Auto-correction planning -------------------------------------------------

/// Corrective deltas on the -50..50 adjustment scale. Zero means no
/// correction is warranted for that dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct AutoPlan {
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
}

/// Plan corrections that nudge the image toward the target exposure bands.
/// Each delta is proportional to the distance from the band and capped so a
/// single pass never overshoots.
pub(crate) fn auto_plan(stats: &PhotoStats) -> AutoPlan {
    let mut plan = AutoPlan::default();

    if stats.mean_brightness < 90.0 {
        plan.brightness = ((110.0 - stats.mean_brightness) / 3.0).min(30.0);
    } else if stats.mean_brightness > 160.0 {
        plan.brightness = ((140.0 - stats.mean_brightness) / 3.0).max(-30.0);
    }

    if stats.brightness_range < 80.0 {
        plan.contrast = ((100.0 - stats.brightness_range) / 4.0).min(25.0);
    } else if stats.brightness_range > 200.0 {
        plan.contrast = ((180.0 - stats.brightness_range) / 4.0).max(-20.0);
    }

    if stats.mean_saturation < 50.0 {
        plan.saturation = ((70.0 - stats.mean_saturation) / 3.0).min(20.0);
    } else if stats.mean_saturation > 120.0 {
        plan.saturation = ((100.0 - stats.mean_saturation) / 3.0).max(-15.0);
    }

    plan
}

// -- Tests --------------------------------------------------------------------
