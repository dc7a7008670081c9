// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Tuning options for one enhancement batch.
///
/// A partially specified JSON document deserializes with the same defaults,
/// so callers can send only the fields they care about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementOptions {
    /// Derive brightness/contrast/saturation corrections from image statistics.
    pub auto_enhance: bool,
    /// Manual brightness delta in -50..=50, applied only when `auto_enhance` is off.
    pub brightness_adjustment: f64,
    /// Manual contrast delta in -50..=50, applied only when `auto_enhance` is off.
    pub contrast_adjustment: f64,
    /// Manual saturation delta in -50..=50, applied only when `auto_enhance` is off.
    pub saturation_adjustment: f64,
    /// Apply the fixed 3x3 edge-sharpening convolution.
    pub sharpen: bool,
    /// Record a background-removal request. Needs an external model; no pixel effect.
    pub remove_background: bool,
    /// Downscale images whose larger side exceeds this many pixels.
    pub max_dimension: u32,
}

impl Default for EnhancementOptions {
    fn default() -> Self {
        Self {
            auto_enhance: true,
            brightness_adjustment: 0.0,
            contrast_adjustment: 0.0,
            saturation_adjustment: 0.0,
            sharpen: false,
            remove_background: false,
            max_dimension: 2048,
        }
    }
}

/// Acceptance thresholds for the intake gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeLimits {
    /// Uploads beyond this count are ignored.
    pub max_images: usize,
    /// Minimum acceptable short side in pixels. Below this a warning is raised.
    pub min_resolution: u32,
    /// Short side below this (but above the minimum) takes a small score penalty.
    pub recommended_resolution: u32,
    /// Hard cap on upload size.
    pub max_file_size_mb: f64,
    /// Uploads above this size are recompressed.
    pub compression_trigger_mb: f64,
    /// JPEG quality used for recompression and thumbnails.
    pub compression_quality: u8,
    /// Blur score above which an image counts as blurry (0-100 scale).
    pub blur_threshold: f64,
    /// Perceptual-hash similarity at or above which two images count as duplicates.
    pub duplicate_threshold: f64,
    /// Longest edge of generated thumbnails in pixels.
    pub thumbnail_edge: u32,
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            max_images: 10,
            min_resolution: 640,
            recommended_resolution: 1200,
            max_file_size_mb: 10.0,
            compression_trigger_mb: 2.0,
            compression_quality: 85,
            blur_threshold: 30.0,
            duplicate_threshold: 0.90,
            thumbnail_edge: 256,
        }
    }
}
