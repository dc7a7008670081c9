// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancement engine — sequential batch driver and the per-image pipeline:
// downscale, tonal correction, sharpening, JPEG re-encode, audit trail.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use bildwerk_core::config::EnhancementOptions;
use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::messages;
use bildwerk_core::types::{
    BatchEnhancementResult, EnhancedImageResult, Enhancement, EnhancementKind, SourceImage,
};
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::{analysis, ops};
use crate::codec;

/// Planned auto-corrections below this magnitude are not worth a pass over
/// the buffer.
const AUTO_APPLY_THRESHOLD: f64 = 5.0;

/// Quality for the final JPEG re-encode of every enhanced image.
const OUTPUT_JPEG_QUALITY: u8 = 92;

/// Strength recorded for the fixed-kernel sharpening pass.
const SHARPEN_STRENGTH: f64 = 30.0;

// -- Cancellation -------------------------------------------------------------

/// Signal checked between images to abandon a running batch.
///
/// Clones share the flag: hand one to the batch call and keep another to trip
/// from elsewhere. Cancellation is only observed at image boundaries, so a
/// batch stops after the image in flight, never mid-buffer.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// -- Engine -------------------------------------------------------------------

/// Batch image enhancer.
///
/// Processes images strictly in input order, one at a time, so results are
/// index-aligned with the submitted batch.
pub struct EnhancementEngine {
    options: EnhancementOptions,
}

impl EnhancementEngine {
    pub fn new(options: EnhancementOptions) -> Self {
        Self { options }
    }

    /// Engine with the stock options: auto-enhance on, 2048px dimension cap.
    pub fn with_defaults() -> Self {
        Self::new(EnhancementOptions::default())
    }

    pub fn options(&self) -> &EnhancementOptions {
        &self.options
    }

    /// Enhance a batch of images.
    ///
    /// All-or-nothing: if any image fails to decode the whole call fails and
    /// no partial results are returned. Callers needing per-image tolerance
    /// should screen uploads through [`crate::IntakeGate`] first.
    #[instrument(skip_all, fields(image_count = images.len()))]
    pub fn enhance_images(&self, images: &[SourceImage]) -> Result<BatchEnhancementResult> {
        self.enhance_images_cancellable(images, &CancelToken::new())
    }

    /// Enhance a batch, checking `cancel` before each image.
    ///
    /// A tripped token yields [`BildwerkError::Cancelled`] with progress
    /// counts; results for already-completed images are discarded rather than
    /// returned partially.
    #[instrument(skip_all, fields(image_count = images.len()))]
    pub fn enhance_images_cancellable(
        &self,
        images: &[SourceImage],
        cancel: &CancelToken,
    ) -> Result<BatchEnhancementResult> {
        let started = Instant::now();
        info!(image_count = images.len(), "Enhancing image batch");

        let mut results = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            if cancel.is_cancelled() {
                warn!(completed = index, total = images.len(), "Batch cancelled");
                return Err(BildwerkError::Cancelled {
                    completed: index,
                    total: images.len(),
                });
            }
            results.push(self.enhance_single(image, index)?);
        }

        let total_improvements = results
            .iter()
            .map(|r| i32::from(r.after_quality_score) - i32::from(r.before_quality_score))
            .sum();
        let processing_time_ms = started.elapsed().as_millis() as u64;
        info!(processing_time_ms, total_improvements, "Batch enhancement complete");

        Ok(BatchEnhancementResult {
            results,
            total_improvements,
            processing_time_ms,
        })
    }

    /// Run the full pipeline for one image and assemble its result record.
    #[instrument(skip(self, source), fields(index))]
    fn enhance_single(&self, source: &SourceImage, index: usize) -> Result<EnhancedImageResult> {
        let name = source.resolved_name(index);
        let decoded = codec::decode(&name, &source.bytes)?;

        let mut enhancements = Vec::new();
        let sized = self.downscale(decoded, &mut enhancements);
        let mut buffer = sized.to_rgba8();

        let before_stats = analysis::photo_stats(&buffer);
        let before_quality = analysis::quality_score(&before_stats);

        if self.options.auto_enhance {
            self.apply_auto_adjustments(&mut buffer, &before_stats, &mut enhancements);
        } else {
            self.apply_manual_adjustments(&mut buffer, &mut enhancements);
        }

        if self.options.sharpen {
            ops::apply_sharpen(&mut buffer);
            enhancements.push(Enhancement {
                kind: EnhancementKind::Sharpen,
                strength: SHARPEN_STRENGTH,
                description: messages::enhancement_description(
                    EnhancementKind::Sharpen,
                    0.0,
                    false,
                ),
            });
        }

        // Needs an external segmentation model; recorded in the audit trail
        // but never applied to pixels.
        if self.options.remove_background {
            enhancements.push(Enhancement {
                kind: EnhancementKind::BackgroundRemoval,
                strength: 0.0,
                description: messages::enhancement_description(
                    EnhancementKind::BackgroundRemoval,
                    0.0,
                    false,
                ),
            });
        }

        let after_quality = analysis::quality_score(&analysis::photo_stats(&buffer));
        let enhanced_bytes =
            codec::encode_jpeg(&DynamicImage::ImageRgba8(buffer), OUTPUT_JPEG_QUALITY)?;

        let improvement = i32::from(after_quality) - i32::from(before_quality);
        debug!(
            name = %name,
            before_quality,
            after_quality,
            enhancement_count = enhancements.len(),
            "Image enhanced"
        );

        Ok(EnhancedImageResult {
            source_name: name,
            file_size_before: source.bytes.len() as u64,
            file_size_after: enhanced_bytes.len() as u64,
            original_bytes: source.bytes.clone(),
            enhanced_bytes,
            enhancements_applied: enhancements,
            before_quality_score: before_quality,
            after_quality_score: after_quality,
            improvement_summary: messages::improvement_summary(improvement),
        })
    }

    /// Scale down so the larger side equals the configured cap, preserving
    /// aspect ratio. Images already inside the cap pass through untouched.
    fn downscale(
        &self,
        image: DynamicImage,
        enhancements: &mut Vec<Enhancement>,
    ) -> DynamicImage {
        let (width, height) = (image.width(), image.height());
        let larger = width.max(height);
        if larger <= self.options.max_dimension {
            return image;
        }

        let scale = f64::from(self.options.max_dimension) / f64::from(larger);
        let new_width = (f64::from(width) * scale).round().max(1.0) as u32;
        let new_height = (f64::from(height) * scale).round().max(1.0) as u32;
        info!(width, height, new_width, new_height, "Downscaling image");

        let resized = image.resize_exact(new_width, new_height, FilterType::Lanczos3);
        enhancements.push(Enhancement {
            kind: EnhancementKind::Resize,
            strength: ((1.0 - scale) * 100.0).round(),
            description: messages::enhancement_description(EnhancementKind::Resize, 0.0, false),
        });
        resized
    }

    /// Plan deltas from the pre-adjustment statistics and apply whichever
    /// clear the threshold, in brightness, contrast, saturation order.
    fn apply_auto_adjustments(
        &self,
        buffer: &mut RgbaImage,
        stats: &analysis::PhotoStats,
        enhancements: &mut Vec<Enhancement>,
    ) {
        let plan = analysis::auto_plan(stats);
        debug!(
            brightness = plan.brightness,
            contrast = plan.contrast,
            saturation = plan.saturation,
            "Auto adjustments planned"
        );

        if plan.brightness.abs() > AUTO_APPLY_THRESHOLD {
            ops::apply_brightness(buffer, plan.brightness);
            enhancements.push(adjustment_entry(
                EnhancementKind::Brightness,
                plan.brightness,
                true,
            ));
        }
        if plan.contrast.abs() > AUTO_APPLY_THRESHOLD {
            ops::apply_contrast(buffer, plan.contrast);
            enhancements.push(adjustment_entry(EnhancementKind::Contrast, plan.contrast, true));
        }
        if plan.saturation.abs() > AUTO_APPLY_THRESHOLD {
            ops::apply_saturation(buffer, plan.saturation);
            enhancements.push(adjustment_entry(
                EnhancementKind::Saturation,
                plan.saturation,
                true,
            ));
        }
    }

    /// Apply the caller's non-zero manual deltas in the same fixed order.
    fn apply_manual_adjustments(
        &self,
        buffer: &mut RgbaImage,
        enhancements: &mut Vec<Enhancement>,
    ) {
        if self.options.brightness_adjustment != 0.0 {
            ops::apply_brightness(buffer, self.options.brightness_adjustment);
            enhancements.push(adjustment_entry(
                EnhancementKind::Brightness,
                self.options.brightness_adjustment,
                false,
            ));
        }
        if self.options.contrast_adjustment != 0.0 {
            ops::apply_contrast(buffer, self.options.contrast_adjustment);
            enhancements.push(adjustment_entry(
                EnhancementKind::Contrast,
                self.options.contrast_adjustment,
                false,
            ));
        }
        if self.options.saturation_adjustment != 0.0 {
            ops::apply_saturation(buffer, self.options.saturation_adjustment);
            enhancements.push(adjustment_entry(
                EnhancementKind::Saturation,
                self.options.saturation_adjustment,
                false,
            ));
        }
    }
}

/// Audit entry for one tonal adjustment; strength is the delta magnitude.
fn adjustment_entry(kind: EnhancementKind, delta: f64, auto: bool) -> Enhancement {
    Enhancement {
        kind,
        strength: delta.abs(),
        description: messages::enhancement_description(kind, delta, auto),
    }
}

// -- Output conversion --------------------------------------------------------

/// A derived output file, ready for storage or upload.
#[derive(Debug, Clone, Serialize)]
pub struct EnhancedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Pair every result with its derived `*_enhanced.jpg` file name.
pub fn convert_enhanced_to_files(results: &[EnhancedImageResult]) -> Vec<EnhancedFile> {
    results
        .iter()
        .map(|result| EnhancedFile {
            name: codec::enhanced_file_name(&result.source_name),
            bytes: result.enhanced_bytes.clone(),
        })
        .collect()
}

/// Write every derived file into `dir`, returning the paths in batch order.
pub fn write_enhanced_files(
    results: &[EnhancedImageResult],
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut paths = Vec::with_capacity(results.len());
    for result in results {
        let path = dir.join(codec::enhanced_file_name(&result.source_name));
        std::fs::write(&path, &result.enhanced_bytes)?;
        info!("Wrote enhanced image to {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}

/// Before/after view of one result for a comparison display.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonPreview<'a> {
    pub before: &'a [u8],
    pub after: &'a [u8],
    /// Captions with strengths, e.g. `"Brightened (20%)"`.
    pub improvements: Vec<String>,
}

/// Build the comparison view from a finished result.
pub fn comparison_preview(result: &EnhancedImageResult) -> ComparisonPreview<'_> {
    ComparisonPreview {
        before: &result.original_bytes,
        after: &result.enhanced_bytes,
        improvements: result
            .enhancements_applied
            .iter()
            .map(|e| format!("{} ({}%)", e.description.en, e.strength))
            .collect(),
    }
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn png_source(name: &str, image: &RgbaImage) -> SourceImage {
        let mut buffer = Vec::new();
        DynamicImage::ImageRgba8(image.clone())
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .expect("PNG encoding");
        SourceImage::named(name, buffer)
    }

    fn uniform(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
    }

    fn kinds(result: &EnhancedImageResult) -> Vec<EnhancementKind> {
        result.enhancements_applied.iter().map(|e| e.kind).collect()
    }

    /// Mid-gray is well exposed but flat and colorless, so auto-enhance
    /// records exactly a contrast boost and a saturation boost. Contrast
    /// pivots on 128, so the pixels (and the score) are unchanged.
    #[test]
    fn auto_enhances_flat_gray() {
        let engine = EnhancementEngine::with_defaults();
        let batch = engine
            .enhance_images(&[png_source("gray.png", &uniform(100, 100, 128))])
            .expect("batch");

        let result = &batch.results[0];
        assert_eq!(
            kinds(result),
            vec![EnhancementKind::Contrast, EnhancementKind::Saturation]
        );
        assert_eq!(result.enhancements_applied[0].strength, 25.0);
        assert_eq!(result.enhancements_applied[1].strength, 20.0);
        assert_eq!(result.before_quality_score, 85);
        assert_eq!(result.after_quality_score, 85);
    }

    /// An image inside every target band needs no corrections at all.
    #[test]
    fn auto_skips_well_balanced_image() {
        // Left half (130,100,70), right half (230,200,170): mean brightness
        // 150, range 100, mean saturation ~92. All in band.
        let mut image = RgbaImage::from_pixel(100, 100, Rgba([130, 100, 70, 255]));
        for y in 0..100 {
            for x in 50..100 {
                image.put_pixel(x, y, Rgba([230, 200, 170, 255]));
            }
        }

        let engine = EnhancementEngine::with_defaults();
        let batch = engine.enhance_images(&[png_source("good.png", &image)]).expect("batch");

        let result = &batch.results[0];
        assert!(result.enhancements_applied.is_empty());
        assert_eq!(result.before_quality_score, 100);
        assert_eq!(result.after_quality_score, 100);
        assert_eq!(result.improvement_summary.en, "Image already has good quality");
    }

    /// The dark-image path: brightness, contrast, and saturation all fire,
    /// the score rises from 70 to 80, and the summary reports the band.
    #[test]
    fn auto_lifts_dark_image() {
        let engine = EnhancementEngine::with_defaults();
        let batch = engine
            .enhance_images(&[png_source("dark.png", &uniform(100, 100, 50))])
            .expect("batch");

        let result = &batch.results[0];
        assert_eq!(
            kinds(result),
            vec![
                EnhancementKind::Brightness,
                EnhancementKind::Contrast,
                EnhancementKind::Saturation,
            ]
        );
        assert_eq!(result.enhancements_applied[0].strength, 20.0);
        assert_eq!(result.enhancements_applied[0].description.en, "Brightened");
        assert_eq!(result.before_quality_score, 70);
        assert_eq!(result.after_quality_score, 80);
        assert_eq!(result.improvement_summary.en, "Good improvement (+10 points)");
        assert_eq!(batch.total_improvements, 10);
    }

    /// At most one entry per enhancement type in a single pass.
    #[test]
    fn at_most_one_entry_per_kind() {
        let options = EnhancementOptions {
            sharpen: true,
            remove_background: true,
            ..EnhancementOptions::default()
        };
        let batch = EnhancementEngine::new(options)
            .enhance_images(&[png_source("dark.png", &uniform(64, 64, 50))])
            .expect("batch");

        let mut seen = kinds(&batch.results[0]);
        seen.sort_by_key(|k| format!("{k:?}"));
        let before = seen.len();
        seen.dedup();
        assert_eq!(seen.len(), before);
    }

    /// Sharpening a flat image records the entry without changing pixels, so
    /// the before and after scores match.
    #[test]
    fn sharpen_only_run_keeps_score() {
        let options = EnhancementOptions {
            auto_enhance: false,
            sharpen: true,
            ..EnhancementOptions::default()
        };
        let batch = EnhancementEngine::new(options)
            .enhance_images(&[png_source("flat.png", &uniform(50, 50, 128))])
            .expect("batch");

        let result = &batch.results[0];
        assert_eq!(kinds(result), vec![EnhancementKind::Sharpen]);
        assert_eq!(result.enhancements_applied[0].strength, 30.0);
        assert_eq!(result.before_quality_score, result.after_quality_score);
    }

    /// Oversized input is scaled so the long side hits the cap, with the
    /// reduction recorded as the resize strength.
    #[test]
    fn downscales_to_dimension_cap() {
        let options = EnhancementOptions {
            auto_enhance: false,
            max_dimension: 500,
            ..EnhancementOptions::default()
        };
        let batch = EnhancementEngine::new(options)
            .enhance_images(&[png_source("big.png", &uniform(4000, 2000, 128))])
            .expect("batch");

        let result = &batch.results[0];
        assert_eq!(kinds(result), vec![EnhancementKind::Resize]);
        assert_eq!(result.enhancements_applied[0].strength, 88.0);

        let out = image::load_from_memory(&result.enhanced_bytes).expect("decode output");
        assert_eq!((out.width(), out.height()), (500, 250));
    }

    /// Images already inside the cap are never touched by the resize stage.
    #[test]
    fn skips_resize_inside_cap() {
        let batch = EnhancementEngine::with_defaults()
            .enhance_images(&[png_source("small.png", &uniform(64, 64, 50))])
            .expect("batch");
        assert!(!kinds(&batch.results[0]).contains(&EnhancementKind::Resize));
    }

    /// One undecodable image fails the whole batch, naming the culprit.
    #[test]
    fn decode_failure_aborts_batch() {
        let engine = EnhancementEngine::with_defaults();
        let images = vec![
            png_source("ok.png", &uniform(10, 10, 128)),
            SourceImage::named("broken.png", b"not an image".to_vec()),
        ];

        let err = engine.enhance_images(&images).expect_err("must fail");
        match err {
            BildwerkError::Decode(message) => assert!(message.contains("broken.png")),
            other => panic!("unexpected error: {other}"),
        }
    }

    /// Results come back in submission order, index-aligned with the input.
    #[test]
    fn results_preserve_input_order() {
        let engine = EnhancementEngine::with_defaults();
        let images = vec![
            png_source("a.png", &uniform(10, 10, 128)),
            png_source("b.png", &uniform(20, 20, 128)),
            png_source("c.png", &uniform(30, 30, 128)),
        ];

        let batch = engine.enhance_images(&images).expect("batch");
        let names: Vec<_> = batch.results.iter().map(|r| r.source_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);

        for (result, side) in batch.results.iter().zip([10u32, 20, 30]) {
            let out = image::load_from_memory(&result.enhanced_bytes).expect("decode output");
            assert_eq!(out.width(), side);
        }
    }

    /// With auto-enhance on, manual deltas are ignored entirely: output bytes
    /// match a run with pristine defaults.
    #[test]
    fn auto_mode_ignores_manual_deltas() {
        let image = png_source("gray.png", &uniform(40, 40, 50));
        let plain = EnhancementEngine::with_defaults()
            .enhance_images(std::slice::from_ref(&image))
            .expect("batch");

        let mixed_options = EnhancementOptions {
            brightness_adjustment: 40.0,
            contrast_adjustment: -30.0,
            saturation_adjustment: 10.0,
            ..EnhancementOptions::default()
        };
        let mixed = EnhancementEngine::new(mixed_options)
            .enhance_images(&[image])
            .expect("batch");

        assert_eq!(plain.results[0].enhanced_bytes, mixed.results[0].enhanced_bytes);
        assert_eq!(kinds(&plain.results[0]), kinds(&mixed.results[0]));
    }

    /// Manual mode applies exactly the non-zero deltas, recording the
    /// magnitude and the manual captions.
    #[test]
    fn manual_mode_applies_requested_deltas() {
        let options = EnhancementOptions {
            auto_enhance: false,
            brightness_adjustment: 20.0,
            contrast_adjustment: -10.0,
            ..EnhancementOptions::default()
        };
        let batch = EnhancementEngine::new(options)
            .enhance_images(&[png_source("gray.png", &uniform(32, 32, 128))])
            .expect("batch");

        let result = &batch.results[0];
        assert_eq!(
            kinds(result),
            vec![EnhancementKind::Brightness, EnhancementKind::Contrast]
        );
        assert_eq!(result.enhancements_applied[0].strength, 20.0);
        assert_eq!(result.enhancements_applied[0].description.en, "Brightness adjusted");
        assert_eq!(result.enhancements_applied[1].strength, 10.0);
    }

    /// Background removal is recorded as a zero-strength entry and leaves the
    /// quality score untouched.
    #[test]
    fn background_removal_is_audit_only() {
        let options = EnhancementOptions {
            auto_enhance: false,
            remove_background: true,
            ..EnhancementOptions::default()
        };
        let batch = EnhancementEngine::new(options)
            .enhance_images(&[png_source("product.png", &uniform(16, 16, 128))])
            .expect("batch");

        let result = &batch.results[0];
        assert_eq!(kinds(result), vec![EnhancementKind::BackgroundRemoval]);
        assert_eq!(result.enhancements_applied[0].strength, 0.0);
        assert_eq!(result.before_quality_score, result.after_quality_score);
    }

    /// An empty batch succeeds with empty results.
    #[test]
    fn empty_batch_is_ok() {
        let batch = EnhancementEngine::with_defaults().enhance_images(&[]).expect("batch");
        assert!(batch.results.is_empty());
        assert_eq!(batch.total_improvements, 0);
    }

    /// A pre-tripped token stops the batch before any work happens.
    #[test]
    fn cancelled_token_stops_batch() {
        let token = CancelToken::new();
        token.cancel();

        let err = EnhancementEngine::with_defaults()
            .enhance_images_cancellable(
                &[png_source("a.png", &uniform(8, 8, 128))],
                &token,
            )
            .expect_err("must cancel");

        match err {
            BildwerkError::Cancelled { completed, total } => {
                assert_eq!(completed, 0);
                assert_eq!(total, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /// File sizes in the result reflect the actual byte payloads.
    #[test]
    fn records_file_sizes() {
        let source = png_source("gray.png", &uniform(60, 60, 128));
        let original_len = source.bytes.len() as u64;
        let batch = EnhancementEngine::with_defaults()
            .enhance_images(&[source])
            .expect("batch");

        let result = &batch.results[0];
        assert_eq!(result.file_size_before, original_len);
        assert_eq!(result.file_size_after, result.enhanced_bytes.len() as u64);
        assert!(!result.enhanced_bytes.is_empty());
    }

    /// Output files get the `_enhanced.jpg` name derived from the source.
    #[test]
    fn converts_results_to_files() {
        let batch = EnhancementEngine::with_defaults()
            .enhance_images(&[png_source("chair.png", &uniform(12, 12, 128))])
            .expect("batch");

        let files = convert_enhanced_to_files(&batch.results);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "chair_enhanced.jpg");
        assert_eq!(files[0].bytes, batch.results[0].enhanced_bytes);
    }

    /// Files land on disk under the derived names, paths in batch order.
    #[test]
    fn writes_enhanced_files_to_directory() {
        let batch = EnhancementEngine::with_defaults()
            .enhance_images(&[png_source("chair.png", &uniform(12, 12, 128))])
            .expect("batch");

        let dir = tempfile::tempdir().expect("temp dir");
        let paths = write_enhanced_files(&batch.results, dir.path()).expect("write");

        assert_eq!(paths, vec![dir.path().join("chair_enhanced.jpg")]);
        let written = std::fs::read(&paths[0]).expect("read back");
        assert_eq!(written, batch.results[0].enhanced_bytes);
    }

    /// The comparison view carries both payloads and captioned strengths.
    #[test]
    fn builds_comparison_preview() {
        let batch = EnhancementEngine::with_defaults()
            .enhance_images(&[png_source("dark.png", &uniform(24, 24, 50))])
            .expect("batch");

        let preview = comparison_preview(&batch.results[0]);
        assert_eq!(preview.before, batch.results[0].original_bytes.as_slice());
        assert_eq!(preview.after, batch.results[0].enhanced_bytes.as_slice());
        assert_eq!(preview.improvements[0], "Brightened (20%)");
    }
}
