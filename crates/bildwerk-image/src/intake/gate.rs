// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Intake gate — screens seller uploads before enhancement: decoding, focus
// and exposure analysis, resolution and size limits, recompression and
// thumbnails, duplicate detection, and the batch verdict.

use bildwerk_core::config::IntakeLimits;
use bildwerk_core::error::Result;
use bildwerk_core::messages;
use bildwerk_core::types::{
    ImageId, IntakeRecord, IntakeReport, IntakeStatus, IntakeSuggestion, IntakeWarning,
    LightingQuality, Orientation, SourceImage, SuggestionKind, WarningKind, WarningSeverity,
};
use chrono::Utc;
use image::DynamicImage;
use tracing::{debug, info, instrument, warn};

use super::duplicates;
use crate::codec;

/// Listings with fewer images than this get an add-more suggestion.
const MIN_RECOMMENDED_IMAGES: usize = 3;

/// Screens upload batches and produces the intake report.
pub struct IntakeGate {
    limits: IntakeLimits,
}

impl IntakeGate {
    pub fn new(limits: IntakeLimits) -> Self {
        Self { limits }
    }

    /// Gate with the stock limits: 10 images, 640px floor, 2 MB compression
    /// trigger.
    pub fn with_defaults() -> Self {
        Self::new(IntakeLimits::default())
    }

    pub fn limits(&self) -> &IntakeLimits {
        &self.limits
    }

    /// Screen a batch of uploads.
    ///
    /// Never fails: undecodable uploads become warnings instead of records,
    /// and anything beyond the batch cap is dropped.
    #[instrument(skip_all, fields(upload_count = images.len()))]
    pub fn process(&self, images: &[SourceImage]) -> IntakeReport {
        info!(upload_count = images.len(), "Screening upload batch");

        let mut records = Vec::new();
        let mut warnings = Vec::new();

        for (index, image) in images.iter().take(self.limits.max_images).enumerate() {
            match self.check_single(image, index) {
                Ok((record, mut record_warnings)) => {
                    warnings.append(&mut record_warnings);
                    records.push(record);
                }
                Err(err) => {
                    warn!(index, %err, "Upload failed intake");
                    warnings.push(IntakeWarning {
                        kind: WarningKind::Format,
                        severity: WarningSeverity::High,
                        message: messages::decode_failure_warning(index),
                        image_id: None,
                        auto_fixable: false,
                    });
                }
            }
        }

        duplicates::mark_duplicates(&mut records, &mut warnings, self.limits.duplicate_threshold);

        let suggestions = build_suggestions(&records);
        let status = overall_status(&records, &warnings);
        info!(
            record_count = records.len(),
            warning_count = warnings.len(),
            ?status,
            "Intake complete"
        );

        IntakeReport {
            images_received: !records.is_empty(),
            image_count: records.len(),
            status,
            records,
            warnings,
            suggestions,
        }
    }

    /// Analyze one upload into its record plus any per-image warnings.
    #[instrument(skip(self, source), fields(index))]
    fn check_single(
        &self,
        source: &SourceImage,
        index: usize,
    ) -> Result<(IntakeRecord, Vec<IntakeWarning>)> {
        let name = source.resolved_name(index);
        let decoded = codec::decode(&name, &source.bytes)?;
        let (width, height) = (decoded.width(), decoded.height());

        let file_size_mb = source.bytes.len() as f64 / (1024.0 * 1024.0);
        let format = codec::sniff_mime(&source.bytes)
            .unwrap_or("application/octet-stream")
            .to_string();

        let blur_score = blur_score(&decoded);
        let lighting = classify_lighting(&decoded);
        let quality_score =
            intake_quality_score(width, height, blur_score, lighting, file_size_mb, &self.limits);

        let compressed = file_size_mb > self.limits.compression_trigger_mb;
        let compressed_bytes = if compressed {
            Some(codec::encode_jpeg(&decoded, self.limits.compression_quality)?)
        } else {
            None
        };
        let thumbnail = codec::encode_jpeg(
            &decoded.thumbnail(self.limits.thumbnail_edge, self.limits.thumbnail_edge),
            self.limits.compression_quality,
        )?;

        let record = IntakeRecord {
            id: ImageId::new(),
            name,
            width,
            height,
            aspect_ratio: f64::from(width) / f64::from(height),
            orientation: Orientation::from_dimensions(width, height),
            format,
            file_size_mb,
            quality_score,
            blur_score,
            is_blurry: blur_score > self.limits.blur_threshold,
            lighting,
            is_duplicate: false,
            duplicate_of: None,
            compressed,
            compressed_bytes,
            thumbnail,
            content_digest: duplicates::content_digest(&source.bytes),
            perceptual_hash: duplicates::dhash(&decoded),
            checked_at: Utc::now(),
        };
        let warnings = record_warnings(&record, &self.limits);
        debug!(
            name = %record.name,
            quality = record.quality_score,
            blur = record.blur_score,
            "Upload screened"
        );

        Ok((record, warnings))
    }
}

// -- Per-image analysis -------------------------------------------------------

/// Estimate focus from the Laplacian variance of the grayscale image. Sharp
/// detail produces large variance; scores run 0 (sharp) to 100 (featureless).
fn blur_score(image: &DynamicImage) -> f64 {
    let edges = imageproc::filter::laplacian_filter(&image.to_luma8());
    let pixel_count = u64::from(edges.width()) * u64::from(edges.height());
    if pixel_count == 0 {
        return 100.0;
    }

    let mean = edges.pixels().map(|p| f64::from(p.0[0])).sum::<f64>() / pixel_count as f64;
    let variance = edges
        .pixels()
        .map(|p| (f64::from(p.0[0]) - mean).powi(2))
        .sum::<f64>()
        / pixel_count as f64;

    (100.0 - variance / 3.0).clamp(0.0, 100.0)
}

/// Classify exposure from the mean brightness of the RGB channels.
fn classify_lighting(image: &DynamicImage) -> LightingQuality {
    let rgb = image.to_rgb8();
    let pixel_count = u64::from(rgb.width()) * u64::from(rgb.height());
    if pixel_count == 0 {
        return LightingQuality::Poor;
    }

    let total: f64 = rgb
        .pixels()
        .map(|p| (f64::from(p.0[0]) + f64::from(p.0[1]) + f64::from(p.0[2])) / 3.0)
        .sum();
    let mean = total / pixel_count as f64;

    if mean < 60.0 {
        LightingQuality::TooDark
    } else if mean > 200.0 {
        LightingQuality::TooBright
    } else if (100.0..=150.0).contains(&mean) {
        LightingQuality::Excellent
    } else if (80.0..=180.0).contains(&mean) {
        LightingQuality::Good
    } else {
        LightingQuality::Poor
    }
}

/// Composite 0-100 intake score from resolution, focus, exposure, and size.
fn intake_quality_score(
    width: u32,
    height: u32,
    blur_score: f64,
    lighting: LightingQuality,
    file_size_mb: f64,
    limits: &IntakeLimits,
) -> u8 {
    let mut score = 100.0;

    let min_side = width.min(height);
    if min_side < limits.min_resolution {
        score -= 30.0;
    } else if min_side < limits.recommended_resolution {
        score -= 10.0;
    }

    score -= blur_score * 0.5;
    score += f64::from(lighting.score_penalty());

    // Suspiciously small files are usually screenshots or heavy re-saves.
    if file_size_mb < 0.1 {
        score -= 20.0;
    }

    score.round().clamp(0.0, 100.0) as u8
}

/// Findings for one record, in blur, lighting, resolution, size order.
fn record_warnings(record: &IntakeRecord, limits: &IntakeLimits) -> Vec<IntakeWarning> {
    let mut warnings = Vec::new();

    if record.is_blurry {
        warnings.push(IntakeWarning {
            kind: WarningKind::Blur,
            severity: if record.blur_score > 50.0 {
                WarningSeverity::High
            } else {
                WarningSeverity::Medium
            },
            message: messages::blur_warning(),
            image_id: Some(record.id),
            auto_fixable: false,
        });
    }

    if matches!(record.lighting, LightingQuality::TooDark | LightingQuality::TooBright) {
        warnings.push(IntakeWarning {
            kind: WarningKind::Lighting,
            severity: WarningSeverity::Medium,
            message: messages::lighting_warning(record.lighting == LightingQuality::TooDark),
            image_id: Some(record.id),
            auto_fixable: true,
        });
    }

    if record.width.min(record.height) < limits.min_resolution {
        warnings.push(IntakeWarning {
            kind: WarningKind::Resolution,
            severity: WarningSeverity::High,
            message: messages::resolution_warning(
                record.width,
                record.height,
                limits.min_resolution,
            ),
            image_id: Some(record.id),
            auto_fixable: false,
        });
    }

    if record.file_size_mb > limits.max_file_size_mb {
        warnings.push(IntakeWarning {
            kind: WarningKind::Size,
            severity: WarningSeverity::High,
            message: messages::oversize_warning(record.file_size_mb, limits.max_file_size_mb),
            image_id: Some(record.id),
            auto_fixable: false,
        });
    }

    warnings
}

// -- Batch verdict ------------------------------------------------------------

/// Batch-level advice derived from the accepted records.
fn build_suggestions(records: &[IntakeRecord]) -> Vec<IntakeSuggestion> {
    let mut suggestions = Vec::new();

    if records.len() < MIN_RECOMMENDED_IMAGES {
        suggestions.push(IntakeSuggestion {
            kind: SuggestionKind::AddMore,
            message: messages::add_more_suggestion(MIN_RECOMMENDED_IMAGES - records.len()),
            image_ids: Vec::new(),
        });
    }

    let blurry: Vec<ImageId> = records.iter().filter(|r| r.is_blurry).map(|r| r.id).collect();
    if !blurry.is_empty() {
        suggestions.push(IntakeSuggestion {
            kind: SuggestionKind::Retake,
            message: messages::retake_suggestion(blurry.len()),
            image_ids: blurry,
        });
    }

    let duplicated: Vec<ImageId> =
        records.iter().filter(|r| r.is_duplicate).map(|r| r.id).collect();
    if !duplicated.is_empty() {
        suggestions.push(IntakeSuggestion {
            kind: SuggestionKind::RemoveDuplicate,
            message: messages::remove_duplicate_suggestion(duplicated.len()),
            image_ids: duplicated,
        });
    }

    suggestions
}

/// Verdict from the accepted records and every warning raised. More than half
/// the batch carrying critical findings, or no single decent image, sends the
/// batch to review.
fn overall_status(records: &[IntakeRecord], warnings: &[IntakeWarning]) -> IntakeStatus {
    if records.is_empty() {
        return IntakeStatus::Rejected;
    }

    let criticals = warnings
        .iter()
        .filter(|w| w.severity == WarningSeverity::High && !w.auto_fixable)
        .count();
    if criticals as f64 > records.len() as f64 / 2.0 {
        return IntakeStatus::NeedsReview;
    }

    if !records.iter().any(|r| r.quality_score >= 60) {
        return IntakeStatus::NeedsReview;
    }

    IntakeStatus::ReadyForEnhancement
}

// -- Tests --------------------------------------------------------------------
