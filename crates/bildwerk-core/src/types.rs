// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Bildwerk photo pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::messages::BilingualText;

/// Unique identifier for an image travelling through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub Uuid);

impl ImageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An input image: raw encoded bytes plus an optional client-supplied name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceImage {
    pub name: Option<String>,
    pub bytes: Vec<u8>,
}

impl SourceImage {
    pub fn named(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: Some(name.into()),
            bytes,
        }
    }

    pub fn unnamed(bytes: Vec<u8>) -> Self {
        Self { name: None, bytes }
    }

    /// Client name, or a positional fallback for nameless uploads.
    pub fn resolved_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("image_{index}.jpg"))
    }
}

// -- Enhancement records ------------------------------------------------------

/// The adjustment families the engine can apply to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancementKind {
    Brightness,
    Contrast,
    Saturation,
    Sharpen,
    Resize,
    BackgroundRemoval,
}

/// Audit record of one adjustment actually applied to an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enhancement {
    #[serde(rename = "type")]
    pub kind: EnhancementKind,
    /// Magnitude of the adjustment on a 0-100 scale.
    pub strength: f64,
    pub description: BilingualText,
}

/// Outcome of enhancing a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedImageResult {
    /// Client name of the source image (positional fallback for nameless uploads).
    pub source_name: String,
    /// The input bytes, passed through untouched.
    pub original_bytes: Vec<u8>,
    /// The re-encoded JPEG output.
    pub enhanced_bytes: Vec<u8>,
    /// Adjustments in application order, at most one entry per kind.
    pub enhancements_applied: Vec<Enhancement>,
    pub before_quality_score: u8,
    pub after_quality_score: u8,
    pub file_size_before: u64,
    pub file_size_after: u64,
    pub improvement_summary: BilingualText,
}

/// Outcome of one batch call, index-aligned with the submitted images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEnhancementResult {
    pub results: Vec<EnhancedImageResult>,
    /// Sum of per-image score deltas; negative when enhancement hurt overall.
    pub total_improvements: i32,
    pub processing_time_ms: u64,
}

// -- Intake records -----------------------------------------------------------

/// Exposure classification derived from mean image brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingQuality {
    Excellent,
    Good,
    Poor,
    TooDark,
    TooBright,
}

impl LightingQuality {
    /// Penalty this classification contributes to the intake quality score.
    pub fn score_penalty(&self) -> i32 {
        match self {
            Self::Excellent => 0,
            Self::Good => -5,
            Self::Poor => -20,
            Self::TooDark => -30,
            Self::TooBright => -25,
        }
    }
}

/// Shape classification of an image frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    Landscape,
    Square,
}

impl Orientation {
    /// Classify from pixel dimensions. Near-unity aspect ratios count as square.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        let ratio = width as f64 / height as f64;
        if (ratio - 1.0).abs() < 0.1 {
            Self::Square
        } else if ratio > 1.0 {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Overall verdict of an intake pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStatus {
    ReadyForEnhancement,
    NeedsReview,
    Rejected,
}

/// What an intake warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    Blur,
    Lighting,
    Resolution,
    Duplicate,
    Size,
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Low,
    Medium,
    High,
}

/// A quality finding attached to one intake image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub severity: WarningSeverity,
    pub message: BilingualText,
    /// None when the image failed before a record could be created.
    pub image_id: Option<ImageId>,
    /// Whether downstream enhancement can correct the finding without a reshoot.
    pub auto_fixable: bool,
}

/// Advice the gate issues about the batch as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    AddMore,
    Retake,
    Reorder,
    RemoveDuplicate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub message: BilingualText,
    pub image_ids: Vec<ImageId>,
}

/// Everything the intake gate learned about one accepted image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub id: ImageId,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
    pub orientation: Orientation,
    /// MIME type sniffed from the encoded bytes.
    pub format: String,
    pub file_size_mb: f64,
    /// Composite 0-100 score combining resolution, focus, lighting, and size checks.
    pub quality_score: u8,
    /// 0-100, higher means blurrier.
    pub blur_score: f64,
    pub is_blurry: bool,
    pub lighting: LightingQuality,
    pub is_duplicate: bool,
    pub duplicate_of: Option<ImageId>,
    pub compressed: bool,
    /// Recompressed JPEG, present when the upload exceeded the compression trigger.
    pub compressed_bytes: Option<Vec<u8>>,
    /// Small JPEG preview.
    pub thumbnail: Vec<u8>,
    /// SHA-256 of the uploaded bytes, hex encoded.
    pub content_digest: String,
    /// 64-bit difference hash of the decoded pixels.
    pub perceptual_hash: u64,
    pub checked_at: DateTime<Utc>,
}

/// Outcome of one intake pass over a batch of uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeReport {
    pub images_received: bool,
    /// Number of uploads that produced a record.
    pub image_count: usize,
    pub status: IntakeStatus,
    pub records: Vec<IntakeRecord>,
    pub warnings: Vec<IntakeWarning>,
    pub suggestions: Vec<IntakeSuggestion>,
}

impl IntakeReport {
    /// Seller-facing banner for this report's verdict.
    pub fn banner(&self) -> BilingualText {
        crate::messages::intake_banner(self.status, self.image_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_classification() {
        assert_eq!(Orientation::from_dimensions(100, 100), Orientation::Square);
        // 1.05 ratio is still within the square tolerance.
        assert_eq!(Orientation::from_dimensions(105, 100), Orientation::Square);
        assert_eq!(
            Orientation::from_dimensions(200, 100),
            Orientation::Landscape
        );
        assert_eq!(
            Orientation::from_dimensions(100, 200),
            Orientation::Portrait
        );
    }

    #[test]
    fn resolved_name_falls_back_to_position() {
        let named = SourceImage::named("chair.png", vec![1, 2, 3]);
        assert_eq!(named.resolved_name(4), "chair.png");

        let unnamed = SourceImage::unnamed(vec![1, 2, 3]);
        assert_eq!(unnamed.resolved_name(4), "image_4.jpg");
    }

    #[test]
    fn enhancement_kind_serializes_snake_case() {
        let json = serde_json::to_string(&EnhancementKind::BackgroundRemoval)
            .expect("serializable");
        assert_eq!(json, "\"background_removal\"");
    }

    #[test]
    fn lighting_penalties_match_banding() {
        assert_eq!(LightingQuality::Excellent.score_penalty(), 0);
        assert_eq!(LightingQuality::TooDark.score_penalty(), -30);
        assert_eq!(LightingQuality::TooBright.score_penalty(), -25);
    }
}
