// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bilingual user-facing text for the Thai/English marketplace audience.
//
// Every string shown to a seller lives here, paired Thai-first the way the
// product copy is written. Pipeline code maps domain events to these builders
// and never embeds display text of its own.

use serde::{Deserialize, Serialize};

use crate::types::{EnhancementKind, IntakeStatus};

/// Display language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Th,
    En,
}

/// A Thai/English sentence pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub th: String,
    pub en: String,
}

impl BilingualText {
    pub fn new(th: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            th: th.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Th => &self.th,
            Lang::En => &self.en,
        }
    }
}

// -- Enhancement captions -----------------------------------------------------

/// Bilingual caption for an applied adjustment.
///
/// `delta` is the signed adjustment value and `auto` selects the wording for
/// automatically planned corrections versus manual overrides. Both are
/// ignored for kinds that carry a single caption.
pub fn enhancement_description(kind: EnhancementKind, delta: f64, auto: bool) -> BilingualText {
    match kind {
        EnhancementKind::Resize => {
            BilingualText::new("ปรับขนาดเพื่อความเหมาะสม", "Resized for optimal size")
        }
        EnhancementKind::Brightness if auto && delta > 0.0 => {
            BilingualText::new("เพิ่มความสว่าง", "Brightened")
        }
        EnhancementKind::Brightness if auto => BilingualText::new("ลดความสว่าง", "Darkened"),
        EnhancementKind::Brightness => {
            BilingualText::new("ปรับความสว่าง", "Brightness adjusted")
        }
        EnhancementKind::Contrast if auto => {
            BilingualText::new("ปรับคอนทราสต์", "Adjusted contrast")
        }
        EnhancementKind::Contrast => BilingualText::new("ปรับคอนทราสต์", "Contrast adjusted"),
        EnhancementKind::Saturation if auto => BilingualText::new("ปรับสีสัน", "Enhanced colors"),
        EnhancementKind::Saturation => BilingualText::new("ปรับสีสัน", "Saturation adjusted"),
        EnhancementKind::Sharpen => BilingualText::new("เพิ่มความคมชัด", "Sharpened edges"),
        EnhancementKind::BackgroundRemoval => {
            BilingualText::new("ต้องการโมเดล ML เพิ่มเติม", "Requires additional ML model")
        }
    }
}

/// Summary banner for a per-image quality delta.
pub fn improvement_summary(improvement: i32) -> BilingualText {
    if improvement >= 15 {
        BilingualText::new(
            format!("ปรับปรุงคุณภาพได้อย่างมาก (+{improvement} คะแนน)"),
            format!("Significantly improved (+{improvement} points)"),
        )
    } else if improvement >= 8 {
        BilingualText::new(
            format!("ปรับปรุงคุณภาพได้ดี (+{improvement} คะแนน)"),
            format!("Good improvement (+{improvement} points)"),
        )
    } else if improvement >= 3 {
        BilingualText::new(
            format!("ปรับปรุงเล็กน้อย (+{improvement} คะแนน)"),
            format!("Minor improvement (+{improvement} points)"),
        )
    } else if improvement >= 0 {
        BilingualText::new("รูปมีคุณภาพดีอยู่แล้ว", "Image already has good quality")
    } else {
        BilingualText::new("ไม่แนะนำให้ใช้รูปที่ปรับแต่ง", "Original recommended")
    }
}

// -- Intake warnings ----------------------------------------------------------
// Position arguments are zero-based batch indexes; the rendered text counts
// from one for the seller.

pub fn decode_failure_warning(index: usize) -> BilingualText {
    let position = index + 1;
    BilingualText::new(
        format!("ไม่สามารถประมวลผลรูปภาพที่ {position} ได้"),
        format!("Could not process image {position}"),
    )
}

pub fn blur_warning() -> BilingualText {
    BilingualText::new(
        "รูปภาพเบลอ ควรถ่ายใหม่ให้ชัดกว่านี้",
        "Image is blurry. Consider retaking for better clarity",
    )
}

pub fn lighting_warning(too_dark: bool) -> BilingualText {
    if too_dark {
        BilingualText::new(
            "แสงมืดเกินไป ควรถ่ายในที่มีแสงมากกว่านี้",
            "Too dark. Try shooting in better lighting",
        )
    } else {
        BilingualText::new(
            "แสงสว่างเกินไป ควรหลีกเลี่ยงแสงแดดตรง",
            "Too bright. Avoid direct sunlight",
        )
    }
}

pub fn resolution_warning(width: u32, height: u32, min_side: u32) -> BilingualText {
    BilingualText::new(
        format!("ความละเอียดต่ำ ({width}x{height}) ควร ≥ {min_side}x{min_side}px"),
        format!("Low resolution ({width}x{height}). Should be ≥ {min_side}x{min_side}px"),
    )
}

pub fn oversize_warning(size_mb: f64, max_mb: f64) -> BilingualText {
    BilingualText::new(
        format!("ไฟล์ขนาดใหญ่เกินไป ({size_mb:.1} MB) ไม่ควรเกิน {max_mb:.0} MB"),
        format!("File too large ({size_mb:.1} MB). Should be ≤ {max_mb:.0} MB"),
    )
}

pub fn duplicate_warning(duplicate_index: usize, original_index: usize) -> BilingualText {
    let (dup, orig) = (duplicate_index + 1, original_index + 1);
    BilingualText::new(
        format!("รูปภาพที่ {dup} อาจซ้ำกับรูปที่ {orig}"),
        format!("Image {dup} may be duplicate of image {orig}"),
    )
}

// -- Intake suggestions -------------------------------------------------------

pub fn add_more_suggestion(missing: usize) -> BilingualText {
    BilingualText::new(
        format!("เพิ่มรูปภาพอีก {missing} รูป เพื่อให้ผู้ซื้อเห็นสินค้าได้ชัดเจนขึ้น"),
        format!("Add {missing} more image(s) to help buyers see the product better"),
    )
}

pub fn retake_suggestion(blurry_count: usize) -> BilingualText {
    BilingualText::new(
        format!("ควรถ่ายรูปที่เบลอ {blurry_count} รูป ใหม่"),
        format!("Consider retaking {blurry_count} blurry image(s)"),
    )
}

pub fn remove_duplicate_suggestion(duplicate_count: usize) -> BilingualText {
    BilingualText::new(
        format!("พบรูปซ้ำ {duplicate_count} รูป ควรลบออก"),
        format!("Found {duplicate_count} duplicate image(s). Consider removing"),
    )
}

/// Status banner shown after an intake pass.
pub fn intake_banner(status: IntakeStatus, image_count: usize) -> BilingualText {
    match status {
        IntakeStatus::ReadyForEnhancement => BilingualText::new(
            "เพิ่มรูปได้สูงสุด 10 รูป AI จะช่วยดูแลให้เอง ✨",
            "Upload up to 10 images. AI will handle the rest ✨",
        ),
        IntakeStatus::NeedsReview => BilingualText::new(
            format!("ได้รับ {image_count} รูปแล้ว แต่คุณภาพบางรูปอาจไม่เพียงพอ"),
            format!("Received {image_count} images, but some may need improvement"),
        ),
        IntakeStatus::Rejected => BilingualText::new(
            "ไม่สามารถประมวลผลรูปภาพได้ กรุณาลองใหม่",
            "Could not process images. Please try again",
        ),
    }
}
