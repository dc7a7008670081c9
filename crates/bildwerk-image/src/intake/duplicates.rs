// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content fingerprints for duplicate detection: exact SHA-256 digests plus a
// 64-bit difference hash for perceptual near-duplicates.

use bildwerk_core::messages;
use bildwerk_core::types::{IntakeRecord, IntakeWarning, WarningKind, WarningSeverity};
use image::DynamicImage;
use image::imageops::FilterType;
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the raw upload bytes.
pub(crate) fn content_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// 64-bit difference hash: shrink to a 9x8 grayscale grid and emit one bit
/// per horizontally adjacent pair, set when the left sample is darker.
/// Robust against re-encodes, scaling, and small exposure shifts.
pub(crate) fn dhash(image: &DynamicImage) -> u64 {
    let grid = image::imageops::resize(&image.to_luma8(), 9, 8, FilterType::Triangle);
    let mut hash = 0u64;
    for y in 0..8 {
        for x in 0..8 {
            hash <<= 1;
            if grid.get_pixel(x, y).0[0] < grid.get_pixel(x + 1, y).0[0] {
                hash |= 1;
            }
        }
    }
    hash
}

/// Fraction of matching bits between two difference hashes, 0.0..=1.0.
pub(crate) fn similarity(a: u64, b: u64) -> f64 {
    1.0 - f64::from((a ^ b).count_ones()) / 64.0
}

/// Mark records that duplicate an earlier one. A byte-identical digest is
/// always a duplicate; otherwise the perceptual similarity must reach
/// `threshold`. The earliest record stays authoritative and every matching
/// pair raises its own warning.
pub(crate) fn mark_duplicates(
    records: &mut [IntakeRecord],
    warnings: &mut Vec<IntakeWarning>,
    threshold: f64,
) {
    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let exact = records[i].content_digest == records[j].content_digest;
            let score = similarity(records[i].perceptual_hash, records[j].perceptual_hash);
            if exact || score >= threshold {
                records[j].is_duplicate = true;
                records[j].duplicate_of = Some(records[i].id);
                warnings.push(IntakeWarning {
                    kind: WarningKind::Duplicate,
                    severity: WarningSeverity::Medium,
                    message: messages::duplicate_warning(j, i),
                    image_id: Some(records[j].id),
                    auto_fixable: true,
                });
            }
        }
    }
}

// -- Tests --------------------------------------------------------------------
