// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bildwerk-image — Pixel processing for the Bildwerk photo pipeline.
//
// Provides the enhancement engine (downscaling, automatic or manual tonal
// correction, sharpening, JPEG re-encoding with bilingual audit records) and
// the intake gate (resolution/blur/lighting scoring, duplicate detection,
// recompression, thumbnails).

pub mod codec;
pub mod enhance;
pub mod intake;

// Re-export the primary structs so callers can use `bildwerk_image::EnhancementEngine` etc.
pub use enhance::engine::{CancelToken, EnhancementEngine};
pub use intake::gate::IntakeGate;
