// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Intake screening for seller uploads: per-image quality analysis, duplicate
// detection, and the batch verdict that feeds the enhancement pipeline.

pub mod gate;

pub(crate) mod duplicates;

pub use gate::IntakeGate;
