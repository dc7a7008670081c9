// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancement pipeline — photometric analysis, per-pixel operators, and the
// sequential batch engine.

pub mod engine;

pub(crate) mod analysis;
pub(crate) mod ops;

pub use engine::{CancelToken, EnhancementEngine};
