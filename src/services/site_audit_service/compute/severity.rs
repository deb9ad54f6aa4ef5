use serde::{Deserialize, Serialize};
use std::fmt;

pub const EXCELLENT_THRESHOLD: f64 = 90.0;
pub const NEEDS_WORK_THRESHOLD: f64 = 50.0;

// Severity band shared by every score category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Excellent,
    NeedsWork,
    Poor,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Excellent => "Excellent",
            Severity::NeedsWork => "Needs Work",
            Severity::Poor => "Poor",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Excellent => "#22c55e",
            Severity::NeedsWork => "#eab308",
            Severity::Poor => "#ef4444",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Excellent => "✅",
            Severity::NeedsWork => "⚠️",
            Severity::Poor => "❌",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bands a 0-100 score. Anything that is not at least 50 (NaN included)
/// is poor.
pub fn classify(score: impl Into<f64>) -> Severity {
    let score = score.into();
    if score >= EXCELLENT_THRESHOLD {
        Severity::Excellent
    } else if score >= NEEDS_WORK_THRESHOLD {
        Severity::NeedsWork
    } else {
        Severity::Poor
    }
}
