use serde::{Deserialize, Serialize};
use std::fmt;

// Session status: idle -> loading -> success | error
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            AnalysisStatus::Idle => "idle",
            AnalysisStatus::Loading => "loading",
            AnalysisStatus::Success => "success",
            AnalysisStatus::Error => "error",
        };
        write!(f, "{}", status_str)
    }
}
