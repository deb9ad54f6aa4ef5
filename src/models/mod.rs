// src/models/mod.rs

pub mod analysis;
pub mod api;
pub mod app;
pub mod notification;

pub use analysis::{
    AnalysisResult, AnalysisStatus, CoreWebVitals, DeviceProfile, PerformanceData, Score,
    ScoreCategory, ScoreError, Scores, UnknownDevice, Vital,
};
pub use api::{AnalysisResponse, ParamsAnalyze, ParamsReport};
pub use app::AppState;
pub use notification::{Notification, NotificationVariant};
