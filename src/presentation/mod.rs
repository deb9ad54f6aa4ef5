//! Read-only projections of an [`AnalysisResult`](crate::models::AnalysisResult)
//! onto display cards and a plain-text report.

pub mod cards;
pub mod report;

pub use cards::{
    device_view, format_metric, metric_cards, score_cards, DeviceView, MetricCard, ScoreCard,
};
pub use report::render_report;
