use crate::models::{AnalysisResult, DeviceProfile};
use crate::presentation::cards::{metric_cards, score_cards};
use std::fmt::Write;

/// Plain-text report of one device profile's results.
pub fn render_report(result: &AnalysisResult, device: DeviceProfile) -> String {
    let data = result.for_device(device);
    let mut out = String::new();

    let _ = writeln!(out, "Results for {} ({})", result.url, device);
    let _ = writeln!(out);
    let _ = writeln!(out, "Scores");
    for card in score_cards(data) {
        let _ = writeln!(
            out,
            "  {} {:<16} {:>3}  {}",
            card.severity.icon(),
            card.category.label(),
            card.score.value(),
            card.severity.label()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Metrics");
    for card in metric_cards(data) {
        let _ = writeln!(out, "  {:<26} {}", card.label, card.value);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Suggestions");
    for suggestion in &data.suggestions {
        let _ = writeln!(out, "  - {}", suggestion);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_result;
    use crate::utils::normalize_url;

    #[test]
    fn mobile_report_lists_scores_metrics_and_suggestions() {
        let result = sample_result(normalize_url("example.com")).unwrap();
        let report = render_report(&result, DeviceProfile::Mobile);

        assert!(report.starts_with("Results for https://example.com (mobile)\n"));
        assert!(report.contains("Performance"));
        assert!(report.contains(" 85  Needs Work"));
        assert!(report.contains("Total Blocking Time"));
        assert!(report.contains("150ms"));
        assert!(report.contains("  - Reduce unused JavaScript\n"));
    }

    #[test]
    fn desktop_report_uses_desktop_data() {
        let result = sample_result(normalize_url("example.com")).unwrap();
        let report = render_report(&result, DeviceProfile::Desktop);

        assert!(report.contains("(desktop)"));
        assert!(report.contains(" 95  Excellent"));
        assert!(report.contains("0.8s"));
        assert!(!report.contains("Reduce unused JavaScript"));
    }
}
