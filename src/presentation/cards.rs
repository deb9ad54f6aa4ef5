use crate::models::{AnalysisResult, DeviceProfile, PerformanceData, Score, ScoreCategory, Vital};
use crate::services::{classify, Severity};
use crate::utils::NormalizedUrl;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub category: ScoreCategory,
    pub label: &'static str,
    pub score: Score,
    pub severity: Severity,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

pub fn score_cards(data: &PerformanceData) -> Vec<ScoreCard> {
    data.scores
        .iter()
        .map(|(category, score)| {
            let severity = classify(score);
            ScoreCard {
                category,
                label: category.label(),
                score,
                severity,
                color: severity.color(),
            }
        })
        .collect()
}

/// Appends `unit` to the value, or "n/a" when it was not measured.
pub fn format_metric(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{}{}", value, unit),
        None => "n/a".to_string(),
    }
}

// Core Web Vitals in display order, followed by load time
pub fn metric_cards(data: &PerformanceData) -> Vec<MetricCard> {
    let mut cards: Vec<MetricCard> = Vital::ALL
        .into_iter()
        .map(|vital| MetricCard {
            label: vital.label(),
            value: format_metric(data.core_web_vitals.get(vital), vital.unit()),
        })
        .collect();
    cards.push(MetricCard {
        label: "Load Time",
        value: format_metric(Some(data.load_time), "s"),
    });
    cards
}

// One device tab as the front-end draws it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceView<'a> {
    pub url: &'a NormalizedUrl,
    pub device: DeviceProfile,
    pub scores: Vec<ScoreCard>,
    pub metrics: Vec<MetricCard>,
    pub suggestions: &'a [String],
}

pub fn device_view(result: &AnalysisResult, device: DeviceProfile) -> DeviceView<'_> {
    let data = result.for_device(device);
    DeviceView {
        url: &result.url,
        device,
        scores: score_cards(data),
        metrics: metric_cards(data),
        suggestions: &data.suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoreWebVitals, Scores};
    use crate::services::sample_result;
    use crate::utils::normalize_url;

    fn data() -> PerformanceData {
        PerformanceData {
            scores: Scores::new(95, 72, 49, 90).unwrap(),
            core_web_vitals: CoreWebVitals {
                fcp: Some(1.2),
                lcp: None,
                cls: Some(0.0),
                tbt: Some(150.0),
            },
            load_time: 3.2,
            suggestions: vec!["Reduce unused JavaScript".to_string()],
        }
    }

    #[test]
    fn every_category_uses_the_same_bands() {
        let severities: Vec<_> = score_cards(&data()).iter().map(|c| c.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Excellent,
                Severity::NeedsWork,
                Severity::Poor,
                Severity::Excellent
            ]
        );
    }

    #[test]
    fn card_colors_follow_the_band_edges() {
        let edges = PerformanceData {
            scores: Scores::new(90, 89, 50, 49).unwrap(),
            ..data()
        };
        let colors: Vec<_> = score_cards(&edges).iter().map(|c| c.color).collect();
        assert_eq!(colors, vec!["#22c55e", "#eab308", "#eab308", "#ef4444"]);

        let card = &score_cards(&edges)[3];
        assert_eq!(card.label, "Best Practices");
        assert_eq!(card.severity, Severity::Poor);
    }

    #[test]
    fn device_view_serializes_cards_for_the_tab() {
        let result = sample_result(normalize_url("example.com")).unwrap();
        let json = serde_json::to_value(device_view(&result, DeviceProfile::Desktop)).unwrap();

        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["device"], "desktop");
        assert_eq!(json["scores"][0]["category"], "performance");
        assert_eq!(json["scores"][0]["score"], 95);
        assert_eq!(json["scores"][0]["severity"], "excellent");
        assert_eq!(json["scores"][0]["color"], "#22c55e");
        assert_eq!(json["metrics"][3]["value"], "50ms");
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn metric_units() {
        assert_eq!(format_metric(Some(1.2), "s"), "1.2s");
        assert_eq!(format_metric(Some(150.0), "ms"), "150ms");
        assert_eq!(format_metric(Some(0.05), ""), "0.05");
        assert_eq!(format_metric(None, "ms"), "n/a");
    }

    #[test]
    fn unmeasured_vitals_are_not_shown_as_zero() {
        let values: Vec<_> = metric_cards(&data())
            .into_iter()
            .map(|c| (c.label, c.value))
            .collect();
        assert_eq!(
            values,
            vec![
                ("First Contentful Paint", "1.2s".to_string()),
                ("Largest Contentful Paint", "n/a".to_string()),
                ("Cumulative Layout Shift", "0".to_string()),
                ("Total Blocking Time", "150ms".to_string()),
                ("Load Time", "3.2s".to_string()),
            ]
        );
    }
}
