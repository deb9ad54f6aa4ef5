use crate::models::analysis::category::Scores;
use crate::models::analysis::vitals::CoreWebVitals;
use serde::{Deserialize, Serialize};

// Everything measured for a single device profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    #[serde(flatten)]
    pub scores: Scores,
    pub core_web_vitals: CoreWebVitals,
    /// Seconds.
    pub load_time: f64,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_flattened_next_to_metrics() {
        let data = PerformanceData {
            scores: Scores::new(85, 92, 88, 90).unwrap(),
            core_web_vitals: CoreWebVitals {
                fcp: Some(1.2),
                ..CoreWebVitals::default()
            },
            load_time: 3.2,
            suggestions: vec!["Compress images".to_string()],
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["performance"], 85);
        assert_eq!(json["bestPractices"], 90);
        assert_eq!(json["coreWebVitals"]["fcp"], 1.2);
        assert_eq!(json["loadTime"], 3.2);

        let back: PerformanceData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }
}
