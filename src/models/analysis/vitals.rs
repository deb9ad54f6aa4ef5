use serde::{Deserialize, Serialize};

// Core Web Vitals for one device profile. A missing metric means "not
// measured" and is kept distinct from a measured zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreWebVitals {
    /// First Contentful Paint, seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcp: Option<f64>,
    /// Largest Contentful Paint, seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lcp: Option<f64>,
    /// Cumulative Layout Shift, unitless.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cls: Option<f64>,
    /// Total Blocking Time, milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tbt: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vital {
    FirstContentfulPaint,
    LargestContentfulPaint,
    CumulativeLayoutShift,
    TotalBlockingTime,
}

impl Vital {
    pub const ALL: [Vital; 4] = [
        Vital::FirstContentfulPaint,
        Vital::LargestContentfulPaint,
        Vital::CumulativeLayoutShift,
        Vital::TotalBlockingTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Vital::FirstContentfulPaint => "First Contentful Paint",
            Vital::LargestContentfulPaint => "Largest Contentful Paint",
            Vital::CumulativeLayoutShift => "Cumulative Layout Shift",
            Vital::TotalBlockingTime => "Total Blocking Time",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Vital::FirstContentfulPaint | Vital::LargestContentfulPaint => "s",
            Vital::CumulativeLayoutShift => "",
            Vital::TotalBlockingTime => "ms",
        }
    }
}

impl CoreWebVitals {
    pub fn get(&self, vital: Vital) -> Option<f64> {
        match vital {
            Vital::FirstContentfulPaint => self.fcp,
            Vital::LargestContentfulPaint => self.lcp,
            Vital::CumulativeLayoutShift => self.cls,
            Vital::TotalBlockingTime => self.tbt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_metrics_stay_missing() {
        let vitals: CoreWebVitals = serde_json::from_str(r#"{"fcp":1.2,"cls":0}"#).unwrap();
        assert_eq!(vitals.get(Vital::FirstContentfulPaint), Some(1.2));
        assert_eq!(vitals.get(Vital::CumulativeLayoutShift), Some(0.0));
        assert_eq!(vitals.get(Vital::LargestContentfulPaint), None);
        assert_eq!(vitals.get(Vital::TotalBlockingTime), None);
    }

    #[test]
    fn absent_metrics_are_not_serialized() {
        let vitals = CoreWebVitals {
            lcp: Some(2.5),
            ..CoreWebVitals::default()
        };
        assert_eq!(serde_json::to_string(&vitals).unwrap(), r#"{"lcp":2.5}"#);
    }
}
