use crate::models::analysis::device::DeviceProfile;
use crate::models::analysis::performance::PerformanceData;
use crate::utils::NormalizedUrl;
use serde::{Deserialize, Serialize};

// One complete analysis, replaced wholesale by the next one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub url: NormalizedUrl,
    pub mobile: PerformanceData,
    pub desktop: PerformanceData,
}

impl AnalysisResult {
    pub fn for_device(&self, device: DeviceProfile) -> &PerformanceData {
        match device {
            DeviceProfile::Mobile => &self.mobile,
            DeviceProfile::Desktop => &self.desktop,
        }
    }
}
