pub mod category;
pub mod device;
pub mod performance;
pub mod result;
pub mod status;
pub mod vitals;

pub use category::{Score, ScoreCategory, ScoreError, Scores};
pub use device::{DeviceProfile, UnknownDevice};
pub use performance::PerformanceData;
pub use result::AnalysisResult;
pub use status::AnalysisStatus;
pub use vitals::{CoreWebVitals, Vital};
