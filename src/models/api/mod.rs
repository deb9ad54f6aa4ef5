pub mod params;
pub mod response;

pub use params::{ParamsAnalyze, ParamsReport};
pub use response::AnalysisResponse;
