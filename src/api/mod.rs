// src/api/mod.rs

pub mod analysis;
pub mod report;
pub mod router;

pub use analysis::{health_handler, result_handler, run_analysis_handler};
pub use report::{cards_handler, report_handler};
pub use router::build_router;
