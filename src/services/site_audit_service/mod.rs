// src/services/site_audit_service/mod.rs

pub mod compute;
pub mod service;
pub mod session;

pub use compute::{classify, Severity};
pub use service::{sample_result, AnalysisService, StubAnalysisService};
pub use session::{AnalysisOutcome, PendingAnalysis, Session, SessionSnapshot};
