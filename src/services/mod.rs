pub mod site_audit_service;

pub use site_audit_service::{
    classify, sample_result, AnalysisOutcome, AnalysisService, PendingAnalysis, Session,
    SessionSnapshot, Severity, StubAnalysisService,
};
