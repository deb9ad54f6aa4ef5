use crate::models::analysis::{AnalysisResult, AnalysisStatus};
use crate::models::notification::Notification;
use chrono::Utc;
use serde::{Deserialize, Serialize};

// Response for the analyze handler
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalysisResponse {
    pub status: AnalysisStatus,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl AnalysisResponse {
    pub fn new(status: AnalysisStatus, message: impl Into<String>) -> Self {
        AnalysisResponse {
            status,
            message: message.into(),
            timestamp: Utc::now().to_rfc3339(),
            result: None,
            notification: None,
        }
    }

    pub fn with_result(mut self, result: AnalysisResult) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }
}
