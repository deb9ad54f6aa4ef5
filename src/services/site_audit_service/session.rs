use crate::error::{AnalyzeError, ServiceError, ValidationError};
use crate::models::{AnalysisResult, AnalysisStatus, Notification};
use crate::services::site_audit_service::service::AnalysisService;
use crate::utils::{is_blank, normalize_url, NormalizedUrl};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Everything the user currently sees
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub status: AnalysisStatus,
    pub input: String,
    pub result: Option<AnalysisResult>,
    pub notification: Option<Notification>,
}

/// What a single analyze request produced: the status it moved the session
/// to (or would have), the notification it raised and the result.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub status: AnalysisStatus,
    pub notification: Option<Notification>,
    pub result: Result<AnalysisResult, AnalyzeError>,
}

impl AnalysisOutcome {
    fn rejected(
        status: AnalysisStatus,
        notification: Option<Notification>,
        err: AnalyzeError,
    ) -> Self {
        AnalysisOutcome {
            status,
            notification,
            result: Err(err),
        }
    }

    // A run that never settled, e.g. its task panicked
    pub fn aborted() -> Self {
        AnalysisOutcome::rejected(
            AnalysisStatus::Error,
            Some(Notification::failure()),
            ServiceError::Aborted.into(),
        )
    }
}

/// The single current-result slot plus the input text, status and last
/// notification, shared by every handler.
///
/// Analyses are single-flight: [`Session::begin`] refuses to start while
/// another one is loading. The lock is only held for bookkeeping and never
/// across the service call.
#[derive(Clone)]
pub struct Session {
    service: Arc<dyn AnalysisService>,
    state: Arc<Mutex<SessionSnapshot>>,
}

impl Session {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Session {
            service,
            state: Arc::new(Mutex::new(SessionSnapshot::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().clone()
    }

    pub fn status(&self) -> AnalysisStatus {
        self.lock().status
    }

    pub fn current_result(&self) -> Option<AnalysisResult> {
        self.lock().result.clone()
    }

    /// Validates `raw` and marks the session as loading.
    ///
    /// The returned [`PendingAnalysis`] must be run to settle the session.
    /// A rejection leaves status, input and result untouched.
    pub fn begin(&self, raw: &str) -> Result<PendingAnalysis, AnalysisOutcome> {
        let mut state = self.lock();

        if state.status == AnalysisStatus::Loading {
            warn!("Ignoring analyze request for {:?}: one is already running", raw);
            return Err(AnalysisOutcome::rejected(
                AnalysisStatus::Loading,
                None,
                AnalyzeError::InFlight,
            ));
        }

        if is_blank(raw) {
            let notification = Notification::validation();
            state.notification = Some(notification.clone());
            return Err(AnalysisOutcome::rejected(
                AnalysisStatus::Error,
                Some(notification),
                ValidationError.into(),
            ));
        }

        let url = normalize_url(raw);
        state.input = raw.to_string();
        state.status = AnalysisStatus::Loading;
        info!("Started analysis of {}", url);

        Ok(PendingAnalysis {
            session: self.clone(),
            url,
            settled: false,
        })
    }

    pub async fn analyze(&self, raw: &str) -> Result<AnalysisResult, AnalyzeError> {
        match self.begin(raw) {
            Ok(pending) => pending.run().await.result,
            Err(rejected) => rejected.result,
        }
    }
}

/// An analysis that holds the session's loading flag.
///
/// Dropping it without running (a panicking task, for one) counts as a
/// failed analysis so the session never stays stuck in `loading`.
pub struct PendingAnalysis {
    session: Session,
    url: NormalizedUrl,
    settled: bool,
}

impl PendingAnalysis {
    pub fn url(&self) -> &NormalizedUrl {
        &self.url
    }

    pub async fn run(mut self) -> AnalysisOutcome {
        let outcome = self.session.service.analyze(&self.url).await;
        self.settle(outcome)
    }

    fn settle(&mut self, outcome: Result<AnalysisResult, ServiceError>) -> AnalysisOutcome {
        self.settled = true;
        let mut state = self.session.lock();
        let (status, notification, result) = match outcome {
            Ok(result) => {
                info!("Analysis of {} completed", self.url);
                state.result = Some(result.clone());
                (
                    AnalysisStatus::Success,
                    Notification::success(&self.url),
                    Ok(result),
                )
            }
            Err(err) => {
                error!("Analysis of {} failed: {}", self.url, err);
                (AnalysisStatus::Error, Notification::failure(), Err(err.into()))
            }
        };
        state.status = status;
        state.notification = Some(notification.clone());
        AnalysisOutcome {
            status,
            notification: Some(notification),
            result,
        }
    }
}

impl Drop for PendingAnalysis {
    fn drop(&mut self) {
        if !self.settled {
            let _ = self.settle(Err(ServiceError::Aborted));
        }
    }
}
