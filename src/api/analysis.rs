use crate::error::AnalyzeError;
use crate::models::{AnalysisResponse, AnalysisStatus, AppState, ParamsAnalyze};
use crate::services::{AnalysisOutcome, SessionSnapshot};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use log::{error, info};
use std::sync::Arc;

pub async fn health_handler() -> &'static str {
    "OK"
}

pub async fn result_handler(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot())
}

pub async fn run_analysis_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsAnalyze>,
) -> (StatusCode, Json<AnalysisResponse>) {
    info!("Started analyze handler for url: {:?}", params.url);

    let pending = match state.session.begin(&params.url) {
        Ok(pending) => pending,
        Err(rejected) => return outcome_response(rejected),
    };
    let url = pending.url().clone();

    // The analysis runs on its own task so a client hanging up mid-wait
    // cannot cancel it; the session records the outcome either way
    let task = tokio::task::spawn(pending.run());

    if params.wait {
        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!("Analysis task for {} did not finish: {}", url, err);
                AnalysisOutcome::aborted()
            }
        };
        return outcome_response(outcome);
    }

    (
        StatusCode::ACCEPTED,
        Json(AnalysisResponse::new(
            AnalysisStatus::Loading,
            format!("Analysis of {} started", url),
        )),
    )
}

fn outcome_response(outcome: AnalysisOutcome) -> (StatusCode, Json<AnalysisResponse>) {
    let AnalysisOutcome {
        status,
        notification,
        result,
    } = outcome;

    let (code, mut response) = match result {
        Ok(result) => (
            StatusCode::OK,
            AnalysisResponse::new(status, "Analysis completed successfully").with_result(result),
        ),
        Err(err) => {
            let code = match err {
                AnalyzeError::Validation(_) => StatusCode::BAD_REQUEST,
                AnalyzeError::InFlight => StatusCode::ACCEPTED,
                AnalyzeError::Service(_) => StatusCode::BAD_GATEWAY,
            };
            (code, AnalysisResponse::new(status, err.to_string()))
        }
    };
    if let Some(notification) = notification {
        response = response.with_notification(notification);
    }
    (code, Json(response))
}
