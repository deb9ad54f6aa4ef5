use crate::models::{AppState, DeviceProfile, ParamsReport};
use crate::presentation::{device_view, render_report};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

const NO_RESULT: &str = "No analysis has completed yet";

fn requested_device(params: &ParamsReport) -> Result<DeviceProfile, Response> {
    match params.device.as_deref().map(str::parse::<DeviceProfile>) {
        None => Ok(DeviceProfile::default()),
        Some(Ok(device)) => Ok(device),
        Some(Err(err)) => Err((StatusCode::BAD_REQUEST, err.to_string()).into_response()),
    }
}

// Text report for one device tab, mobile unless asked otherwise
pub async fn report_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsReport>,
) -> Response {
    let device = match requested_device(&params) {
        Ok(device) => device,
        Err(response) => return response,
    };

    match state.session.current_result() {
        Some(result) => render_report(&result, device).into_response(),
        None => (StatusCode::NOT_FOUND, NO_RESULT).into_response(),
    }
}

// Score and metric cards (with band colors) for one device tab
pub async fn cards_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsReport>,
) -> Response {
    let device = match requested_device(&params) {
        Ok(device) => device,
        Err(response) => return response,
    };

    match state.session.current_result() {
        Some(result) => Json(device_view(&result, device)).into_response(),
        None => (StatusCode::NOT_FOUND, NO_RESULT).into_response(),
    }
}
