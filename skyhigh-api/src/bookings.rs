use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use skyhigh_booking::{BookingForm, BookingSummary, FormEvent};
use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub outbound_index: usize,
    pub inbound_index: usize,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/bookings/summary", post(summarize_booking))
}

/// POST /v1/bookings/summary
/// Same render pass as the page: dates are clamped before pricing
async fn summarize_booking(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<BookingSummary>, AppError> {
    let form = BookingForm::new(state.catalog.as_ref(), state.clock.today());

    let view = form.apply_all(
        &form.initial_state()?,
        [
            FormEvent::SetDepartureDate(req.departure_date),
            FormEvent::SetReturnDate(req.return_date),
            FormEvent::SelectOutbound(req.outbound_index),
            FormEvent::SelectInbound(req.inbound_index),
            FormEvent::Confirm,
        ],
    )?;

    let summary = view
        .summary
        .ok_or_else(|| AppError::InternalServerError("Confirmation produced no summary".to_string()))?;

    Ok(Json(summary))
}
