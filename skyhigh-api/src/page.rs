use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Form, Router,
};
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer};
use skyhigh_booking::{BookingError, BookingForm, FormEvent};
use std::{fmt, str::FromStr};
use crate::{error::AppError, render::render_page, state::AppState};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormAction {
    /// A date picker or radio button changed
    #[default]
    Update,
    /// "Book Ticket" pressed
    Book,
}

/// Whole-form post. Absent or blank fields keep their initial values.
#[derive(Debug, Default, Deserialize)]
pub struct BookingFormInput {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub departure_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub return_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub outbound: Option<usize>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub inbound: Option<usize>,
    #[serde(default)]
    pub action: FormAction,
}

impl BookingFormInput {
    /// Departure goes first so the return date is clamped against the new bound
    pub fn events(&self) -> Vec<FormEvent> {
        let mut events = Vec::new();

        if let Some(date) = self.departure_date {
            events.push(FormEvent::SetDepartureDate(date));
        }
        if let Some(date) = self.return_date {
            events.push(FormEvent::SetReturnDate(date));
        }
        if let Some(index) = self.outbound {
            events.push(FormEvent::SelectOutbound(index));
        }
        if let Some(index) = self.inbound {
            events.push(FormEvent::SelectInbound(index));
        }
        if self.action == FormAction::Book {
            events.push(FormEvent::Confirm);
        }

        events
    }
}

/// A cleared date picker posts `departure_date=`
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(submit_form))
}

/// GET /
async fn show_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let form = BookingForm::new(state.catalog.as_ref(), state.clock.today());
    let view = form.view(&form.initial_state()?)?;

    Ok(Html(render_page(&state.page_title, &view, None)))
}

/// POST /
/// Replays the submitted form onto a fresh state and re-renders the page.
/// Rejected events are skipped and reported on the page; a booking is never
/// confirmed when any part of the post was rejected.
async fn submit_form(
    State(state): State<AppState>,
    Form(input): Form<BookingFormInput>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let form = BookingForm::new(state.catalog.as_ref(), state.clock.today());
    let events = input.events();
    tracing::debug!("Form submitted with {} events", events.len());

    let mut view = form.view(&form.initial_state()?)?;
    let mut rejected: Vec<BookingError> = Vec::new();

    for event in events {
        if event == FormEvent::Confirm && !rejected.is_empty() {
            continue;
        }
        match form.handle(&view.state, event) {
            Ok(next) => view = next,
            Err(err) => {
                tracing::warn!("Form event {:?} rejected: {}", event, err);
                rejected.push(err);
            }
        }
    }

    if rejected.is_empty() {
        return Ok((StatusCode::OK, Html(render_page(&state.page_title, &view, None))));
    }

    let notice = rejected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Ok((
        StatusCode::BAD_REQUEST,
        Html(render_page(&state.page_title, &view, Some(&notice))),
    ))
}
