//! Booking routes: the caller's selection store and booking creation.
//!
//! Store handlers require a users-permissions JWT; the CMS user id keys the
//! flow in `AppState`. The flow call runs under the write lock and never
//! awaits while holding it. The slot-window helper is public.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::auth::AuthUser;
use crate::booking::{BookingError, BookingView, Location, Slot};
use crate::datetime::{self, DateTimeError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBookingBody {
    pub start_time: String,
    pub end_time: String,
}

fn flow_key(auth: &AuthUser) -> String {
    auth.user.id.to_string()
}

pub(crate) fn booking_error_to_status(err: &BookingError) -> StatusCode {
    match err {
        BookingError::MissingSelection | BookingError::Assembly(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// `GET /api/booking`: current selection plus loading/error flags.
pub async fn get_booking(State(state): State<AppState>, auth: AuthUser) -> Json<BookingView> {
    Json(state.with_booking(&flow_key(&auth), |flow| flow.view()).await)
}

/// `PUT /api/booking/location`: select a location, or clear it with `null`.
pub async fn set_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(location): Json<Option<Location>>,
) -> Json<BookingView> {
    let view = state
        .with_booking(&flow_key(&auth), |flow| {
            flow.store_mut().set_selected_location(location);
            flow.view()
        })
        .await;
    Json(view)
}

/// `PUT /api/booking/slot`: select a slot, or clear it with `null`.
pub async fn set_slot(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(slot): Json<Option<Slot>>,
) -> Json<BookingView> {
    let view = state
        .with_booking(&flow_key(&auth), |flow| {
            flow.store_mut().set_selected_slot(slot);
            flow.view()
        })
        .await;
    Json(view)
}

/// `POST /api/booking`: assemble a booking from the current selection.
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateBookingBody>,
) -> Response {
    let result = state
        .with_booking(&flow_key(&auth), |flow| flow.create_booking(&body.start_time, &body.end_time))
        .await;

    match result {
        Ok(data) => (StatusCode::CREATED, Json(data)).into_response(),
        Err(err) => {
            let status = booking_error_to_status(&err);
            (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
        }
    }
}

/// `DELETE /api/booking`: clear the selection and any error.
pub async fn reset_booking(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    state
        .with_booking(&flow_key(&auth), |flow| {
            flow.store_mut().reset();
            flow.clear_error();
        })
        .await;
    StatusCode::NO_CONTENT
}

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WindowDisplay {
    pub starts: String,
    pub ends: String,
    pub remaining: String,
}

pub(crate) fn window_display(query: &WindowQuery, now: OffsetDateTime) -> Result<WindowDisplay, DateTimeError> {
    Ok(WindowDisplay {
        starts: datetime::format_date_time(&query.start)?,
        ends: datetime::format_date_time(&query.end)?,
        remaining: datetime::get_time_remaining_str(&query.start, &query.end, now)?,
    })
}

/// `GET /api/booking/window?start=..&end=..`: display strings for a slot window.
pub async fn slot_window(Query(query): Query<WindowQuery>) -> Result<Json<WindowDisplay>, StatusCode> {
    window_display(&query, OffsetDateTime::now_utc())
        .map(Json)
        .map_err(|e| {
            tracing::debug!(error = %e, "invalid slot window");
            StatusCode::BAD_REQUEST
        })
}

#[cfg(test)]
#[path = "booking_test.rs"]
mod tests;
