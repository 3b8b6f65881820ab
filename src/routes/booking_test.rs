use super::*;
use crate::state::test_helpers::{self, VALID_TOKEN};

fn auth() -> AuthUser {
    AuthUser { user: test_helpers::test_user("authenticated"), token: VALID_TOKEN.into() }
}

fn location() -> Location {
    Location { id: "loc-5".into(), name: "North Studio".into(), address: None }
}

fn slot() -> Slot {
    Slot {
        id: "slot-12".into(),
        location_id: Some("loc-5".into()),
        label: Some("10:00".into()),
        start_time: None,
        end_time: None,
    }
}

fn body() -> Json<CreateBookingBody> {
    Json(CreateBookingBody { start_time: "2024-06-01T10:00:00Z".into(), end_time: "2024-06-01T11:00:00Z".into() })
}

#[test]
fn booking_errors_map_to_unprocessable() {
    assert_eq!(booking_error_to_status(&BookingError::MissingSelection), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(booking_error_to_status(&BookingError::Assembly("x".into())), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_booking_starts_empty() {
    let state = test_helpers::test_app_state();
    let Json(view) = get_booking(State(state), auth()).await;
    assert!(view.selected_location.is_none());
    assert!(view.selected_slot.is_none());
    assert!(!view.loading);
}

#[tokio::test]
async fn create_without_selection_is_422_and_records_error() {
    let state = test_helpers::test_app_state();

    let resp = create_booking(State(state.clone()), auth(), body()).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let Json(view) = get_booking(State(state), auth()).await;
    assert_eq!(view.error.as_deref(), Some("Please select a location and slot"));
    assert!(view.booking_data.is_none());
    assert!(!view.loading);
}

#[tokio::test]
async fn full_flow_returns_201_and_resets() {
    let state = test_helpers::test_app_state();

    let Json(view) = set_location(State(state.clone()), auth(), Json(Some(location()))).await;
    assert_eq!(view.selected_location, Some(location()));
    let Json(view) = set_slot(State(state.clone()), auth(), Json(Some(slot()))).await;
    assert_eq!(view.selected_slot, Some(slot()));

    let resp = create_booking(State(state.clone()), auth(), body()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let Json(view) = get_booking(State(state.clone()), auth()).await;
    assert!(view.selected_location.is_none());
    assert!(view.selected_slot.is_none());
    assert!(view.booking_data.is_none());
    assert!(view.error.is_none());
    assert!(state.bookings.read().await.is_empty(), "completed flow is evicted");

    let flow_user = state.with_booking("7", |flow| flow.user_id().to_owned()).await;
    assert_eq!(flow_user, "7");
}

#[tokio::test]
async fn null_body_clears_selection() {
    let state = test_helpers::test_app_state();
    let Json(view) = set_location(State(state.clone()), auth(), Json(Some(location()))).await;
    assert!(view.selected_location.is_some());
    let Json(view) = set_location(State(state), auth(), Json(None)).await;
    assert!(view.selected_location.is_none());
}

#[tokio::test]
async fn reset_clears_selection_and_error() {
    let state = test_helpers::test_app_state();
    let Json(view) = set_slot(State(state.clone()), auth(), Json(Some(slot()))).await;
    assert_eq!(view.selected_slot, Some(slot()));
    let _ = create_booking(State(state.clone()), auth(), body()).await;

    let status = reset_booking(State(state.clone()), auth()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let Json(view) = get_booking(State(state.clone()), auth()).await;
    assert!(view.selected_slot.is_none());
    assert!(view.error.is_none());
    assert!(state.bookings.read().await.is_empty(), "reset flow is evicted");
}

#[test]
fn window_display_formats_bounds_and_remaining() {
    let query = WindowQuery { start: "2020-01-01T00:00:00Z".into(), end: "2020-01-01T01:00:00Z".into() };
    let now = time::macros::datetime!(2020-01-01 00:30:00 UTC);
    let display = window_display(&query, now).unwrap();
    assert_eq!(
        display,
        WindowDisplay {
            starts: "01 Jan 2020, 12:00 AM".into(),
            ends: "01 Jan 2020, 01:00 AM".into(),
            remaining: "0h 30m 0s".into(),
        }
    );
}

#[tokio::test]
async fn slot_window_rejects_bad_timestamps() {
    let query = WindowQuery { start: "soon".into(), end: "later".into() };
    let err = slot_window(Query(query)).await.unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}
