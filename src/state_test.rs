use super::*;
use crate::booking::{Location, Slot};

fn slot() -> Slot {
    Slot { id: "s".into(), location_id: None, label: None, start_time: None, end_time: None }
}

#[tokio::test]
async fn new_state_has_no_flows() {
    let state = test_helpers::test_app_state();
    assert!(state.bookings.read().await.is_empty());
    assert_eq!(&*state.api_url, "http://cms.test");
}

#[tokio::test]
async fn with_booking_creates_flow_bound_to_user() {
    let state = test_helpers::test_app_state();
    let user_id = state
        .with_booking("42", |flow| {
            flow.store_mut().set_selected_slot(Some(slot()));
            flow.user_id().to_owned()
        })
        .await;
    assert_eq!(user_id, "42");
    assert_eq!(state.bookings.read().await.len(), 1);
}

#[tokio::test]
async fn idle_flows_are_not_retained() {
    let state = test_helpers::test_app_state();
    let user_id = state.with_booking("42", |flow| flow.user_id().to_owned()).await;
    assert_eq!(user_id, "42");
    assert!(state.bookings.read().await.is_empty());
}

#[tokio::test]
async fn reset_evicts_flow() {
    let state = test_helpers::test_app_state();
    state.with_booking("5", |flow| flow.store_mut().set_selected_slot(Some(slot()))).await;
    assert!(state.bookings.read().await.contains_key("5"));

    state.with_booking("5", |flow| flow.store_mut().reset()).await;
    assert!(!state.bookings.read().await.contains_key("5"));
}

#[tokio::test]
async fn pending_error_keeps_flow() {
    let state = test_helpers::test_app_state();
    let failed = state.with_booking("3", |flow| flow.create_booking("a", "b").is_err()).await;
    assert!(failed);
    let error = state.with_booking("3", |flow| flow.view().error).await;
    assert_eq!(error.as_deref(), Some("Please select a location and slot"));
}

#[tokio::test]
async fn with_booking_keeps_flows_separate_per_user() {
    let state = test_helpers::test_app_state();
    state
        .with_booking("1", |flow| {
            flow.store_mut()
                .set_selected_location(Some(Location { id: "loc".into(), name: String::new(), address: None }));
        })
        .await;

    let other_empty = state.with_booking("2", |flow| flow.store().is_empty()).await;
    let first_kept = state
        .with_booking("1", |flow| flow.store().selected_location().is_some())
        .await;

    assert!(other_empty);
    assert!(first_kept);
}

#[tokio::test]
async fn clones_share_booking_map() {
    let state = test_helpers::test_app_state();
    let clone = state.clone();
    clone
        .with_booking("9", |flow| {
            flow.store_mut().set_selected_slot(Some(slot()));
        })
        .await;
    let seen = state.with_booking("9", |flow| flow.store().selected_slot().is_some()).await;
    assert!(seen);
}
