//! Booking flow: validate the current selection and assemble a `BookingData`.
//!
//! The flow does not submit anything to the CMS. A successful call hands the
//! payload back to the caller and leaves the store empty.

use serde::Serialize;

use super::store::{BookingData, BookingStore, Location, Slot};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Please select a location and slot")]
    MissingSelection,
    #[error("Failed to create booking: {0}")]
    Assembly(String),
}

/// Snapshot of a flow for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingView {
    pub selected_location: Option<Location>,
    pub selected_slot: Option<Slot>,
    pub booking_data: Option<BookingData>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BookingFlow {
    store: BookingStore,
    user_id: String,
    loading: bool,
    error: Option<String>,
}

/// Holds `loading` high for its lifetime and drops it on every exit path.
struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl BookingFlow {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { store: BookingStore::new(), user_id: user_id.into(), loading: false, error: None }
    }

    #[must_use]
    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BookingStore {
        &mut self.store
    }

    #[cfg(test)]
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Nothing selected, no payload, no error: indistinguishable from a new flow.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.store().is_empty() && !self.loading() && self.error().is_none()
    }

    #[must_use]
    pub fn view(&self) -> BookingView {
        let store = self.store();
        BookingView {
            selected_location: store.selected_location().cloned(),
            selected_slot: store.selected_slot().cloned(),
            booking_data: store.booking_data().cloned(),
            loading: self.loading(),
            error: self.error().map(str::to_owned),
        }
    }

    /// Assemble a booking for the selected location and slot.
    ///
    /// Timestamps are passed through unvalidated. On success the payload is
    /// stored, the store is reset, and the payload is returned. On failure
    /// `error` carries the display message and the store is untouched.
    ///
    /// # Errors
    ///
    /// Returns `MissingSelection` when no location or slot is selected, and
    /// `Assembly` when a selected entity has no identifier.
    pub fn create_booking(&mut self, start_time: &str, end_time: &str) -> Result<BookingData, BookingError> {
        let _loading = LoadingGuard::engage(&mut self.loading);
        self.error = None;

        match assemble(&self.store, &self.user_id, start_time, end_time) {
            Ok(data) => {
                self.store.set_booking_data(Some(data.clone()));
                tracing::info!(
                    user_id = %data.user_id,
                    location_id = %data.location_id,
                    slot_id = %data.slot_id,
                    "booking assembled"
                );
                self.store.reset();
                Ok(data)
            }
            Err(err) => {
                tracing::debug!(user_id = %self.user_id, error = %err, "booking rejected");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

fn assemble(store: &BookingStore, user_id: &str, start_time: &str, end_time: &str) -> Result<BookingData, BookingError> {
    let (Some(location), Some(slot)) = (store.selected_location(), store.selected_slot()) else {
        return Err(BookingError::MissingSelection);
    };
    if location.id.trim().is_empty() {
        return Err(BookingError::Assembly("selected location has no identifier".into()));
    }
    if slot.id.trim().is_empty() {
        return Err(BookingError::Assembly("selected slot has no identifier".into()));
    }

    Ok(BookingData {
        slot_id: slot.id.clone(),
        location_id: location.id.clone(),
        start_time: start_time.to_owned(),
        end_time: end_time.to_owned(),
        user_id: user_id.to_owned(),
    })
}

#[cfg(test)]
#[path = "flow_test.rs"]
mod tests;
