//! In-memory booking selection: location, slot, and the assembled payload.

use serde::{Deserialize, Serialize};

// =============================================================================
// DATA MODEL
// =============================================================================

/// A bookable site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A bookable time unit at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// Booking request pending submission. Only `BookingFlow` constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingData {
    pub slot_id: String,
    pub location_id: String,
    pub start_time: String,
    pub end_time: String,
    pub user_id: String,
}

// =============================================================================
// STORE
// =============================================================================

/// Current selection. Setters accept `None` and never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingStore {
    selected_location: Option<Location>,
    selected_slot: Option<Slot>,
    booking_data: Option<BookingData>,
}

impl BookingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected_location(&self) -> Option<&Location> {
        self.selected_location.as_ref()
    }

    #[must_use]
    pub fn selected_slot(&self) -> Option<&Slot> {
        self.selected_slot.as_ref()
    }

    #[must_use]
    pub fn booking_data(&self) -> Option<&BookingData> {
        self.booking_data.as_ref()
    }

    pub fn set_selected_location(&mut self, location: Option<Location>) {
        self.selected_location = location;
    }

    pub fn set_selected_slot(&mut self, slot: Option<Slot>) {
        self.selected_slot = slot;
    }

    pub fn set_booking_data(&mut self, data: Option<BookingData>) {
        self.booking_data = data;
    }

    /// Clear location, slot, and payload together.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing is selected and no payload is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_location.is_none() && self.selected_slot.is_none() && self.booking_data.is_none()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
