//! Booking selection state and the flow that turns it into a request payload.
//!
//! DESIGN
//! ======
//! `BookingStore` is plain owned state with setters. `BookingFlow` wraps a
//! store with the loading/error flags a client renders, and is the only place
//! that builds a `BookingData`. One flow exists per authenticated user in
//! `AppState`; nothing here is global.

pub mod flow;
pub mod store;

pub use flow::{BookingError, BookingFlow, BookingView};
pub use store::{Location, Slot};
