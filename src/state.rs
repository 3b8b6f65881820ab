//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is the composition root injected into Axum handlers via the
//! `State` extractor. It holds the CMS adapter and one `BookingFlow` per
//! authenticated user. Flows are created lazily, dropped once idle, and live
//! only in memory.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::booking::BookingFlow;
use crate::cms::CmsApi;

/// Clone is required by Axum: all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub cms: Arc<dyn CmsApi>,
    /// CMS origin, used to absolutize upload URLs.
    pub api_url: Arc<str>,
    /// Booking flows keyed by CMS user id.
    pub bookings: Arc<RwLock<HashMap<String, BookingFlow>>>,
}

impl AppState {
    #[must_use]
    pub fn new(cms: Arc<dyn CmsApi>, api_url: &str) -> Self {
        Self { cms, api_url: Arc::from(api_url), bookings: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Run `f` against the caller's flow, creating it on first use.
    ///
    /// A flow left idle by `f` is evicted, so the map holds only users with a
    /// selection or a pending error.
    pub async fn with_booking<R>(&self, user_id: &str, f: impl FnOnce(&mut BookingFlow) -> R) -> R {
        let mut bookings = self.bookings.write().await;
        let flow = bookings
            .entry(user_id.to_owned())
            .or_insert_with(|| BookingFlow::new(user_id));
        let result = f(flow);
        if flow.is_idle() {
            bookings.remove(user_id);
        }
        result
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
