//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth routes are mounted from the declarative table under `/api`, at the
//! same paths they relay to on the CMS. Booking, blog, and profile routes sit
//! beside them. CORS and request tracing wrap everything.

pub mod auth;
pub mod blog;
pub mod booking;
pub mod table;
pub mod users;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cms::Verb;
use crate::state::AppState;
use table::AUTH_ROUTES;

/// Mount every entry of the auth table as a relay handler.
fn auth_router() -> Router<AppState> {
    AUTH_ROUTES.iter().fold(Router::new(), |router, spec| {
        let spec = *spec;
        let handler = move |State(state): State<AppState>, headers: HeaderMap, body: Bytes| {
            auth::relay(state, spec, headers, body)
        };
        let method_router = match spec.method {
            Verb::Post => post(handler),
            Verb::Put => put(handler),
        };
        router.route(spec.path, method_router)
    })
}

fn api_router() -> Router<AppState> {
    Router::new()
        .merge(auth_router())
        .route("/blogs/{slug}", get(blog::blog_by_slug))
        .route("/users/me", get(users::me))
        .route(
            "/booking",
            get(booking::get_booking)
                .post(booking::create_booking)
                .delete(booking::reset_booking),
        )
        .route("/booking/location", put(booking::set_location))
        .route("/booking/slot", put(booking::set_slot))
        .route("/booking/window", get(booking::slot_window))
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_router())
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
