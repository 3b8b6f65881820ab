//! Auth routes: relay to the CMS auth plugin and the bearer-token gate.

use axum::body::Bytes;
use axum::extract::FromRef;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};

use super::table::{AuthMode, RouteSpec};
use crate::cms::users::{USERS_PERMISSIONS_SCOPE, User};
use crate::cms::{Forward, Forwarded};
use crate::state::AppState;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// CMS user resolved from the `Authorization: Bearer` header.
/// Use as a handler parameter to require a users-permissions JWT.
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        authorize(&app_state, USERS_PERMISSIONS_SCOPE, &parts.headers).await
    }
}

pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().trim().to_owned())
        .filter(|token| !token.is_empty())
}

/// Resolve the bearer token with the CMS and check `scope`.
///
/// 401 when the token is missing or rejected, 403 when the principal lacks
/// the scope, 502 when the CMS cannot be asked.
pub async fn authorize(state: &AppState, scope: &str, headers: &HeaderMap) -> Result<AuthUser, StatusCode> {
    let token = bearer_token(headers).ok_or(StatusCode::UNAUTHORIZED)?;

    let user = state
        .cms
        .current_user(&token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "token verification failed");
            StatusCode::BAD_GATEWAY
        })?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if !user.holds_scope(scope) {
        tracing::debug!(user_id = user.id, scope, "principal lacks scope");
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(AuthUser { user, token })
}

// =============================================================================
// RELAY
// =============================================================================

/// Handle one table entry: gate on its auth mode, then relay to the CMS.
pub async fn relay(state: AppState, route: RouteSpec, headers: HeaderMap, body: Bytes) -> Response {
    let bearer = match route.auth {
        AuthMode::Public => bearer_token(&headers),
        AuthMode::Jwt { scope } => match authorize(&state, scope, &headers).await {
            Ok(auth) => Some(auth.token),
            Err(status) => return status.into_response(),
        },
    };

    let request = Forward { verb: route.method, path: route.path, bearer: bearer.as_deref(), body: &body };
    match state.cms.forward(request).await {
        Ok(forwarded) => {
            tracing::info!(
                handler = route.handler,
                method = route.method.as_str(),
                status = forwarded.status,
                "auth route relayed"
            );
            forwarded_response(forwarded)
        }
        Err(e) => {
            tracing::error!(handler = route.handler, error = %e, "auth relay failed");
            (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": "CMS unavailable" }))).into_response()
        }
    }
}

pub(crate) fn forwarded_response(forwarded: Forwarded) -> Response {
    let status = StatusCode::from_u16(forwarded.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, forwarded.body).into_response();
    if let Some(value) = forwarded
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
    {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    response
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
