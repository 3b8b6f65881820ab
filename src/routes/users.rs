//! User profile routes.

use axum::response::Json;

use super::auth::AuthUser;
use crate::cms::users::UserProfile;

/// `GET /api/users/me`: profile card for the bearer of the token.
pub async fn me(auth: AuthUser) -> Json<UserProfile> {
    Json(UserProfile::from(&auth.user))
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
