//! Read-only CMS user profile, as resolved from a bearer token.

use serde::{Deserialize, Serialize};

use super::CmsError;

/// Permission scope granted to tokens issued by the CMS users-permissions plugin.
pub const USERS_PERMISSIONS_SCOPE: &str = "users-permissions";

const PUBLIC_ROLE_TYPE: &str = "public";
const DEFAULT_ROLE_NAME: &str = "Authenticated";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(rename = "type")]
    pub role_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
}

impl User {
    #[must_use]
    pub fn role_name(&self) -> &str {
        self.role.as_ref().map_or(DEFAULT_ROLE_NAME, |r| r.name.as_str())
    }

    /// Whether this principal satisfies a route's auth scope.
    ///
    /// Any non-public role issued by users-permissions holds its scope. A
    /// user without a populated role is treated as authenticated.
    #[must_use]
    pub fn holds_scope(&self, scope: &str) -> bool {
        match scope {
            USERS_PERMISSIONS_SCOPE => self
                .role
                .as_ref()
                .is_none_or(|r| !r.role_type.eq_ignore_ascii_case(PUBLIC_ROLE_TYPE)),
            _ => false,
        }
    }
}

/// Map a `GET /api/users/me` reply.
///
/// 401 and 403 mean the CMS rejected the token and yield `Ok(None)`. Any
/// other non-2xx status is an upstream failure.
///
/// # Errors
///
/// Returns `Response` for unexpected statuses and `Parse` when a 2xx body is
/// not a user.
pub fn parse_user_response(status: u16, body: &str) -> Result<Option<User>, CmsError> {
    match status {
        401 | 403 => Ok(None),
        200..=299 => serde_json::from_str(body)
            .map(Some)
            .map_err(|e| CmsError::Parse(e.to_string())),
        _ => Err(CmsError::Response { status, body: body.to_owned() }),
    }
}

/// Profile card payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self { username: user.username.clone(), email: user.email.clone(), role: user.role_name().to_owned() }
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
