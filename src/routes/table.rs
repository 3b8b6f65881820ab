//! Declarative auth route table.
//!
//! Each entry names the verb, the path (also the CMS path it relays to), the
//! CMS handler it stands for, and whether a bearer JWT is required. The
//! router in `routes::auth_router` interprets the table; nothing here runs.

use crate::cms::Verb;
use crate::cms::users::USERS_PERMISSIONS_SCOPE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Reachable without credentials.
    Public,
    /// Requires a CMS-issued JWT whose principal holds `scope`.
    Jwt { scope: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub method: Verb,
    pub path: &'static str,
    pub handler: &'static str,
    pub auth: AuthMode,
}

const JWT: AuthMode = AuthMode::Jwt { scope: USERS_PERMISSIONS_SCOPE };

const fn route(method: Verb, path: &'static str, handler: &'static str, auth: AuthMode) -> RouteSpec {
    RouteSpec { method, path, handler, auth }
}

pub const AUTH_ROUTES: &[RouteSpec] = &[
    route(Verb::Post, "/auth/send-otp", "auth.sendOtp", AuthMode::Public),
    route(Verb::Post, "/auth/verify-otp", "auth.verifyOtp", AuthMode::Public),
    route(Verb::Post, "/auth/register", "auth.register", AuthMode::Public),
    route(Verb::Post, "/auth/verify-token", "auth.verifyToken", AuthMode::Public),
    route(Verb::Post, "/auth/attendant-login", "auth.attendantLogin", AuthMode::Public),
    route(Verb::Post, "/auth/complete-profile", "auth.completeProfile", JWT),
    route(Verb::Put, "/auth/edit-profile", "auth.editProfile", JWT),
    route(Verb::Post, "/auth/attendant/change-password", "auth.attendantChangePassword", JWT),
];

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
