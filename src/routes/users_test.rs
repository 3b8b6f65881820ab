use super::*;
use crate::state::test_helpers;

#[tokio::test]
async fn me_returns_profile_fields() {
    let auth = AuthUser { user: test_helpers::test_user("authenticated"), token: "t".into() };
    let Json(profile) = me(auth).await;
    assert_eq!(profile.username, "alex");
    assert_eq!(profile.email, "alex@example.com");
    assert_eq!(profile.role, "Authenticated");
}
