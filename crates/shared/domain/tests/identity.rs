use nshop_domain::envelope::Envelope;
use nshop_domain::identity::{AuthState, Role, RoleSet, User};
use serde_json::json;

#[test]
fn role_set_allows_members_only() {
    let account = RoleSet::CUSTOMER | RoleSet::ADMIN;
    assert!(account.allows(Role::Customer));
    assert!(account.allows(Role::Admin));
    assert!(!account.allows(Role::Vendor));
}

#[test]
fn user_round_trips_with_lowercase_role() {
    let user: User = serde_json::from_value(json!({
        "id": "u1",
        "name": "Rahim",
        "role": "vendor"
    }))
    .expect("user");
    assert_eq!(user.role, Role::Vendor);
    assert!(user.email.is_none());

    let auth = AuthState::Authenticated(user);
    assert_eq!(auth.user().map(|u| u.id.as_str()), Some("u1"));
    assert!(AuthState::default().is_loading());
}

#[test]
fn envelope_omits_absent_fields() {
    let body = serde_json::to_value(Envelope::completed()).expect("json");
    assert_eq!(body, json!({ "success": true, "message": "Operation completed successfully" }));

    let body = serde_json::to_value(Envelope::file_url("https://cdn/x.mp4")).expect("json");
    assert_eq!(body, json!({ "success": true, "fileUrl": "https://cdn/x.mp4" }));
}
