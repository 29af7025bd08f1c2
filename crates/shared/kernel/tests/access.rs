use nshop_kernel::domain::identity::{AuthState, Role, User};
use nshop_kernel::security::access::{Access, Shell, check_access};

fn user(role: Role) -> AuthState {
    AuthState::Authenticated(User {
        id: "42".to_owned(),
        name: "Karim".to_owned(),
        email: Some("karim@example.com".to_owned()),
        role,
    })
}

#[test]
fn redirect_only_after_loading_finishes() {
    let mut auth = AuthState::Loading;
    assert_eq!(check_access(&auth, Shell::Admin, "/admin"), Access::Loading);

    auth = AuthState::Anonymous;
    let access = check_access(&auth, Shell::Admin, "/admin");
    assert_eq!(access.redirect(), Some("/admin/login?redirect=%2Fadmin"));
}

#[test]
fn vendor_shell_admits_admins() {
    assert_eq!(check_access(&user(Role::Admin), Shell::Vendor, "/vendor"), Access::Authorized(Role::Admin));
    assert_eq!(
        check_access(&user(Role::Customer), Shell::Vendor, "/vendor"),
        Access::Denied { redirect: None }
    );
}
