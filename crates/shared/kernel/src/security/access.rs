//! Role-gated shells.
//!
//! Every protected area of the storefront (account, admin console, vendor console) runs the same
//! check against the current [`AuthState`]. The check is pure: callers decide how to render a
//! denial and whether to follow the redirect.

use crate::domain::identity::{AuthState, Role, RoleSet};

/// A protected layout and the roles it admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shell {
    Account,
    Admin,
    Vendor,
}

impl Shell {
    #[must_use]
    pub const fn allowed(self) -> RoleSet {
        match self {
            Self::Account => RoleSet::CUSTOMER.union(RoleSet::ADMIN),
            Self::Admin => RoleSet::ADMIN,
            Self::Vendor => RoleSet::VENDOR.union(RoleSet::ADMIN),
        }
    }

    #[must_use]
    pub const fn login_path(self) -> &'static str {
        match self {
            Self::Account => "/login",
            Self::Admin => "/admin/login",
            Self::Vendor => "/vendor/login",
        }
    }

    /// Only the admin console sends unauthorized visitors to its login page.
    #[must_use]
    pub const fn redirects_on_denial(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Outcome of [`check_access`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Session restore still running. Render a placeholder, never redirect.
    Loading,
    Authorized(Role),
    Denied { redirect: Option<String> },
}

impl Access {
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized(_))
    }

    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match self {
            Self::Denied { redirect } => redirect.as_deref(),
            _ => None,
        }
    }
}

/// Decides whether `auth` may enter `shell`.
///
/// `destination` is the path the visitor asked for; on an admin denial it is carried through the
/// login page as the `redirect` query parameter.
#[must_use]
pub fn check_access(auth: &AuthState, shell: Shell, destination: &str) -> Access {
    let user = match auth {
        AuthState::Loading => return Access::Loading,
        AuthState::Anonymous => None,
        AuthState::Authenticated(user) => Some(user),
    };

    if let Some(user) = user
        && shell.allowed().allows(user.role)
    {
        return Access::Authorized(user.role);
    }

    let redirect = shell.redirects_on_denial().then(|| {
        format!("{}?redirect={}", shell.login_path(), urlencoding::encode(destination))
    });

    tracing::debug!(?shell, destination, role = ?user.map(|u| u.role), "Access denied");
    Access::Denied { redirect }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::User;

    fn signed_in(role: Role) -> AuthState {
        AuthState::Authenticated(User {
            id: "u1".to_owned(),
            name: "Test".to_owned(),
            email: None,
            role,
        })
    }

    #[test]
    fn loading_never_redirects() {
        for shell in [Shell::Account, Shell::Admin, Shell::Vendor] {
            assert_eq!(check_access(&AuthState::Loading, shell, "/admin/orders"), Access::Loading);
        }
    }

    #[test]
    fn role_table() {
        assert!(check_access(&signed_in(Role::Customer), Shell::Account, "/").is_authorized());
        assert!(check_access(&signed_in(Role::Admin), Shell::Account, "/").is_authorized());
        assert!(!check_access(&signed_in(Role::Vendor), Shell::Account, "/").is_authorized());

        assert!(check_access(&signed_in(Role::Admin), Shell::Admin, "/").is_authorized());
        assert!(!check_access(&signed_in(Role::Customer), Shell::Admin, "/").is_authorized());

        assert!(check_access(&signed_in(Role::Vendor), Shell::Vendor, "/").is_authorized());
        assert!(check_access(&signed_in(Role::Admin), Shell::Vendor, "/").is_authorized());
        assert!(!check_access(&signed_in(Role::Customer), Shell::Vendor, "/").is_authorized());
    }

    #[test]
    fn admin_denial_carries_destination() {
        let access = check_access(&AuthState::Anonymous, Shell::Admin, "/admin/orders?page=2");
        assert_eq!(access.redirect(), Some("/admin/login?redirect=%2Fadmin%2Forders%3Fpage%3D2"));
    }

    #[test]
    fn other_shells_deny_without_redirect() {
        let access = check_access(&signed_in(Role::Customer), Shell::Vendor, "/vendor");
        assert_eq!(access, Access::Denied { redirect: None });
    }
}
