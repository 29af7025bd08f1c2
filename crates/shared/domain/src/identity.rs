use crate::constants::{ADMIN, CUSTOMER, VENDOR};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Role attached to an authenticated storefront user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
    Vendor,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => CUSTOMER,
            Self::Admin => ADMIN,
            Self::Vendor => VENDOR,
        }
    }
}

bitflags! {
    /// Set of roles a layout admits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct RoleSet: u8 {
        const CUSTOMER = 1 << 0;
        const ADMIN = 1 << 1;
        const VENDOR = 1 << 2;
    }
}

impl RoleSet {
    #[must_use]
    pub fn allows(self, role: Role) -> bool {
        self.contains(role.into())
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        match role {
            Role::Customer => Self::CUSTOMER,
            Role::Admin => Self::ADMIN,
            Role::Vendor => Self::VENDOR,
        }
    }
}

/// Signed-in user as persisted under the `user` store key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

/// What the client currently knows about the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Session restore has not finished yet.
    #[default]
    Loading,
    Anonymous,
    Authenticated(User),
}

impl AuthState {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
