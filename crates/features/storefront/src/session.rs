//! Auth session backed by the client store.

use crate::error::{StorefrontError, StorefrontErrorExt};
use nshop_domain::constants::{AUTH_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use nshop_domain::identity::{AuthState, User};
use nshop_kernel::security::access::{Access, Shell, check_access};
use nshop_kernel::store::ClientStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Tokens issued by the upstream on sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub access: String,
    pub refresh: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthSession {
    store: Arc<dyn ClientStore>,
    state: AuthState,
}

impl AuthSession {
    /// A new session is [`AuthState::Loading`] until [`AuthSession::restore`] runs.
    #[must_use]
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store, state: AuthState::Loading }
    }

    /// Reads the persisted session. Without an access token or a readable user the
    /// visitor is anonymous.
    pub fn restore(&mut self) -> &AuthState {
        let token = self.store.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty());
        let user = self.store.get(USER_KEY).and_then(|raw| {
            serde_json::from_str::<User>(&raw)
                .inspect_err(|e| warn!(error = %e, "Ignoring unreadable stored user"))
                .ok()
        });

        self.state = match (token, user) {
            (Some(_), Some(user)) => AuthState::Authenticated(user),
            _ => AuthState::Anonymous,
        };
        debug!(authenticated = self.state.user().is_some(), "Session restored");
        &self.state
    }

    pub fn sign_in(&mut self, tokens: Tokens, user: User) -> Result<(), StorefrontError> {
        let encoded = serde_json::to_string(&user).context("Encoding user")?;

        self.store.set(AUTH_TOKEN_KEY, tokens.access);
        match tokens.refresh {
            Some(refresh) => self.store.set(REFRESH_TOKEN_KEY, refresh),
            None => self.store.remove(REFRESH_TOKEN_KEY),
        }
        self.store.set(USER_KEY, encoded);

        debug!(user_id = %user.id, role = user.role.as_str(), "Signed in");
        self.state = AuthState::Authenticated(user);
        Ok(())
    }

    pub fn sign_out(&mut self) {
        for key in [AUTH_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            self.store.remove(key);
        }
        self.state = AuthState::Anonymous;
    }

    #[must_use]
    pub const fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.user()?;
        self.store.get(AUTH_TOKEN_KEY)
    }

    /// Value for the `Authorization` header sent through the proxy.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {t}"))
    }

    #[must_use]
    pub fn check(&self, shell: Shell, destination: &str) -> Access {
        check_access(&self.state, shell, destination)
    }
}
