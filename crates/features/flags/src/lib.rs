//! Feature flag slice.
//!
//! Flags are plain `feature -> bool` tables. The gateway holds one table per client identifier
//! plus a default; a browser session resolves its table once, at mount, and every lookup after
//! that is local. Unknown features are always off.

mod error;
pub mod gate;
pub mod provider;
pub mod registry;
#[cfg(feature = "server")]
mod routes;

pub use crate::error::{FlagsError, FlagsErrorExt};
pub use crate::registry::{FlagRegistry, FlagTable};
#[cfg(feature = "server")]
pub use crate::routes::router;

use nshop_kernel::domain::config::GatewayConfig;
use nshop_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;

/// Flags feature state
#[nshop_derive::nshop_slice]
pub struct Flags {
    pub registry: Arc<FlagRegistry>,
}

/// Initialize the flags feature from configuration.
///
/// # Errors
/// Returns [`FlagsError::Config`] when a table contains an empty feature name or client id.
pub fn init(cfg: &GatewayConfig) -> Result<InitializedSlice, FlagsError> {
    let registry = FlagRegistry::from_config(&cfg.flags).context("Loading flag tables")?;

    tracing::info!(clients = registry.client_count(), "Flags slice initialized");

    Ok(InitializedSlice::new(Flags::new(FlagsInner { registry: Arc::new(registry) })))
}
