//! Client-side flag provider.
//!
//! A [`FeatureFlags`] starts out loading, resolves its table once when mounted and stays
//! resolved until unmounted. Consumers must treat "loading" and "off" differently: a gated page
//! waits while loading and only redirects once the flag is known to be off.

use crate::registry::{FlagRegistry, FlagTable};
use nshop_domain::constants::CLIENT_ID_KEY;
use nshop_kernel::store::ClientStore;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagStatus {
    Loading,
    Enabled,
    Disabled,
}

#[derive(Debug, Clone)]
pub struct FeatureFlags {
    registry: Arc<FlagRegistry>,
    resolved: Option<Resolved>,
}

#[derive(Debug, Clone)]
struct Resolved {
    client_id: Option<String>,
    table: FlagTable,
}

impl FeatureFlags {
    #[must_use]
    pub const fn new(registry: Arc<FlagRegistry>) -> Self {
        Self { registry, resolved: None }
    }

    /// Resolves the table for the client id stored under `clientId`.
    pub fn mount(&mut self, store: &dyn ClientStore) {
        let client_id = store.get(CLIENT_ID_KEY);
        self.mount_for(client_id.as_deref());
    }

    pub fn mount_for(&mut self, client_id: Option<&str>) {
        let table = self.registry.table_for(client_id).clone();
        tracing::debug!(client_id, "Feature flags resolved");
        self.resolved = Some(Resolved { client_id: client_id.map(ToOwned::to_owned), table });
    }

    /// Drops the resolved table; the provider reports loading again until remounted.
    pub fn unmount(&mut self) {
        self.resolved = None;
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.resolved.is_none()
    }

    /// `false` while loading and for unknown features.
    #[must_use]
    pub fn is_enabled(&self, feature: &str) -> bool {
        self.resolved.as_ref().is_some_and(|r| r.table.is_enabled(feature))
    }

    #[must_use]
    pub fn status(&self, feature: &str) -> FlagStatus {
        match &self.resolved {
            None => FlagStatus::Loading,
            Some(r) if r.table.is_enabled(feature) => FlagStatus::Enabled,
            Some(_) => FlagStatus::Disabled,
        }
    }

    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.resolved.as_ref().and_then(|r| r.client_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nshop_domain::config::{FlagMap, FlagsConfig};
    use nshop_domain::constants::PC_BUILDER;
    use nshop_kernel::store::MemoryStore;

    fn registry() -> Arc<FlagRegistry> {
        let mut cfg = FlagsConfig::default();
        cfg.clients.insert("acme".to_owned(), FlagMap::from([(PC_BUILDER.to_owned(), true)]));
        Arc::new(FlagRegistry::from_config(&cfg).expect("registry"))
    }

    #[test]
    fn loading_until_mounted() {
        let flags = FeatureFlags::new(registry());
        assert!(flags.is_loading());
        assert!(!flags.is_enabled(PC_BUILDER));
        assert_eq!(flags.status(PC_BUILDER), FlagStatus::Loading);
    }

    #[test]
    fn mount_reads_client_id_from_store() {
        let store = MemoryStore::with_entries([(CLIENT_ID_KEY, "acme")]);
        let mut flags = FeatureFlags::new(registry());
        flags.mount(&store);

        assert_eq!(flags.client_id(), Some("acme"));
        assert_eq!(flags.status(PC_BUILDER), FlagStatus::Enabled);
        assert!(!flags.is_enabled("darkMode"));
    }

    #[test]
    fn unknown_client_falls_back_to_default() {
        let mut flags = FeatureFlags::new(registry());
        flags.mount(&MemoryStore::new());
        assert_eq!(flags.status(PC_BUILDER), FlagStatus::Disabled);

        flags.unmount();
        assert!(flags.is_loading());
    }
}
