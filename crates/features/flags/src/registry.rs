use crate::error::FlagsError;
use fxhash::FxHashMap;
use nshop_domain::config::{FlagMap, FlagsConfig};
use serde::Serialize;

/// One resolved set of flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlagTable(FlagMap);

impl FlagTable {
    /// Unknown features are disabled.
    #[must_use]
    pub fn is_enabled(&self, feature: &str) -> bool {
        self.0.get(feature).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, enabled)| (name.as_str(), *enabled))
    }

    #[must_use]
    pub const fn as_map(&self) -> &FlagMap {
        &self.0
    }
}

impl From<FlagMap> for FlagTable {
    fn from(map: FlagMap) -> Self {
        Self(map)
    }
}

/// Default table plus per-client overrides.
///
/// A client table replaces the default wholesale; features it does not list are off for that
/// client even if the default enables them.
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    default: FlagTable,
    clients: FxHashMap<String, FlagTable>,
}

impl FlagRegistry {
    pub fn from_config(cfg: &FlagsConfig) -> Result<Self, FlagsError> {
        validate_table("default", &cfg.default)?;

        let mut clients = FxHashMap::default();
        for (client, table) in &cfg.clients {
            if client.trim().is_empty() {
                return Err(FlagsError::Config {
                    message: "client id cannot be empty".into(),
                    context: None,
                });
            }
            validate_table(client, table)?;
            clients.insert(client.clone(), FlagTable::from(table.clone()));
        }

        Ok(Self { default: FlagTable::from(cfg.default.clone()), clients })
    }

    /// Table for `client_id`, falling back to the default for unknown or absent ids.
    #[must_use]
    pub fn table_for(&self, client_id: Option<&str>) -> &FlagTable {
        client_id.and_then(|id| self.clients.get(id)).unwrap_or(&self.default)
    }

    #[must_use]
    pub fn is_enabled(&self, client_id: Option<&str>, feature: &str) -> bool {
        self.table_for(client_id).is_enabled(feature)
    }

    #[must_use]
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}

fn validate_table(owner: &str, table: &FlagMap) -> Result<(), FlagsError> {
    if table.keys().any(|name| name.trim().is_empty()) {
        return Err(FlagsError::Config {
            message: "feature name cannot be empty".into(),
            context: Some(format!("table '{owner}'").into()),
        });
    }
    Ok(())
}
