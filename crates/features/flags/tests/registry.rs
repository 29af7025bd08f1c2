use nshop_domain::config::{FlagMap, FlagsConfig, GatewayConfig};
use nshop_domain::constants::PC_BUILDER;
use nshop_flags::gate::{GATE_FALLBACK, GateDecision, gate};
use nshop_flags::provider::FeatureFlags;
use nshop_flags::{Flags, FlagRegistry, FlagsError};
use std::sync::Arc;

fn config() -> FlagsConfig {
    let mut cfg = FlagsConfig::default();
    cfg.default.insert("reviews".to_owned(), true);
    cfg.clients.insert("acme".to_owned(), FlagMap::from([(PC_BUILDER.to_owned(), true)]));
    cfg
}

#[test]
fn client_table_replaces_default() {
    let registry = FlagRegistry::from_config(&config()).expect("registry");

    assert!(registry.is_enabled(Some("acme"), PC_BUILDER));
    assert!(!registry.is_enabled(Some("acme"), "reviews"));
    assert!(registry.is_enabled(None, "reviews"));
    assert!(!registry.is_enabled(Some("unknown"), PC_BUILDER));
    assert!(!registry.is_enabled(None, "doesNotExist"));
}

#[test]
fn empty_names_are_rejected() {
    let mut cfg = config();
    cfg.default.insert("  ".to_owned(), true);
    let err = FlagRegistry::from_config(&cfg).expect_err("must fail");
    assert!(matches!(err, FlagsError::Config { .. }));

    let mut cfg = config();
    cfg.clients.insert(String::new(), FlagMap::new());
    assert!(FlagRegistry::from_config(&cfg).is_err());
}

#[test]
fn gate_waits_then_decides() {
    let registry = Arc::new(FlagRegistry::from_config(&config()).expect("registry"));

    let mut flags = FeatureFlags::new(Arc::clone(&registry));
    assert_eq!(gate(&flags, PC_BUILDER), GateDecision::Wait);

    flags.mount_for(Some("acme"));
    assert_eq!(gate(&flags, PC_BUILDER), GateDecision::Render);

    let mut other = FeatureFlags::new(registry);
    other.mount_for(Some("globex"));
    assert_eq!(gate(&other, PC_BUILDER), GateDecision::Redirect(GATE_FALLBACK));
}

#[test]
fn init_creates_slice() {
    let slice = nshop_flags::init(&GatewayConfig::default()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Flags>());
}
