use nshop_domain::config::{FlagMap, FlagsConfig};
use nshop_domain::constants::PC_BUILDER;
use nshop_flags::FlagRegistry;
use nshop_flags::gate::GateDecision;
use nshop_flags::provider::FeatureFlags;
use nshop_storefront::builder::{ComponentKind, Part, PcBuilder};
use nshop_storefront::cart::Cart;
use std::sync::Arc;

fn part(id: &str, price: u64) -> Part {
    Part { id: id.to_owned(), name: id.to_uppercase(), price }
}

#[test]
fn select_replaces_previous_choice() {
    let mut builder = PcBuilder::new();
    assert!(builder.select(ComponentKind::Processor, part("r5", 20_000)).is_none());
    let replaced = builder.select(ComponentKind::Processor, part("r7", 32_000));

    assert_eq!(replaced, Some(part("r5", 20_000)));
    assert_eq!(builder.total(), 32_000);
    assert_eq!(builder.selections().count(), 1);
}

#[test]
fn missing_lists_required_categories() {
    let mut builder = PcBuilder::new();
    builder.select(ComponentKind::Processor, part("r5", 20_000));
    builder.select(ComponentKind::Monitor, part("m24", 15_000));

    let missing = builder.missing();
    assert!(!missing.contains(&ComponentKind::Processor));
    assert!(missing.contains(&ComponentKind::Motherboard));
    assert!(!missing.contains(&ComponentKind::Monitor));

    builder.remove(ComponentKind::Processor);
    assert!(builder.missing().contains(&ComponentKind::Processor));

    builder.clear();
    assert_eq!(builder.total(), 0);
}

#[test]
fn build_goes_to_cart() {
    let mut builder = PcBuilder::new();
    builder.select(ComponentKind::Memory, part("ddr5", 8_000));
    builder.select(ComponentKind::Storage, part("nvme", 7_000));

    let mut cart = Cart::new();
    builder.add_to_cart(&mut cart);
    builder.add_to_cart(&mut cart);

    assert_eq!(cart.item_count(), 4);
    assert_eq!(cart.subtotal(), 30_000);
}

#[test]
fn visibility_follows_flag() {
    let mut cfg = FlagsConfig::default();
    cfg.clients.insert("acme".to_owned(), FlagMap::from([(PC_BUILDER.to_owned(), true)]));
    let registry = Arc::new(FlagRegistry::from_config(&cfg).unwrap());

    let mut flags = FeatureFlags::new(Arc::clone(&registry));
    assert_eq!(PcBuilder::visibility(&flags), GateDecision::Wait);

    flags.mount_for(Some("acme"));
    assert_eq!(PcBuilder::visibility(&flags), GateDecision::Render);

    flags.mount_for(None);
    assert_eq!(PcBuilder::visibility(&flags), GateDecision::Redirect("/"));
}
