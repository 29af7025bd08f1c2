//! PC builder: pick one part per component category and send the build to the cart.

use crate::cart::{Cart, CartLine};
use nshop_domain::constants::PC_BUILDER;
use nshop_flags::gate::{GateDecision, gate};
use nshop_flags::provider::FeatureFlags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Processor,
    Motherboard,
    Memory,
    Storage,
    GraphicsCard,
    PowerSupply,
    Case,
    Cooler,
    Monitor,
}

impl ComponentKind {
    /// Categories a build cannot go without.
    pub const REQUIRED: [Self; 6] = [
        Self::Processor,
        Self::Motherboard,
        Self::Memory,
        Self::Storage,
        Self::PowerSupply,
        Self::Case,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub price: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcBuilder {
    slots: BTreeMap<ComponentKind, Part>,
}

impl PcBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the builder page should render, wait or send the visitor home.
    #[must_use]
    pub fn visibility(flags: &FeatureFlags) -> GateDecision {
        gate(flags, PC_BUILDER)
    }

    /// Puts `part` in its slot and returns whatever it replaced.
    pub fn select(&mut self, kind: ComponentKind, part: Part) -> Option<Part> {
        self.slots.insert(kind, part)
    }

    pub fn remove(&mut self, kind: ComponentKind) -> Option<Part> {
        self.slots.remove(&kind)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    #[must_use]
    pub fn selection(&self, kind: ComponentKind) -> Option<&Part> {
        self.slots.get(&kind)
    }

    /// Selected parts in category order.
    pub fn selections(&self) -> impl Iterator<Item = (ComponentKind, &Part)> {
        self.slots.iter().map(|(kind, part)| (*kind, part))
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.slots.values().fold(0, |acc, p| acc.saturating_add(p.price))
    }

    /// Required categories still empty.
    #[must_use]
    pub fn missing(&self) -> Vec<ComponentKind> {
        ComponentKind::REQUIRED.into_iter().filter(|k| !self.slots.contains_key(k)).collect()
    }

    /// Adds one unit of every selected part to `cart`.
    pub fn add_to_cart(&self, cart: &mut Cart) {
        for part in self.slots.values() {
            cart.add(CartLine {
                product_id: part.id.clone(),
                name: part.name.clone(),
                unit_price: part.price,
                quantity: 1,
            });
        }
    }
}
