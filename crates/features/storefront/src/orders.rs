//! Per-user order history.
//!
//! Orders live in the client store under [`ORDERS_KEY`] as one JSON object mapping user id to
//! that user's orders, newest first.

use crate::cart::CartLine;
use crate::error::{StorefrontError, StorefrontErrorExt};
use chrono::{DateTime, Utc};
use nshop_domain::constants::ORDERS_KEY;
use nshop_kernel::safe_nanoid;
use nshop_kernel::store::ClientStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// New order stamped now, with a fresh id and the total of its lines.
    #[must_use]
    pub fn new(lines: Vec<CartLine>) -> Self {
        let total = lines.iter().fold(0, |acc: u64, l| acc.saturating_add(l.total()));
        Self { id: safe_nanoid!(), lines, total, placed_at: Utc::now() }
    }
}

type OrderMap = BTreeMap<String, Vec<Order>>;

#[derive(Debug, Clone)]
pub struct OrderBook {
    store: Arc<dyn ClientStore>,
}

impl OrderBook {
    #[must_use]
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// Prepends `order` to the user's history. Other users' histories are left as they were,
    /// including ones written concurrently through the same store.
    pub fn add_user_order(&self, user_id: &str, order: Order) -> Result<(), StorefrontError> {
        let mut order = Some(order);
        let mut outcome = Ok(());

        self.store.update(ORDERS_KEY, &mut |current| {
            let mut all = current.map_or_else(OrderMap::new, decode);
            all.entry(user_id.to_owned()).or_default().insert(0, order.take()?);
            match serde_json::to_string(&all) {
                Ok(encoded) => Some(encoded),
                Err(e) => {
                    outcome = Err(e);
                    None
                },
            }
        });

        outcome.context("Encoding order history")
    }

    /// Newest first; an unknown user has no orders.
    #[must_use]
    pub fn get_user_orders(&self, user_id: &str) -> Vec<Order> {
        self.load().remove(user_id).unwrap_or_default()
    }

    /// A missing or unreadable payload counts as an empty history.
    fn load(&self) -> OrderMap {
        self.store.get(ORDERS_KEY).as_deref().map_or_else(OrderMap::new, decode)
    }
}

fn decode(raw: &str) -> OrderMap {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Discarding unreadable order history");
        OrderMap::new()
    })
}
