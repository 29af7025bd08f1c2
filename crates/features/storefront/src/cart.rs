use crate::error::StorefrontError;
use crate::orders::{Order, OrderBook};
use serde::{Deserialize, Serialize};

/// Prices are in the smallest currency unit (poisha).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line; a product already in the cart has its quantity increased instead.
    /// Zero-quantity lines are ignored.
    pub fn add(&mut self, line: CartLine) {
        if line.quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|l| l.product_id == line.product_id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => self.lines.push(line),
        }
    }

    /// Sets the quantity of a product already in the cart; zero removes it.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> Result<(), StorefrontError> {
        if quantity == 0 {
            return if self.remove(product_id) { Ok(()) } else { Err(not_in_cart(product_id)) };
        }
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or_else(|| not_in_cart(product_id))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Returns whether the product was in the cart.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0, |acc, l| acc.saturating_add(l.quantity))
    }

    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.lines.iter().fold(0, |acc, l| acc.saturating_add(l.total()))
    }

    /// Turns the cart into an order for `user_id`, records it and empties the cart.
    ///
    /// The cart is left untouched if recording fails.
    pub fn checkout(&mut self, book: &OrderBook, user_id: &str) -> Result<Order, StorefrontError> {
        if self.is_empty() {
            return Err(StorefrontError::EmptyCart { context: Some(user_id.to_owned().into()) });
        }

        let order = Order::new(self.lines.clone());
        book.add_user_order(user_id, order.clone())?;
        self.clear();

        tracing::info!(user_id, order_id = %order.id, total = order.total, "Order placed");
        Ok(order)
    }
}

fn not_in_cart(product_id: &str) -> StorefrontError {
    StorefrontError::NotFound {
        message: format!("product '{product_id}'").into(),
        context: Some("Cart".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: u64, quantity: u32) -> CartLine {
        CartLine { product_id: id.to_owned(), name: id.to_uppercase(), unit_price: price, quantity }
    }

    #[test]
    fn add_merges_same_product() {
        let mut cart = Cart::new();
        cart.add(line("ssd", 5_000, 1));
        cart.add(line("ssd", 5_000, 2));
        cart.add(line("ram", 3_000, 1));
        cart.add(line("fan", 900, 0));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.subtotal(), 18_000);
    }

    #[test]
    fn set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(line("ssd", 5_000, 1));

        cart.set_quantity("ssd", 3).unwrap();
        assert_eq!(cart.item_count(), 3);

        cart.set_quantity("ssd", 0).unwrap();
        assert!(cart.is_empty());
        assert!(cart.set_quantity("ssd", 1).is_err());
    }
}
