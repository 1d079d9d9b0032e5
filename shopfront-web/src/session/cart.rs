//! The in-memory cart.

use serde::{Deserialize, Serialize};
use shared::models::ProductId;
use std::collections::BTreeMap;

/// Product id to quantity; no entry ever holds zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<ProductId, u32>", into = "BTreeMap<ProductId, u32>")]
pub struct Cart {
    items: BTreeMap<ProductId, u32>,
}

impl From<BTreeMap<ProductId, u32>> for Cart {
    fn from(mut items: BTreeMap<ProductId, u32>) -> Self {
        items.retain(|_, quantity| *quantity > 0);
        Self { items }
    }
}

impl From<Cart> for BTreeMap<ProductId, u32> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl Cart {
    /// Increase the quantity of a product, starting from zero.
    pub fn add(&mut self, product: ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let entry = self.items.entry(product).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Overwrite the quantity; zero or negative removes the entry.
    pub fn set(&mut self, product: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.items.remove(&product);
        } else {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            self.items.insert(product, quantity);
        }
    }

    /// Drop a product from the cart.
    pub fn remove(&mut self, product: ProductId) {
        self.items.remove(&product);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Quantity of `product`, zero when absent.
    #[must_use]
    pub fn quantity(&self, product: ProductId) -> u32 {
        self.items.get(&product).copied().unwrap_or(0)
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.values().map(|&quantity| u64::from(quantity)).sum()
    }

    /// Entries in ascending product order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.items
            .iter()
            .map(|(&product, &quantity)| (product, quantity))
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// No products at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart as order lines for checkout.
    #[must_use]
    pub fn to_order_items(&self) -> BTreeMap<ProductId, u32> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates() {
        let mut cart = Cart::default();
        cart.add(5, 2);
        cart.add(5, 3);
        cart.add(7, 1);
        assert_eq!(cart.quantity(5), 5);
        assert_eq!(cart.total_quantity(), 6);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn add_zero_creates_nothing() {
        let mut cart = Cart::default();
        cart.add(5, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn set_non_positive_removes() {
        let mut cart = Cart::default();
        cart.add(1, 4);
        cart.add(2, 4);
        cart.set(1, 0);
        cart.set(2, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn set_overwrites() {
        let mut cart = Cart::default();
        cart.add(1, 4);
        cart.set(1, 9);
        assert_eq!(cart.quantity(1), 9);
    }

    #[test]
    fn set_clamps_huge_quantities() {
        let mut cart = Cart::default();
        cart.set(1, i64::MAX);
        assert_eq!(cart.quantity(1), u32::MAX);
    }

    #[test]
    fn serializes_as_object_with_integer_keys() {
        let mut cart = Cart::default();
        cart.add(12, 1);
        cart.add(3, 2);
        let text = serde_json::to_string(&cart).expect("serialize");
        assert_eq!(text, r#"{"3":2,"12":1}"#);

        let back: Cart = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, cart);
        assert_eq!(back.iter().collect::<Vec<_>>(), vec![(3, 2), (12, 1)]);
    }

    #[test]
    fn deserializing_drops_zero_entries() {
        let cart: Cart = serde_json::from_str(r#"{"1":0,"2":3}"#).expect("deserialize");
        assert_eq!(cart.iter().collect::<Vec<_>>(), vec![(2, 3)]);
    }
}
