//! Cart ledger and line item types.

use crate::catalog::{Product, Variant};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use shopfront_kv::KvStore;

/// Storage key the ledger persists under by default.
pub const DEFAULT_CART_KEY: &str = "cart";

/// One entry in the cart.
///
/// Identified by `(product_id, variant)` — the same product under two
/// different variant labels (or under `None`) is two distinct entries.
/// Title, price, and image are snapshots taken on the first add of the key
/// and are not refreshed by later adds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier.
    pub product_id: i64,
    /// Chosen variant label, if any.
    pub variant: Option<String>,
    /// Product title at first add.
    pub title: String,
    /// Unit price at first add.
    pub price: f64,
    /// Image URL at first add.
    pub image: String,
    /// Quantity, always >= 1.
    pub qty: u32,
}

impl LineItem {
    fn matches(&self, product_id: i64, variant: Option<&str>) -> bool {
        self.product_id == product_id && self.variant.as_deref() == variant
    }

    /// Line total (unit price times quantity).
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// What the UI hands to [`CartLedger::add`]: the product snapshot plus the
/// chosen variant.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Product identifier.
    pub product_id: i64,
    /// Chosen variant label, if any.
    pub variant: Option<String>,
    /// Product title.
    pub title: String,
    /// Unit price (the variant's price when a variant is chosen).
    pub price: f64,
    /// Image URL.
    pub image: String,
}

impl CartItem {
    /// Build an add payload from a product and an optional chosen variant.
    /// The variant's price overrides the product's base price, matching what
    /// the shopper saw on the selector.
    pub fn from_product(product: &Product, variant: Option<&Variant>) -> Self {
        Self {
            product_id: product.id,
            variant: variant.map(|v| v.label.clone()),
            title: product.title.clone(),
            price: variant.map_or(product.price, |v| v.price),
            image: product.image.clone(),
        }
    }
}

/// The cart: an owned collection of line items with persist-on-mutation.
///
/// All cart mutations go through [`add`](CartLedger::add) and
/// [`remove`](CartLedger::remove) so the merge-by-key and qty >= 1
/// invariants cannot be bypassed. Each successful mutation writes the whole
/// collection to the store before it becomes visible in memory, so a
/// subsequent reader never sees the two out of sync; a failed write leaves
/// the ledger unchanged.
#[derive(Debug)]
pub struct CartLedger<S: KvStore> {
    items: Vec<LineItem>,
    store: S,
    key: String,
}

impl<S: KvStore> CartLedger<S> {
    /// Rehydrate the ledger from `store` under [`DEFAULT_CART_KEY`].
    pub fn load(store: S) -> Self {
        Self::load_from(store, DEFAULT_CART_KEY)
    }

    /// Rehydrate the ledger from `store` under `key`.
    ///
    /// Absent, unreadable, or malformed data all start an empty cart; loading
    /// never fails.
    pub fn load_from(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = match store.get(&key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        };
        Self { items, store, key }
    }

    /// Add an item to the cart.
    ///
    /// An existing entry with the same `(product_id, variant)` key only has
    /// its quantity incremented — the first add's snapshot of title, price,
    /// and image stands. Otherwise a new entry is appended with qty 1.
    pub fn add(&mut self, item: CartItem) -> Result<(), CommerceError> {
        let mut next = self.items.clone();
        if let Some(existing) = next
            .iter_mut()
            .find(|e| e.matches(item.product_id, item.variant.as_deref()))
        {
            existing.qty += 1;
        } else {
            next.push(LineItem {
                product_id: item.product_id,
                variant: item.variant,
                title: item.title,
                price: item.price,
                image: item.image,
                qty: 1,
            });
        }
        self.commit(next)
    }

    /// Remove one unit of the keyed entry.
    ///
    /// Deletes the entry when its quantity is 1, decrements otherwise.
    /// Returns [`CommerceError::ItemNotInCart`] when no entry matches —
    /// callers must not remove speculatively.
    pub fn remove(
        &mut self,
        product_id: i64,
        variant: Option<&str>,
    ) -> Result<(), CommerceError> {
        let pos = self
            .items
            .iter()
            .position(|e| e.matches(product_id, variant))
            .ok_or_else(|| CommerceError::ItemNotInCart(key_label(product_id, variant)))?;

        let mut next = self.items.clone();
        if next[pos].qty == 1 {
            next.remove(pos);
        } else {
            next[pos].qty -= 1;
        }
        self.commit(next)
    }

    /// Current line items, in first-add order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the entry under a key, if present.
    pub fn get(&self, product_id: i64, variant: Option<&str>) -> Option<&LineItem> {
        self.items.iter().find(|e| e.matches(product_id, variant))
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|e| e.qty).sum()
    }

    /// Number of distinct entries.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::total).sum()
    }

    /// Give the storage handle back, e.g. to hand it to another session.
    pub fn into_store(self) -> S {
        self.store
    }

    // Persist first, then swap into memory, keeping the durable copy and the
    // visible state in lockstep.
    fn commit(&mut self, next: Vec<LineItem>) -> Result<(), CommerceError> {
        let raw = serde_json::to_string(&next)?;
        self.store.set(&self.key, &raw)?;
        self.items = next;
        Ok(())
    }
}

fn key_label(product_id: i64, variant: Option<&str>) -> String {
    format!("{}::{}", product_id, variant.unwrap_or("_"))
}
