//! Shopping cart module.
//!
//! The ledger of line items keyed by (product id, variant), persisted whole
//! after every mutation.

mod ledger;

pub use ledger::{CartItem, CartLedger, LineItem, DEFAULT_CART_KEY};
