//! Storefront state core for Shopfront.
//!
//! Two pieces carry the real invariants of the storefront:
//!
//! - **Catalog**: raw product records are projected into display-ready views
//!   with synthesized variants, a three-image gallery, and a demo stock flag;
//!   the pipeline filters and sorts a whole collection into the list a
//!   shopper sees.
//! - **Cart**: a ledger of line items keyed by product id plus chosen
//!   variant, persisted whole to durable storage after every mutation.
//!
//! Everything else — layout, routing, fetch transport — lives outside this
//! crate and calls in with plain data.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_commerce::prelude::*;
//! use shopfront_kv::MemoryStore;
//!
//! // Project a catalog page
//! let views = pipeline::view(&products, &CategorySelection::new(), SortKey::PriceAsc);
//!
//! // Add the first view's default variant to the cart
//! let mut cart = CartLedger::load(MemoryStore::new());
//! let view = &views[0];
//! cart.add(CartItem::from_product(&view.product, view.selected_variant()))?;
//! ```

pub mod error;

pub mod cart;
pub mod catalog;
pub mod pipeline;

pub use error::CommerceError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;

    // Catalog
    pub use crate::catalog::{
        gallery, project, project_by_id, select_default, synthesize, Product, ProductView,
        Rating, Variant, KNOWN_CATEGORIES,
    };

    // Pipeline
    pub use crate::pipeline::{self, CategorySelection, SortKey};

    // Cart
    pub use crate::cart::{CartItem, CartLedger, LineItem, DEFAULT_CART_KEY};
}
