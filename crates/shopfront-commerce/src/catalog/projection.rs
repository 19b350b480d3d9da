//! Projection of raw products into display-ready views.

use crate::catalog::{select_default, synthesize, Product, Variant};
use serde::{Deserialize, Serialize};

/// Number of images in a projected gallery.
pub const GALLERY_LEN: usize = 3;

/// Display-ready form of a product record.
///
/// Self-consistent by construction: the gallery always has [`GALLERY_LEN`]
/// entries and the variant list is never empty. `in_stock` is the demo stock
/// flag for the product as a whole; it is independent of per-variant
/// availability and the two must not be collapsed — a product can be in
/// stock while its selected variant is unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductView {
    /// The underlying record.
    pub product: Product,
    /// Gallery image URLs.
    pub images: Vec<String>,
    /// Synthesized purchasable variants.
    pub variants: Vec<Variant>,
    /// Whether the product as a whole is in stock.
    pub in_stock: bool,
}

impl ProductView {
    /// The variant the UI should pre-select (first available, else first).
    pub fn selected_variant(&self) -> Option<&Variant> {
        select_default(&self.variants)
    }

    /// Whether `variant` can actually be added to the cart from this view.
    pub fn purchasable(&self, variant: &Variant) -> bool {
        self.in_stock && variant.available
    }
}

/// Build the three-image gallery for a product.
///
/// The catalog source carries a single image per product; the extra entries
/// are cache-busting variations of it, simulating a multi-image gallery.
pub fn gallery(product: &Product) -> Vec<String> {
    let base = &product.image;
    vec![base.clone(), format!("{base}?v=2"), format!("{base}?v=3")]
}

/// Project a product at its position in a displayed list.
///
/// Every 7th position (including the first) is out of stock. Stock status
/// following display position rather than product identity is intentional:
/// the same product can flip status between differently filtered pages.
pub fn project(product: &Product, index: usize) -> ProductView {
    build(product, index % 7 != 0)
}

/// Project a product outside any list, e.g. on a detail page, where only
/// the id is available for the stock rule.
pub fn project_by_id(product: &Product) -> ProductView {
    build(product, product.id % 7 != 0)
}

fn build(product: &Product, in_stock: bool) -> ProductView {
    ProductView {
        images: gallery(product),
        variants: synthesize(product),
        in_stock,
        product: product.clone(),
    }
}
