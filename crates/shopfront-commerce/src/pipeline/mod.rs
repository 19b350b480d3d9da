//! Catalog pipeline: filter, sort, project.
//!
//! The UI calls [`view`] whenever any of its inputs change; there is no
//! reactive re-derivation behind the scenes. Filtering and sorting run over
//! the raw records, and each survivor is projected with its index in the
//! final displayed order.

mod filter;
mod sort;

pub use filter::CategorySelection;
pub use sort::SortKey;

use crate::catalog::{project, Product, ProductView};

/// Derive the ordered list of views to display.
///
/// Filter (empty selection keeps everything), then a stable sort by
/// `sort_key`, then projection — the index handed to the stock rule is the
/// position in the post-filter, post-sort sequence. Never mutates the input
/// and never fails: unknown sort keys have already degraded to relevance.
pub fn view(
    products: &[Product],
    selection: &CategorySelection,
    sort_key: SortKey,
) -> Vec<ProductView> {
    let filtered = filter::apply(products, selection);
    let sorted = sort_key.apply(&filtered);
    sorted
        .iter()
        .enumerate()
        .map(|(index, product)| project(product, index))
        .collect()
}
