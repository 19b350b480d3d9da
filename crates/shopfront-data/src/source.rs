//! The catalog source seam.

use crate::FetchError;
use shopfront_commerce::catalog::Product;

/// Where product records come from.
///
/// Transport is the implementor's business; the core only sees decoded
/// records. The three operations mirror what a storefront needs: the full
/// listing, one category's subset, and a single product by id.
pub trait CatalogSource {
    /// Fetch the full product listing.
    fn products(&self) -> Result<Vec<Product>, FetchError>;

    /// Fetch the products in one category (exact name match).
    fn products_in_category(&self, category: &str) -> Result<Vec<Product>, FetchError>;

    /// Fetch a single product by id.
    fn product(&self, id: i64) -> Result<Product, FetchError>;
}

/// In-memory source over a fixed listing, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    /// Build a source over `products`.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogSource for StaticSource {
    fn products(&self) -> Result<Vec<Product>, FetchError> {
        Ok(self.products.clone())
    }

    fn products_in_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    fn product(&self, id: i64) -> Result<Product, FetchError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::Http {
                status: 404,
                url: format!("products/{id}"),
            })
    }
}
