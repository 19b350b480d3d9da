//! Lenient decoding of raw catalog records.
//!
//! Upstream catalog feeds are not trusted to type their numbers: a price may
//! arrive as a string, an id as a float, a rating block may be missing.
//! Records decode anyway, with non-numeric `price` and `id` coercing to 0.
//! Only a body that is not the expected JSON shape at all fails the decode.

use crate::FetchError;
use serde::Deserialize;
use serde_json::Value;
use shopfront_commerce::catalog::Product;

#[derive(Debug, Deserialize)]
struct RawProduct {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: String,
    #[serde(default)]
    price: Value,
    #[serde(default)]
    category: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    rating: Option<RawRating>,
}

#[derive(Debug, Deserialize)]
struct RawRating {
    #[serde(default)]
    rate: Value,
    #[serde(default)]
    count: Value,
}

impl RawProduct {
    fn into_product(self) -> Product {
        let mut product = Product::new(
            coerce_i64(&self.id),
            self.title,
            coerce_f64(&self.price),
            self.category,
            self.image,
        );
        if let Some(rating) = self.rating {
            product = product.with_rating(coerce_f64(&rating.rate), coerce_i64(&rating.count));
        }
        product
    }
}

fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn coerce_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Decode a catalog listing body into product records.
pub fn decode_products(body: &str) -> Result<Vec<Product>, FetchError> {
    let raw: Vec<RawProduct> = serde_json::from_str(body)?;
    Ok(raw.into_iter().map(RawProduct::into_product).collect())
}

/// Decode a single-product body.
pub fn decode_product(body: &str) -> Result<Product, FetchError> {
    let raw: RawProduct = serde_json::from_str(body)?;
    Ok(raw.into_product())
}
