//! Catalog source boundary for Shopfront.
//!
//! The core never talks to a transport directly: a [`CatalogSource`] hands
//! it product records, this crate decodes them leniently (malformed numeric
//! fields coerce to 0 instead of failing the record), and a
//! [`CatalogLoader`] tracks the one in-flight request so a result that was
//! superseded by a newer query is discarded rather than merged.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_data::{CatalogLoader, CatalogQuery, LoadState};
//!
//! let mut loader = CatalogLoader::new();
//! let ticket = loader.begin(CatalogQuery::All);
//! // ... the shell performs the fetch, then:
//! loader.resolve(ticket, source.products());
//! if let LoadState::Ready(products) = loader.state() { /* render */ }
//! ```

mod decode;
mod error;
mod loader;
mod source;

pub use decode::{decode_product, decode_products};
pub use error::FetchError;
pub use loader::{CatalogLoader, CatalogQuery, LoadState, RequestTicket};
pub use source::{CatalogSource, StaticSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        decode_product, decode_products, CatalogLoader, CatalogQuery, CatalogSource, FetchError,
        LoadState, RequestTicket, StaticSource,
    };
}
