//! Durable key-value storage for Shopfront state.
//!
//! The cart ledger persists its whole line-item collection as a single JSON
//! document under one key. This crate provides the storage seam it writes
//! through: the [`KvStore`] trait plus two backends, an in-memory store for
//! tests and demos and a file-backed store for a desktop shell.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_kv::{FileStore, KvStore};
//!
//! let mut store = FileStore::open("state.json")?;
//! store.set("cart", "[]")?;
//! let cart = store.get("cart")?;
//! ```

mod error;
mod file;
mod kv;

pub use error::KvError;
pub use file::FileStore;
pub use kv::{KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KvError, KvStore, MemoryStore};
}
