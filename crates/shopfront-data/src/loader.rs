//! One-shot catalog request lifecycle.
//!
//! The catalog fetch is the only asynchronous boundary in the system. The
//! loader models it explicitly: the shell calls [`CatalogLoader::begin`]
//! when the query changes, performs the fetch however it likes, and hands
//! the outcome back through [`CatalogLoader::resolve`] with the ticket it
//! got. A ticket from a query that has since been superseded resolves to
//! nothing — stale results are discarded, never merged.

use crate::FetchError;
use shopfront_commerce::catalog::Product;

/// The logical query a fetch answers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogQuery {
    /// The full listing.
    #[default]
    All,
    /// One category's subset.
    Category(String),
}

/// Where the current request stands.
///
/// `Ready(vec![])` is a genuine empty result; a failed fetch stays
/// [`LoadState::Failed`] so the caller can tell the three apart.
#[derive(Debug, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request completed.
    Ready(Vec<Product>),
    /// The last request failed.
    Failed(FetchError),
}

/// Handle identifying one begun request. Resolving with a stale ticket is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// Tracks the single in-flight catalog request and its latest outcome.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    generation: u64,
    query: CatalogQuery,
    state: LoadState,
}

impl CatalogLoader {
    /// A loader that has requested nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `query`, superseding any request still in
    /// flight. State moves to [`LoadState::Loading`].
    pub fn begin(&mut self, query: CatalogQuery) -> RequestTicket {
        self.generation += 1;
        self.query = query;
        self.state = LoadState::Loading;
        RequestTicket {
            generation: self.generation,
        }
    }

    /// Complete the request identified by `ticket`.
    ///
    /// Returns `false` and changes nothing when the ticket was superseded by
    /// a later [`begin`](Self::begin); otherwise stores the outcome and
    /// returns `true`.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Product>, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.state = match result {
            Ok(products) => LoadState::Ready(products),
            Err(e) => LoadState::Failed(e),
        };
        true
    }

    /// The query the current state answers (or is answering).
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Current request state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// The ready listing, if the last request completed.
    pub fn products(&self) -> Option<&[Product]> {
        match &self.state {
            LoadState::Ready(products) => Some(products),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(ids: &[i64]) -> Vec<Product> {
        ids.iter()
            .map(|&id| Product::new(id, "Test", 1.0, "electronics", "https://img/p.jpg"))
            .collect()
    }

    #[test]
    fn test_begin_moves_to_loading() {
        let mut loader = CatalogLoader::new();
        assert!(matches!(loader.state(), LoadState::Idle));
        loader.begin(CatalogQuery::All);
        assert!(loader.is_loading());
    }

    #[test]
    fn test_resolve_stores_result() {
        let mut loader = CatalogLoader::new();
        let ticket = loader.begin(CatalogQuery::All);
        assert!(loader.resolve(ticket, Ok(listing(&[1, 2]))));
        assert_eq!(loader.products().unwrap().len(), 2);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut loader = CatalogLoader::new();
        let stale = loader.begin(CatalogQuery::All);
        let current = loader.begin(CatalogQuery::Category("jewelery".to_string()));

        // The old request lands after the query changed: dropped.
        assert!(!loader.resolve(stale, Ok(listing(&[1, 2, 3]))));
        assert!(loader.is_loading());

        assert!(loader.resolve(current, Ok(listing(&[2]))));
        assert_eq!(loader.products().unwrap().len(), 1);
        assert_eq!(
            loader.query(),
            &CatalogQuery::Category("jewelery".to_string())
        );
    }

    #[test]
    fn test_failure_is_distinguishable_from_empty() {
        let mut loader = CatalogLoader::new();
        let ticket = loader.begin(CatalogQuery::All);
        loader.resolve(ticket, Ok(Vec::new()));
        assert!(matches!(loader.state(), LoadState::Ready(p) if p.is_empty()));

        let ticket = loader.begin(CatalogQuery::All);
        loader.resolve(
            ticket,
            Err(FetchError::Request("connection refused".to_string())),
        );
        assert!(matches!(loader.state(), LoadState::Failed(_)));
        assert!(loader.products().is_none());
    }

    #[test]
    fn test_stale_failure_does_not_clobber_result() {
        let mut loader = CatalogLoader::new();
        let stale = loader.begin(CatalogQuery::All);
        let current = loader.begin(CatalogQuery::All);

        loader.resolve(current, Ok(listing(&[1])));
        assert!(!loader.resolve(stale, Err(FetchError::Request("timeout".to_string()))));
        assert_eq!(loader.products().unwrap().len(), 1);
    }
}
