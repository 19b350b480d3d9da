//! End-to-end storefront flow: fetch -> project -> add to cart -> reload.

use shopfront_commerce::prelude::*;
use shopfront_data::{CatalogLoader, CatalogQuery, CatalogSource, LoadState, StaticSource};
use shopfront_kv::MemoryStore;

fn source() -> StaticSource {
    StaticSource::new(vec![
        Product::new(1, "Backpack", 109.95, "men's clothing", "https://img/1.jpg"),
        Product::new(5, "Bracelet", 695.0, "jewelery", "https://img/5.jpg"),
        Product::new(7, "2TB Drive", 100.0, "electronics", "https://img/7.jpg"),
        Product::new(9, "1TB Drive", 64.0, "electronics", "https://img/9.jpg"),
    ])
}

#[test]
fn catalog_page_to_cart_and_back() {
    // The shell requests the catalog and hands the result to the loader.
    let mut loader = CatalogLoader::new();
    let ticket = loader.begin(CatalogQuery::All);
    assert!(loader.resolve(ticket, source().products()));

    let products = loader.products().expect("catalog ready");

    // Shopper narrows to electronics, cheapest first.
    let selection: CategorySelection = ["electronics"].into_iter().collect();
    let views = pipeline::view(products, &selection, SortKey::PriceAsc);

    let ids: Vec<i64> = views.iter().map(|v| v.product.id).collect();
    assert_eq!(ids, [9, 7]);
    // Head of the displayed list carries the demo out-of-stock flag.
    assert!(!views[0].in_stock);
    assert!(views[1].in_stock);

    // Add the second view's pre-selected variant twice.
    let view = &views[1];
    let variant = view.selected_variant().expect("variants never empty");
    assert!(view.purchasable(variant));

    let mut cart = CartLedger::load(MemoryStore::new());
    cart.add(CartItem::from_product(&view.product, Some(variant)))
        .unwrap();
    cart.add(CartItem::from_product(&view.product, Some(variant)))
        .unwrap();

    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.unique_item_count(), 1);
    let entry = cart.get(7, Some(variant.label.as_str())).unwrap();
    assert_eq!(entry.price, variant.price);

    // A new session over the same store sees the same cart.
    let reloaded = CartLedger::load(cart.into_store());
    assert_eq!(reloaded.item_count(), 2);
    assert_eq!(reloaded.get(7, Some("64 GB")).unwrap().qty, 2);
}

#[test]
fn changing_category_supersedes_the_inflight_fetch() {
    let mut loader = CatalogLoader::new();
    let all = loader.begin(CatalogQuery::All);

    // Shopper clicks a category before the first fetch lands.
    let jewelery = loader.begin(CatalogQuery::Category("jewelery".to_string()));

    // Late full listing arrives: dropped, still loading.
    assert!(!loader.resolve(all, source().products()));
    assert!(loader.is_loading());

    assert!(loader.resolve(jewelery, source().products_in_category("jewelery")));
    let products = loader.products().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 5);
}

#[test]
fn detail_page_projection_and_similar_products() {
    let source = source();
    let product = source.product(7).unwrap();

    // Detail pages use the id-keyed stock rule.
    let view = project_by_id(&product);
    assert!(!view.in_stock);
    assert_eq!(view.images.len(), 3);

    let similar = source.products_in_category(&product.category).unwrap();
    let ids: Vec<i64> = similar.iter().map(|p| p.id).collect();
    assert_eq!(ids, [7, 9]);
}

#[test]
fn failed_fetch_is_not_an_empty_catalog() {
    let mut loader = CatalogLoader::new();
    let ticket = loader.begin(CatalogQuery::All);
    loader.resolve(
        ticket,
        Err(shopfront_data::FetchError::Request(
            "connection reset".to_string(),
        )),
    );

    assert!(matches!(loader.state(), LoadState::Failed(_)));
    assert!(loader.products().is_none());
}
