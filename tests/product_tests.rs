//! Tests for the Product value object.
//!
//! A product is a value: hashed and ordered collections must treat two
//! separately built products with equal fields as the same element.

#![cfg(all(feature = "value", feature = "collection"))]

use rstest::rstest;
use setwise::algebra::SetAlgebra;
use setwise::collection::SortedSet;
use setwise::value::Product;
use std::collections::HashSet;

fn catalog() -> HashSet<Product> {
    [
        Product::new("TV", 900.0),
        Product::new("Notebook", 1200.0),
        Product::new("Tablet", 400.0),
    ]
    .into_iter()
    .collect()
}

#[rstest]
fn test_hash_set_finds_structurally_equal_product() {
    let products = catalog();
    let probe = Product::new("Notebook", 1200.0);
    assert!(products.contains(&probe));
}

#[rstest]
#[case(Product::new("Notebook", 1200.5))]
#[case(Product::new("notebook", 1200.0))]
fn test_hash_set_rejects_product_differing_in_one_field(#[case] probe: Product) {
    assert!(!catalog().contains(&probe));
}

#[rstest]
fn test_hash_set_collapses_equal_products() {
    let mut products = catalog();
    assert!(!products.insert(Product::new("TV", 900.0)));
    assert_eq!(products.len(), 3);
}

#[rstest]
fn test_hash_set_algebra_over_products() {
    let mut on_sale = catalog();
    let in_stock: HashSet<Product> = [Product::new("TV", 900.0), Product::new("Phone", 650.0)]
        .into_iter()
        .collect();

    on_sale.intersect_with(&in_stock);
    assert_eq!(on_sale.len(), 1);
    assert!(on_sale.contains(&Product::new("TV", 900.0)));
}

#[rstest]
fn test_sorted_set_of_products_orders_by_name_then_price() {
    let products: SortedSet<Product> = [
        Product::new("TV", 900.0),
        Product::new("Notebook", 1200.0),
        Product::new("TV", 450.0),
        Product::new("Notebook", 1200.0),
    ]
    .into_iter()
    .collect();

    let rendered: Vec<String> = products.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["Notebook, 1200.00", "TV, 450.00", "TV, 900.00"]);
}

#[rstest]
fn test_accessors() {
    let product = Product::new(String::from("Tablet"), 400.0);
    assert_eq!(product.name(), "Tablet");
    assert!((product.price() - 400.0).abs() < f64::EPSILON);
}

#[cfg(feature = "serde")]
#[rstest]
fn test_product_serde_roundtrip() {
    let product = Product::new("TV", 900.0);
    let json = serde_json::to_string(&product).unwrap();
    assert_eq!(json, r#"{"name":"TV","price":900.0}"#);
    let restored: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, product);
}
