//! The three exercises of the tour.
//!
//! Each section writes its dump to the given writer; progress is reported
//! through `tracing` so stdout only carries collection contents.

use std::collections::HashSet;
use std::io::{self, Write};

use setwise::algebra::SetAlgebra;
use setwise::collection::{Dictionary, SortedSet};
use setwise::display::{CollectionLayout, write_collection};
use setwise::value::Product;

use crate::config::{Section, TourConfig};

/// Runs every section selected by `config`, writing to `out`.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn run<W: Write>(config: &TourConfig, out: &mut W) -> io::Result<()> {
    if config.section.includes(Section::Sets) {
        sets(config, out)?;
    }
    if config.section.includes(Section::Dictionary) {
        dictionary(config.layout, out)?;
    }
    if config.section.includes(Section::Products) {
        products(config.layout, out)?;
    }
    Ok(())
}

/// Sorted set construction, dumps and the three in-place operations.
///
/// Each operation starts from a fresh copy of the left-hand set, and the
/// copy that was mutated is the one printed.
pub fn sets<W: Write>(config: &TourConfig, out: &mut W) -> io::Result<()> {
    tracing::info!(left = config.left.len(), right = config.right.len(), "running sets section");

    let left: SortedSet<i32> = config.left.iter().copied().collect();
    let right: SortedSet<i32> = config.right.iter().copied().collect();
    let names: SortedSet<&str> = ["Thiago", "Dineia", "Bento"].into_iter().collect();

    writeln!(out, "== sorted sets ==")?;
    labelled(out, "A", &left, config.layout)?;
    labelled(out, "B", &right, config.layout)?;
    labelled(out, "names", &names, config.layout)?;

    let mut union = left.clone();
    union.union_with(&right);
    labelled(out, "A union B", &union, config.layout)?;

    let mut intersection = left.clone();
    intersection.intersect_with(&right);
    labelled(out, "A intersect B", &intersection, config.layout)?;

    let mut difference = left;
    difference.except_with(&right);
    labelled(out, "A except B", &difference, config.layout)
}

/// The cookie store session.
pub fn dictionary<W: Write>(layout: CollectionLayout, out: &mut W) -> io::Result<()> {
    tracing::info!("running dictionary section");

    let mut cookies: Dictionary<String, String> = Dictionary::new();
    cookies.insert("user".to_string(), "Maria".to_string());
    cookies.insert("email".to_string(), "Maria@gmail.com".to_string());
    cookies.insert("phone".to_string(), "12345667789".to_string());
    cookies.insert("phone2".to_string(), "123456".to_string());

    writeln!(out, "== dictionary ==")?;
    for key in ["user", "email"] {
        match cookies.fetch(key) {
            Ok(value) => writeln!(out, "{key}: {value}")?,
            Err(error) => writeln!(out, "{error}")?,
        }
    }
    writeln!(out, "contains key user: {}", cookies.contains_key("user"))?;
    writeln!(
        out,
        "contains value 123456: {}",
        cookies.contains_value(&"123456".to_string())
    )?;

    cookies.remove("user");
    if !cookies.contains_key("user") {
        writeln!(out, "user no longer exists")?;
    }
    writeln!(out, "count: {}", cookies.len())?;

    let entries = cookies.iter().map(|(key, value)| format!("{key}={value}"));
    write_collection(out, entries, layout)
}

/// Product value objects in a hash set.
pub fn products<W: Write>(layout: CollectionLayout, out: &mut W) -> io::Result<()> {
    tracing::info!("running products section");

    let mut catalog: HashSet<Product> = HashSet::new();
    catalog.insert(Product::new("TV", 900.0));
    catalog.insert(Product::new("Notebook", 1200.0));
    catalog.insert(Product::new("Tablet", 400.0));

    let on_sale: HashSet<Product> = [Product::new("TV", 900.0), Product::new("Phone", 650.0)]
        .into_iter()
        .collect();

    writeln!(out, "== products ==")?;
    let probe = Product::new("Notebook", 1200.0);
    writeln!(out, "contains {probe}: {}", catalog.contains(&probe))?;

    let mut discounted = catalog.clone();
    discounted.intersect_with(&on_sale);
    writeln!(out, "on sale: {}", discounted.len())?;

    let sorted: SortedSet<Product> = catalog.into_iter().collect();
    write_collection(out, sorted.iter().map(|product| format!("[{product}]")), layout)
}

fn labelled<W, T>(
    out: &mut W,
    label: &str,
    set: &SortedSet<T>,
    layout: CollectionLayout,
) -> io::Result<()>
where
    W: Write,
    T: std::fmt::Display,
{
    match layout {
        CollectionLayout::Spaces => write!(out, "{label}: ")?,
        CollectionLayout::Lines => writeln!(out, "{label}:")?,
    }
    write_collection(out, set, layout)
}
