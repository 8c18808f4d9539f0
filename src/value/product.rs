//! The `Product` value object.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named product with a price.
///
/// Equality is structural: two products are equal when their names and
/// prices are equal. Prices compare by value, so `0.0` and `-0.0` are the
/// same price, and every NaN price equals every other NaN price. [`Hash`]
/// and [`Ord`] follow the same rules, which keeps `Product` consistent as a
/// key in both hashed and ordered collections.
///
/// # Examples
///
/// ```rust
/// use setwise::value::Product;
/// use std::collections::HashSet;
///
/// let mut catalog = HashSet::new();
/// catalog.insert(Product::new("TV", 900.0));
/// catalog.insert(Product::new("Notebook", 1200.0));
///
/// // A separately built product with the same fields is found.
/// assert!(catalog.contains(&Product::new("Notebook", 1200.0)));
/// assert!(!catalog.contains(&Product::new("Notebook", 1100.0)));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    name: String,
    price: f64,
}

impl Product {
    /// Creates a product.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Canonical bit pattern of the price: one zero, one NaN.
    fn price_bits(&self) -> u64 {
        if self.price.is_nan() {
            f64::NAN.to_bits()
        } else if self.price == 0.0 {
            0.0_f64.to_bits()
        } else {
            self.price.to_bits()
        }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.price_bits() == other.price_bits()
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.price_bits().hash(state);
    }
}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by name, then by price (NaN after every number).
impl Ord for Product {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name).then_with(|| {
            f64::from_bits(self.price_bits()).total_cmp(&f64::from_bits(other.price_bits()))
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}, {:.2}", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(product: &Product) -> u64 {
        let mut hasher = DefaultHasher::new();
        product.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case(Product::new("TV", 0.0), Product::new("TV", -0.0))]
    #[case(Product::new("TV", f64::NAN), Product::new("TV", -f64::NAN))]
    #[case(Product::new("Tablet", 400.5), Product::new("Tablet".to_string(), 400.5))]
    fn test_equal_products_hash_equally(#[case] left: Product, #[case] right: Product) {
        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
        assert_eq!(left.cmp(&right), Ordering::Equal);
    }

    #[rstest]
    #[case(Product::new("TV", 900.0), Product::new("TV", 900.01))]
    #[case(Product::new("TV", 900.0), Product::new("tv", 900.0))]
    fn test_products_differing_in_one_field_are_unequal(
        #[case] left: Product,
        #[case] right: Product,
    ) {
        assert_ne!(left, right);
    }

    #[rstest]
    fn test_ordering_by_name_then_price() {
        let mut products = vec![
            Product::new("TV", f64::NAN),
            Product::new("Notebook", 1200.0),
            Product::new("TV", 900.0),
            Product::new("TV", -1.0),
        ];
        products.sort();
        let rendered: Vec<String> = products.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["Notebook, 1200.00", "TV, -1.00", "TV, 900.00", "TV, NaN"]
        );
    }
}
