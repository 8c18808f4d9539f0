//! The `sorted_set!` macro for building a [`SortedSet`](crate::collection::SortedSet)
//! from a list of elements.

/// Builds a [`SortedSet`](crate::collection::SortedSet) from the listed elements.
///
/// Elements may be written in any order; duplicates collapse to a single
/// entry, keeping the first one written.
///
/// # Syntax
///
/// - `sorted_set![]` - An empty set
/// - `sorted_set![a, b, c]` - A set holding `a`, `b` and `c`
///
/// # Examples
///
/// ```
/// use setwise::sorted_set;
/// use setwise::collection::SortedSet;
///
/// let numbers = sorted_set![10, 0, 5, 5, 2];
/// assert_eq!(numbers.to_vec(), vec![0, 2, 5, 10]);
///
/// let empty: SortedSet<i32> = sorted_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! sorted_set {
    () => {
        $crate::collection::SortedSet::new()
    };
    ($($element:expr),+ $(,)?) => {
        <$crate::collection::SortedSet<_> as ::core::iter::FromIterator<_>>::from_iter([
            $($element),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::collection::SortedSet;
    use rstest::rstest;

    #[rstest]
    fn test_sorted_set_macro_empty() {
        let set: SortedSet<String> = sorted_set![];
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_sorted_set_macro_trailing_comma() {
        let set = sorted_set!["Thiago", "Dineia", "Bento",];
        let names: Vec<&str> = set.into_iter().collect();
        assert_eq!(names, vec!["Bento", "Dineia", "Thiago"]);
    }
}
