//! Insertion-ordered key/value dictionary.
//!
//! [`Dictionary`] stores its entries in a `Vec` in insertion order and keeps
//! a hash index from each key to its position. Lookups are O(1) on average;
//! iteration always replays the order in which keys were first inserted.
//! Overwriting an existing key keeps its original position.
//!
//! Reading a key that is not present is reported three ways:
//!
//! - [`Dictionary::get`] returns `None`.
//! - [`Dictionary::fetch`] returns [`CollectionError::KeyNotFound`].
//! - Indexing (`dictionary[&key]`) panics, as the standard maps do.
//!
//! # Examples
//!
//! ```rust
//! use setwise::collection::Dictionary;
//!
//! let mut cookies: Dictionary<String, String> = Dictionary::new();
//! cookies.insert("user".to_string(), "Maria".to_string());
//! cookies.insert("email".to_string(), "Maria@gmail.com".to_string());
//!
//! assert_eq!(cookies["user"], "Maria");
//! assert!(cookies.contains_key("email"));
//! assert!(cookies.contains_value(&"Maria".to_string()));
//!
//! cookies.remove("user");
//! assert!(cookies.fetch("user").is_err());
//! assert_eq!(cookies.len(), 1);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Index;

use crate::error::CollectionError;

/// A key/value map that iterates in insertion order.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Clone`, `Eq` and `Hash`.
/// * `V` - The value type.
/// * `S` - The hasher builder for the key index.
#[derive(Clone)]
pub struct Dictionary<K, V, S = RandomState> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize, S>,
}

/// A [`Dictionary`] using the `FxHash` hasher from `rustc-hash`.
#[cfg(feature = "fxhash")]
pub type FxDictionary<K, V> = Dictionary<K, V, rustc_hash::FxBuildHasher>;

/// A [`Dictionary`] using the `AHash` hasher.
#[cfg(feature = "ahash")]
pub type AHashDictionary<K, V> = Dictionary<K, V, ahash::RandomState>;

impl<K, V> Dictionary<K, V, RandomState> {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K, V, S> Dictionary<K, V, S> {
    /// Creates an empty dictionary that hashes keys with `hasher`.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::with_hasher(hasher),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> DictionaryIterator<'_, K, V> {
        DictionaryIterator {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// This is a linear scan.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|(_, stored)| stored == value)
    }
}

impl<K, V, S> Dictionary<K, V, S>
where
    K: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Inserts or overwrites the value for `key`.
    ///
    /// Returns the previous value when the key was already present. An
    /// overwritten key keeps its place in the iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::collection::Dictionary;
    ///
    /// let mut phones = Dictionary::new();
    /// assert_eq!(phones.insert("phone", "12345667789"), None);
    /// assert_eq!(phones.insert("phone", "123456"), Some("12345667789"));
    /// assert_eq!(phones.get("phone"), Some(&"123456"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Returns a reference to the value stored for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index
            .get(key)
            .map(|&position| &mut self.entries[position].1)
    }

    /// Returns the value stored for `key`, or an error naming the key.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if `key` is not present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::CollectionError;
    /// use setwise::collection::Dictionary;
    ///
    /// let mut cookies = Dictionary::new();
    /// cookies.insert("user", "Maria");
    ///
    /// assert_eq!(cookies.fetch("user"), Ok(&"Maria"));
    /// assert!(matches!(
    ///     cookies.fetch("email"),
    ///     Err(CollectionError::KeyNotFound { .. })
    /// ));
    /// ```
    pub fn fetch<Q>(&self, key: &Q) -> Result<&V, CollectionError>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + fmt::Debug + ?Sized,
    {
        self.get(key)
            .ok_or_else(|| CollectionError::key_not_found(key))
    }

    /// Returns `true` if the dictionary holds an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// The remaining entries keep their relative order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let Some(position) = self.index.remove(key) else {
            tracing::debug!(length = self.entries.len(), "remove of missing key ignored");
            return None;
        };
        let (_, value) = self.entries.remove(position);
        for (shifted_key, _) in &self.entries[position..] {
            if let Some(stored_position) = self.index.get_mut::<K>(shifted_key) {
                *stored_position -= 1;
            }
        }
        Some(value)
    }
}

impl<K, V, S: Default> Default for Dictionary<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> FromIterator<(K, V)> for Dictionary<K, V, S>
where
    K: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::with_hasher(S::default());
        dictionary.extend(iter);
        dictionary
    }
}

impl<K, V, S> Extend<(K, V)> for Dictionary<K, V, S>
where
    K: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, Q, S> Index<&Q> for Dictionary<K, V, S>
where
    K: Clone + Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + fmt::Debug + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &Q) -> &V {
        match self.fetch(key) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<K, V, S> PartialEq for Dictionary<K, V, S>
where
    K: Clone + Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    /// Two dictionaries are equal when they hold the same entries; insertion
    /// order is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for Dictionary<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Dictionary<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over the entries of a [`Dictionary`] in insertion order.
#[derive(Clone)]
pub struct DictionaryIterator<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for DictionaryIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for DictionaryIterator<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for DictionaryIterator<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a Dictionary<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = DictionaryIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for Dictionary<K, V, S> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for Dictionary<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
struct DictionaryVisitor<K, V, S> {
    marker: std::marker::PhantomData<(K, V, S)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::de::Visitor<'de> for DictionaryVisitor<K, V, S>
where
    K: serde::Deserialize<'de> + Clone + Eq + Hash,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = Dictionary<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut dictionary = Dictionary::with_hasher(S::default());
        while let Some((key, value)) = access.next_entry()? {
            dictionary.insert(key, value);
        }
        Ok(dictionary)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for Dictionary<K, V, S>
where
    K: serde::Deserialize<'de> + Clone + Eq + Hash,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(DictionaryVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
