use core::fmt::Debug;
use core::iter::FusedIterator;
use core::ops::Index;

pub use crate::bucket_table::Drain;
pub use crate::bucket_table::Entry;
pub use crate::bucket_table::IntoIter;
pub use crate::bucket_table::Iter;
pub use crate::bucket_table::IterMut;
pub use crate::bucket_table::OccupiedEntry;
pub use crate::bucket_table::VacantEntry;
use crate::bucket_table::BucketTable;
use crate::bucket_table::DEFAULT_LOAD_FACTOR;

/// A hash map from `i64` keys to values of type `V`, built on a
/// separately-chained [`BucketTable`].
///
/// Keys need no hasher: the bucket is derived directly from the key (see
/// [`bucket_index`]). The map starts with 16 buckets and doubles whenever the
/// number of entries reaches the load factor (0.75 by default).
///
/// # Absent values
///
/// Lookups return `Option`, so a map whose values are themselves optional
/// keeps "missing key" (`None`) apart from "key holding an absent value"
/// (`Some(&None)`). [`contains_key`] is the presence test.
///
/// ```rust
/// # use long_map::LongMap;
/// #
/// let mut map: LongMap<Option<&str>> = LongMap::new();
/// map.insert(1, None);
///
/// assert_eq!(map.get(1), Some(&None));
/// assert_eq!(map.get(2), None);
/// assert!(map.contains_key(1));
/// ```
///
/// [`bucket_index`]: crate::bucket_table::bucket_index
/// [`contains_key`]: LongMap::contains_key
#[derive(Clone)]
pub struct LongMap<V> {
    table: BucketTable<V>,
}

impl<V> Default for LongMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Debug for LongMap<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(&k, v);
        }
        map.finish()
    }
}

impl<V> LongMap<V> {
    /// Creates an empty map with 16 buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let map: LongMap<String> = LongMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 16);
    /// ```
    pub fn new() -> Self {
        Self {
            table: BucketTable::new(),
        }
    }

    /// Creates an empty map with `capacity` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let map: LongMap<String> = LongMap::with_capacity(100);
    /// assert_eq!(map.capacity(), 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map with `capacity` buckets that doubles once
    /// `len / capacity` reaches `load_factor`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `load_factor` is not a finite,
    /// positive number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::with_capacity_and_load_factor(4, 2.0);
    /// for key in 1..=7 {
    ///     map.insert(key, "a");
    /// }
    /// assert_eq!(map.capacity(), 4);
    /// assert_eq!(map.load_factor(), 2.0);
    ///
    /// map.insert(8, "b");
    /// assert_eq!(map.capacity(), 8);
    /// ```
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        Self {
            table: BucketTable::with_capacity_and_load_factor(capacity, load_factor),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of buckets.
    ///
    /// The bucket count only grows, by doubling; neither [`remove`] nor
    /// [`clear`] shrinks it.
    ///
    /// [`remove`]: LongMap::remove
    /// [`clear`]: LongMap::clear
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the load factor the map was created with.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Removes all entries from the map, keeping its bucket count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    /// let capacity = map.capacity();
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Associates `value` with `key` and returns a reference to the stored
    /// value.
    ///
    /// An existing value is overwritten in place without changing the size or
    /// capacity. A new key is linked into its bucket and may double the
    /// bucket array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// assert_eq!(*map.put(7, "a"), "a");
    /// assert_eq!(*map.put(7, "b"), "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: i64, value: V) -> &mut V {
        match self.table.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.insert(value);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(value),
        }
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned.
    /// If the map did have this key present, the value is updated, and the old
    /// value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(37), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        match self.table.entry(key) {
            Entry::Occupied(mut entry) => Some(entry.insert(value)),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(1), Some(&"a"));
    /// assert_eq!(map.get(2), None);
    /// ```
    pub fn get(&self, key: i64) -> Option<&V> {
        self.table.find(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        self.table.find_mut(key)
    }

    /// Returns `true` if the map contains an entry for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// map.insert(i64::MIN, "a");
    /// assert!(map.contains_key(i64::MIN));
    /// assert!(!map.contains_key(i64::MAX));
    /// ```
    pub fn contains_key(&self, key: i64) -> bool {
        self.table.find(key).is_some()
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// This walks every chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_value(&"a"));
    /// assert!(!map.contains_value(&"b"));
    /// ```
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(1), Some("a"));
    /// assert_eq!(map.remove(1), None);
    /// ```
    pub fn remove(&mut self, key: i64) -> Option<V> {
        self.table.remove(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    pub fn remove_entry(&mut self, key: i64) -> Option<(i64, V)> {
        self.table.remove(key)
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut counts = LongMap::new();
    /// for key in [3, 1, 3, 3] {
    ///     *counts.entry(key).or_insert(0) += 1;
    /// }
    ///
    /// assert_eq!(counts.get(3), Some(&3));
    /// assert_eq!(counts.get(1), Some(&1));
    /// ```
    pub fn entry(&mut self, key: i64) -> Entry<'_, V> {
        self.table.entry(key)
    }

    /// Returns an iterator over the key-value pairs of the map, in an
    /// arbitrary order.
    pub fn iter(&self) -> Iter<'_, V> {
        self.table.iter()
    }

    /// Returns an iterator over the key-value pairs of the map, with mutable
    /// references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        self.table.iter_mut()
    }

    /// Returns an iterator over the keys of the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let mut keys: Vec<i64> = map.keys().collect();
    /// keys.sort();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    ///
    /// Values are visited bucket by bucket; equal values stored under
    /// different keys are all yielded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// map.insert(1, "same");
    /// map.insert(2, "same");
    ///
    /// assert_eq!(map.values().filter(|v| **v == "same").count(), 2);
    /// ```
    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable references to the values of the map.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Returns an iterator that removes and yields all key-value pairs from the
    /// map.
    ///
    /// After calling `drain()`, the map will be empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::LongMap;
    /// #
    /// let mut map = LongMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let pairs: Vec<_> = map.drain().collect();
    /// assert!(map.is_empty());
    /// assert_eq!(pairs.len(), 2);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, V> {
        self.table.drain()
    }

    /// Returns chain length statistics for the map's buckets.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> crate::bucket_table::ChainHistogram {
        self.table.chain_histogram()
    }

    /// Returns occupancy statistics for debugging.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> crate::bucket_table::DebugStats {
        self.table.debug_stats()
    }
}

impl<V> PartialEq for LongMap<V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<V> Eq for LongMap<V> where V: Eq {}

impl<V> Index<i64> for LongMap<V> {
    type Output = V;

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: i64) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<V> Extend<(i64, V)> for LongMap<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> FromIterator<(i64, V)> for LongMap<V> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V> IntoIterator for LongMap<V> {
    type IntoIter = IntoIter<V>;
    type Item = (i64, V);

    fn into_iter(self) -> Self::IntoIter {
        self.table.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a LongMap<V> {
    type IntoIter = Iter<'a, V>;
    type Item = (i64, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut LongMap<V> {
    type IntoIter = IterMut<'a, V>;
    type Item = (i64, &'a mut V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator over the keys of a `LongMap`.
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<V> Iterator for Keys<'_, V> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

impl<V> FusedIterator for Keys<'_, V> {}

/// An iterator over the values of a `LongMap`.
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

impl<V> FusedIterator for Values<'_, V> {}

/// A mutable iterator over the values of a `LongMap`.
pub struct ValuesMut<'a, V> {
    inner: IterMut<'a, V>,
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}

impl<V> FusedIterator for ValuesMut<'_, V> {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap as StdHashMap;
    use std::collections::HashSet as StdHashSet;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn test_new_and_default() {
        let map: LongMap<String> = LongMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.load_factor(), 0.75);

        let map2: LongMap<String> = LongMap::default();
        assert!(map2.is_empty());
        assert_eq!(map2.capacity(), 16);
    }

    #[test]
    fn test_put_then_get() {
        let mut map = LongMap::new();

        map.put(1, "A");
        assert_eq!(map.get(1), Some(&"A"));
        assert_eq!(map.len(), 1);

        map.put(2, "B");
        assert_eq!(map.get(1), Some(&"A"));
        assert_eq!(map.get(2), Some(&"B"));
        assert_eq!(map.len(), 2);

        assert_eq!(map.remove(1), Some("A"));
        assert_eq!(map.get(1), None);
        assert_eq!(map.get(2), Some(&"B"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_put_returns_value() {
        let mut map = LongMap::new();
        assert_eq!(*map.put(5, "first".to_string()), "first");

        let stored = map.put(5, "second".to_string());
        stored.push('!');
        assert_eq!(map.get(5), Some(&"second!".to_string()));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_overwrite() {
        let mut map = LongMap::new();
        for key in 0..10 {
            map.insert(key, key);
        }
        let capacity = map.capacity();

        for key in 0..10 {
            assert_eq!(map.insert(key, key + 100), Some(key));
            map.put(key, key + 200);
        }

        assert_eq!(map.len(), 10);
        assert_eq!(map.capacity(), capacity);
        for key in 0..10 {
            assert_eq!(map.get(key), Some(&(key + 200)));
        }
        assert_eq!(map.keys().len(), 10);
        assert_eq!(map.values().len(), 10);
    }

    #[test]
    fn test_get_mut() {
        let mut map = LongMap::new();
        map.insert(1, "hello".to_string());

        if let Some(value) = map.get_mut(1) {
            value.push_str(" world");
        }

        assert_eq!(map.get(1), Some(&"hello world".to_string()));
        assert_eq!(map.get_mut(2), None);
    }

    #[test]
    fn test_remove() {
        let mut map = LongMap::new();
        map.insert(-1, "neg".to_string());
        map.insert(1, "pos".to_string());

        assert_eq!(map.remove(-1), Some("neg".to_string()));
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key(-1));
        assert_eq!(map.get(-1), None);
        assert!(map.contains_key(1));

        assert_eq!(map.remove(-1), None);
        assert_eq!(map.remove_entry(1), Some((1, "pos".to_string())));
        assert!(map.is_empty());
    }

    #[test]
    fn test_contains_value() {
        let mut map = LongMap::new();
        for key in 0..50 {
            map.insert(key * 16 + 1, key);
        }

        assert!(map.contains_value(&0));
        assert!(map.contains_value(&49));
        assert!(!map.contains_value(&50));

        map.remove(49 * 16 + 1);
        assert!(!map.contains_value(&49));
    }

    #[test]
    fn test_values_with_duplicates() {
        let mut map = LongMap::new();
        map.insert(1, "x");
        map.insert(2, "x");
        map.insert(3, "y");

        let mut values: Vec<_> = map.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, ["x", "x", "y"]);
    }

    #[test]
    fn test_clear() {
        let mut map = LongMap::new();
        for key in 0..40 {
            map.insert(key, key.to_string());
        }
        let capacity = map.capacity();

        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.keys().count(), 0);
        assert_eq!(map.values().count(), 0);
        assert_eq!(map.capacity(), capacity);
        for key in 0..40 {
            assert_eq!(map.get(key), None);
            assert!(!map.contains_key(key));
        }

        map.insert(3, "again".to_string());
        assert_eq!(map.get(3), Some(&"again".to_string()));
    }

    #[test]
    fn test_growth_preserves_entries() {
        let mut map = LongMap::new();
        let mut capacity = map.capacity();

        for key in 0..500i64 {
            let key = key * 31 - 250;
            map.insert(key, key * 3);

            if map.capacity() != capacity {
                assert_eq!(map.capacity(), capacity * 2);
                capacity = map.capacity();
            }
            for previous in 0..=((key + 250) / 31) {
                let previous = previous * 31 - 250;
                assert_eq!(map.get(previous), Some(&(previous * 3)));
            }
        }
        assert_eq!(map.len(), 500);
    }

    #[cfg(not(feature = "truncating-load-factor"))]
    #[test]
    fn test_growth_with_custom_load_factor() {
        for (capacity, load_factor, grows_on) in [(25, 0.28, 7), (25, 0.56, 14), (50, 0.14, 7)] {
            let mut map = LongMap::with_capacity_and_load_factor(capacity, load_factor);
            for key in 1..grows_on {
                map.put(key as i64, key);
            }
            assert_eq!(map.capacity(), capacity);

            map.put(grows_on as i64, grows_on);
            assert_eq!(map.capacity(), capacity * 2);
            assert_eq!(map.len(), grows_on);
            for key in 1..=grows_on {
                assert_eq!(map.get(key as i64), Some(&key));
            }
        }
    }

    #[test]
    fn test_extreme_keys() {
        let mut map = LongMap::new();
        let keys = [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX];
        for key in keys {
            map.insert(key, key);
        }

        for key in keys {
            assert_eq!(map.get(key), Some(&key));
        }
        assert_eq!(map.len(), keys.len());
    }

    #[test]
    fn test_absent_values() {
        let mut map: LongMap<Option<u8>> = LongMap::new();
        map.insert(1, None);
        map.insert(2, Some(2));

        assert_eq!(map.get(1), Some(&None));
        assert_eq!(map.get(3), None);
        assert!(map.contains_key(1));
        assert!(map.contains_value(&None));
        assert_eq!(map.remove(1), Some(None));
        assert!(!map.contains_value(&None));
    }

    #[test]
    fn test_entry_api() {
        let mut map = LongMap::new();

        let value = map.entry(1).or_insert("hello".to_string());
        assert_eq!(value, &"hello".to_string());

        let value = map.entry(1).or_insert("world".to_string());
        assert_eq!(value, &"hello".to_string());
        assert_eq!(map.len(), 1);

        map.entry(2).or_insert_with(|| "computed".to_string());
        assert_eq!(map.get(2), Some(&"computed".to_string()));

        map.entry(1)
            .and_modify(|v| v.push_str(" world"))
            .or_insert("default".to_string());
        assert_eq!(map.get(1), Some(&"hello world".to_string()));

        assert_eq!(map.entry(3).key(), 3);
    }

    #[test]
    fn test_vacant_entry() {
        let mut map = LongMap::new();

        match map.entry(1) {
            Entry::Vacant(entry) => {
                assert_eq!(entry.key(), 1);
                assert_eq!(entry.insert("hello"), &"hello");
            }
            Entry::Occupied(_) => panic!("expected vacant entry"),
        }

        match map.entry(1) {
            Entry::Occupied(entry) => assert_eq!(entry.remove(), "hello"),
            Entry::Vacant(_) => panic!("expected occupied entry"),
        }
        assert!(map.is_empty());
    }

    #[test]
    fn test_iterators() {
        let mut map = LongMap::new();
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());
        map.insert(3, "three".to_string());

        let pairs: StdHashMap<i64, String> = map.iter().map(|(k, v)| (k, v.clone())).collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.get(&2), Some(&"two".to_string()));

        let keys: StdHashSet<i64> = map.keys().collect();
        assert_eq!(keys, StdHashSet::from([1, 2, 3]));

        for value in map.values_mut() {
            value.make_ascii_uppercase();
        }
        for (_, value) in &mut map {
            value.push('!');
        }
        assert_eq!(map[3], "THREE!");

        let mut owned: Vec<(i64, String)> = map.into_iter().collect();
        owned.sort();
        assert_eq!(owned[0], (1, "ONE!".to_string()));
    }

    #[test]
    fn test_drain() {
        let mut map = LongMap::new();
        for key in 0..30 {
            map.insert(key, key * 2);
        }
        let capacity = map.capacity();

        let drained: StdHashMap<i64, i64> = map.drain().collect();
        assert_eq!(drained.len(), 30);
        assert_eq!(drained.get(&7), Some(&14));
        assert!(map.is_empty());
        assert_eq!(map.capacity(), capacity);
        assert!(!map.contains_key(7));
    }

    #[test]
    fn test_collect_extend_and_eq() {
        let map: LongMap<i64> = (0..20).map(|k| (k, k * k)).collect();
        assert_eq!(map.len(), 20);

        let mut other = LongMap::with_capacity(256);
        other.extend((0..20).rev().map(|k| (k, k * k)));
        assert_eq!(map, other);

        other.insert(5, 0);
        assert_ne!(map, other);

        let cloned = map.clone();
        assert_eq!(cloned, map);
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn test_index_missing_key() {
        let map: LongMap<u8> = LongMap::new();
        let _ = map[42];
    }

    #[test]
    fn test_debug() {
        let mut map = LongMap::new();
        map.insert(7, "seven");
        assert_eq!(format!("{map:?}"), r#"{7: "seven"}"#);
    }

    #[test]
    fn test_random_operations() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut map = LongMap::new();
        let mut oracle = StdHashMap::new();

        for _ in 0..10_000 {
            let key = rng.random_range(-300i64..300);
            if rng.random_bool(0.6) {
                let value = rng.random_range(0u16..10);
                assert_eq!(map.insert(key, value), oracle.insert(key, value));
            } else {
                assert_eq!(map.remove(key), oracle.remove(&key));
            }

            assert_eq!(map.len(), oracle.len());
            assert_eq!(map.keys().count(), map.len());
            assert_eq!(map.values().count(), map.len());
        }

        for (key, value) in &oracle {
            assert_eq!(map.get(*key), Some(value));
        }
    }
}
