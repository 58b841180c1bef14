use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use crate::key_index::KeyIndex;

/// Number of buckets a table starts with when no capacity is requested.
pub const DEFAULT_CAPACITY: usize = 16;

/// Ratio of entries to buckets at which a table doubles its bucket array.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

const HASH_SEED: i64 = 17;
const HASH_MULTIPLIER: i64 = 31;

/// Computes the bucket a key lives in for a table with `capacity` buckets.
///
/// The hash is `31 * 17 + key` in wrapping 64-bit arithmetic, reduced with a
/// Euclidean remainder so that keys whose hash wraps negative still land in
/// `0..capacity`.
///
/// # Examples
///
/// ```rust
/// # use long_map::bucket_table::bucket_index;
/// #
/// assert_eq!(bucket_index(1, 16), 0);
/// assert_eq!(bucket_index(2, 16), 1);
/// assert_eq!(bucket_index(-528, 16), 15);
/// assert_eq!(bucket_index(i64::MIN, 16), 15);
/// ```
#[inline(always)]
pub fn bucket_index(key: i64, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    let hash = HASH_SEED.wrapping_mul(HASH_MULTIPLIER).wrapping_add(key);
    (hash as i128).rem_euclid(capacity as i128) as usize
}

#[inline]
fn ceil_to_usize(value: f64) -> usize {
    let floor = value as usize;
    if (floor as f64) < value {
        floor.saturating_add(1)
    } else {
        floor
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "truncating-load-factor")] {
        /// `len / capacity` is taken as an integer quotient before it is
        /// compared with the load factor, so growth waits until `len` reaches
        /// `capacity * ceil(load_factor)`.
        #[inline]
        fn growth_threshold(capacity: usize, load_factor: f64) -> usize {
            capacity.saturating_mul(ceil_to_usize(load_factor)).max(1)
        }
    } else {
        /// Smallest `len` for which `len / capacity >= load_factor`.
        ///
        /// The rounded product is only a starting guess: `capacity * load_factor`
        /// can land just above a whole number, so the guess is walked down (or
        /// up) until it is the first length that satisfies the ratio.
        #[inline]
        fn growth_threshold(capacity: usize, load_factor: f64) -> usize {
            let reached = |len: usize| len as f64 / capacity as f64 >= load_factor;

            let mut threshold = ceil_to_usize(capacity as f64 * load_factor).max(1);
            while threshold > 1 && reached(threshold - 1) {
                threshold -= 1;
            }
            while threshold < usize::MAX && !reached(threshold) {
                threshold += 1;
            }
            threshold
        }
    }
}

type Link<V> = Option<Box<Node<V>>>;

struct Node<V> {
    key: i64,
    value: V,
    next: Link<V>,
}

fn empty_buckets<V>(capacity: usize) -> Vec<Link<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

/// Unlinks a chain node by node so long chains never drop recursively.
fn drop_chain<V>(mut link: Link<V>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

/// Returns the link holding `key`, or the empty link at the end of the chain.
fn seek<V>(mut link: &mut Link<V>, key: i64) -> &mut Link<V> {
    while link.as_ref().is_some_and(|node| node.key != key) {
        if let Some(node) = link {
            link = &mut node.next;
        }
    }
    link
}

fn unlink<V>(link: &mut Link<V>, len: &mut usize, index: &mut KeyIndex) -> Option<(i64, V)> {
    let node = link.take()?;
    let Node { key, value, next } = *node;
    *link = next;
    *len -= 1;
    index.remove(key);
    Some((key, value))
}

struct Chain<'a, V> {
    node: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(node)
    }
}

/// Longest chain length tracked by its own [`ChainHistogram`] bin.
#[cfg(any(test, feature = "stats"))]
pub const MAX_TRACKED_CHAIN: usize = 8;

/// Number of buckets per chain length.
///
/// `bins[n]` counts the buckets whose chain holds exactly `n` entries, except
/// for the last bin which counts every chain of `MAX_TRACKED_CHAIN` or more.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainHistogram {
    /// Bucket counts indexed by chain length.
    pub bins: Vec<usize>,
}

#[cfg(any(test, feature = "stats"))]
impl ChainHistogram {
    /// Pretty-prints the histogram as a horizontal bar chart on stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let max = self.bins.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        println!("chain histogram ({} buckets):", self.bins.iter().sum::<usize>());
        for (length, &count) in self.bins.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            let label = if length == MAX_TRACKED_CHAIN {
                alloc::format!("{length:>2}+")
            } else {
                alloc::format!("{length:>3}")
            };
            println!("{} | {} ({})", label, "█".repeat(width), count);
        }
    }
}

/// Debug statistics for bucket table analysis.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of entries currently in the table
    pub len: usize,
    /// Number of buckets
    pub capacity: usize,
    /// Entry count at which the next growth happens
    pub max_len: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Load factor (len / capacity)
    pub load_factor: f64,
    /// Bucket utilization (occupied_buckets / capacity)
    pub bucket_utilization: f64,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Bucket Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor, grows at {})",
            self.len,
            self.capacity,
            self.load_factor * 100.0,
            self.max_len
        );
        println!(
            "Bucket Usage: {}/{} ({:.2}% utilization)",
            self.occupied_buckets,
            self.capacity,
            self.bucket_utilization * 100.0
        );
        println!("Longest Chain: {} entries", self.longest_chain);
    }
}

/// A separately-chained hash table keyed by `i64`.
///
/// Every bucket holds a singly-linked chain of `(key, value)` nodes. New keys
/// are linked at the head of their chain. Once the number of entries reaches
/// the growth threshold derived from the load factor, the bucket array
/// doubles and every node is relinked into the new array.
///
/// Buckets are chosen with [`bucket_index`], which is fixed rather than
/// randomized, so a given key always maps to the same bucket for a given
/// capacity.
///
/// ## Example
///
/// ```rust
/// # use long_map::bucket_table::BucketTable;
/// # use long_map::bucket_table::Entry;
/// #
/// let mut table = BucketTable::new();
///
/// match table.entry(123) {
///     Entry::Vacant(entry) => {
///         entry.insert("Alice".to_string());
///     }
///     Entry::Occupied(_) => {
///         println!("123 already exists");
///     }
/// }
///
/// assert_eq!(table.find(123), Some(&"Alice".to_string()));
/// ```
pub struct BucketTable<V> {
    buckets: Vec<Link<V>>,
    len: usize,
    max_len: usize,
    load_factor: f64,
    index: KeyIndex,
}

impl<V> Debug for BucketTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BucketTable")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("max_len", &self.max_len)
            .field(
                "chains",
                &self
                    .buckets
                    .iter()
                    .map(|link| {
                        Chain {
                            node: link.as_deref(),
                        }
                        .map(|node| node.key)
                        .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<V> Clone for BucketTable<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        let mut buckets = empty_buckets(self.capacity());

        for (slot, link) in buckets.iter_mut().zip(&self.buckets) {
            let mut tail = slot;
            for node in (Chain {
                node: link.as_deref(),
            }) {
                let copy = tail.insert(Box::new(Node {
                    key: node.key,
                    value: node.value.clone(),
                    next: None,
                }));
                tail = &mut copy.next;
            }
        }

        Self {
            buckets,
            len: self.len,
            max_len: self.max_len,
            load_factor: self.load_factor,
            index: self.index.clone(),
        }
    }
}

impl<V> Drop for BucketTable<V> {
    fn drop(&mut self) {
        for link in self.buckets.iter_mut() {
            drop_chain(link.take());
        }
    }
}

impl<V> Default for BucketTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BucketTable<V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets and the
    /// [`DEFAULT_LOAD_FACTOR`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::bucket_table::BucketTable;
    /// #
    /// let table: BucketTable<String> = BucketTable::with_capacity(100);
    /// assert_eq!(table.capacity(), 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty table with `capacity` buckets that grows once the
    /// ratio of entries to buckets reaches `load_factor`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `load_factor` is not a finite,
    /// positive number.
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        assert!(capacity > 0, "bucket capacity must be positive");
        assert!(
            load_factor.is_finite() && load_factor > 0.0,
            "load factor must be finite and positive, got {load_factor}"
        );

        Self {
            buckets: empty_buckets(capacity),
            len: 0,
            max_len: growth_threshold(capacity, load_factor),
            load_factor,
            index: KeyIndex::new(),
        }
    }

    /// Returns the number of buckets.
    ///
    /// Capacity starts at the requested bucket count and only ever doubles.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor the table was created with.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn bucket_of(&self, key: i64) -> usize {
        bucket_index(key, self.capacity())
    }

    fn chain(&self, bucket: usize) -> Chain<'_, V> {
        Chain {
            node: self.buckets[bucket].as_deref(),
        }
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::bucket_table::BucketTable;
    /// #
    /// let mut table = BucketTable::new();
    /// table.entry(42).or_insert("answer");
    ///
    /// assert_eq!(table.find(42), Some(&"answer"));
    /// assert_eq!(table.find(7), None);
    /// ```
    pub fn find(&self, key: i64) -> Option<&V> {
        if !self.index.may_contain(key) {
            return None;
        }

        self.chain(self.bucket_of(key))
            .find(|node| node.key == key)
            .map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn find_mut(&mut self, key: i64) -> Option<&mut V> {
        if !self.index.may_contain(key) {
            return None;
        }

        let bucket = self.bucket_of(key);
        let mut link = &mut self.buckets[bucket];
        while let Some(node) = link {
            if node.key == key {
                return Some(&mut node.value);
            }
            link = &mut node.next;
        }

        None
    }

    /// Removes the entry stored under `key`, returning its key and value.
    ///
    /// The predecessor's link (or the bucket head) is pointed past the removed
    /// node. Capacity is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::bucket_table::BucketTable;
    /// #
    /// let mut table = BucketTable::new();
    /// table.entry(42).or_insert(1);
    ///
    /// assert_eq!(table.remove(42), Some((42, 1)));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(42), None);
    /// ```
    pub fn remove(&mut self, key: i64) -> Option<(i64, V)> {
        if !self.index.may_contain(key) {
            return None;
        }

        let bucket = self.bucket_of(key);
        let link = seek(&mut self.buckets[bucket], key);
        unlink(link, &mut self.len, &mut self.index)
    }

    /// Gets the entry for `key` for in-place manipulation.
    ///
    /// Looking up an entry never grows the table; growth happens when a
    /// [`VacantEntry`] is filled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::bucket_table::BucketTable;
    /// # use long_map::bucket_table::Entry;
    /// #
    /// let mut table = BucketTable::new();
    ///
    /// match table.entry(-5) {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert("world".to_string());
    ///     }
    ///     Entry::Occupied(mut entry) => {
    ///         *entry.get_mut() = "updated".to_string();
    ///     }
    /// }
    ///
    /// table.entry(-5).or_insert("ignored".to_string());
    /// assert_eq!(table.find(-5), Some(&"world".to_string()));
    /// ```
    pub fn entry(&mut self, key: i64) -> Entry<'_, V> {
        let bucket = self.bucket_of(key);
        if self.index.may_contain(key) && self.chain(bucket).any(|node| node.key == key) {
            let BucketTable {
                buckets,
                len,
                index,
                ..
            } = self;
            Entry::Occupied(OccupiedEntry {
                link: seek(&mut buckets[bucket], key),
                len,
                index,
            })
        } else {
            Entry::Vacant(VacantEntry { table: self, key })
        }
    }

    /// Removes every entry, keeping the current bucket count.
    pub fn clear(&mut self) {
        for link in self.buckets.iter_mut() {
            drop_chain(link.take());
        }
        self.len = 0;
        self.index.clear();

        tracing::trace!(capacity = self.capacity(), "cleared bucket table");
    }

    /// Returns an iterator over `(key, &value)` pairs in bucket order, each
    /// chain from head to tail.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            node: None,
            remaining: self.len,
        }
    }

    /// Returns an iterator over `(key, &mut value)` pairs in bucket order.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            node: None,
            remaining: self.len,
        }
    }

    /// Returns an iterator that removes and yields every entry.
    ///
    /// The table is empty once the iterator is dropped, even if it was not
    /// fully consumed. Capacity is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::bucket_table::BucketTable;
    /// #
    /// let mut table = BucketTable::new();
    /// table.entry(1).or_insert("a");
    /// table.entry(2).or_insert("b");
    ///
    /// let mut drained: Vec<_> = table.drain().collect();
    /// drained.sort();
    /// assert_eq!(drained, vec![(1, "a"), (2, "b")]);
    /// assert!(table.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, V> {
        Drain {
            table: self,
            bucket: 0,
            link: None,
        }
    }

    fn insert_vacant(&mut self, key: i64, value: V) -> &mut V {
        if self.len + 1 >= self.max_len {
            self.grow();
        }

        self.len += 1;
        self.index.insert(key);

        let bucket = self.bucket_of(key);
        let head = &mut self.buckets[bucket];
        let next = head.take();
        &mut head.insert(Box::new(Node { key, value, next })).value
    }

    #[cold]
    fn grow(&mut self) {
        let capacity = self
            .capacity()
            .checked_mul(2)
            .expect("bucket capacity overflow");
        self.rehash(capacity);
    }

    fn rehash(&mut self, capacity: usize) {
        let old_capacity = self.capacity();
        let old = core::mem::replace(&mut self.buckets, empty_buckets(capacity));

        for mut link in old {
            while let Some(mut node) = link {
                link = node.next.take();
                let slot = &mut self.buckets[bucket_index(node.key, capacity)];
                node.next = slot.take();
                *slot = Some(node);
            }
        }

        self.max_len = growth_threshold(capacity, self.load_factor);

        tracing::debug!(
            from = old_capacity,
            to = capacity,
            len = self.len,
            "grew bucket array"
        );
    }

    /// Counts buckets by the length of their chain.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> ChainHistogram {
        let mut bins = alloc::vec![0usize; MAX_TRACKED_CHAIN + 1];
        for bucket in 0..self.capacity() {
            let length = self.chain(bucket).count();
            bins[length.min(MAX_TRACKED_CHAIN)] += 1;
        }
        ChainHistogram { bins }
    }

    /// Returns occupancy statistics for debugging.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for bucket in 0..self.capacity() {
            let length = self.chain(bucket).count();
            if length > 0 {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(length);
        }

        DebugStats {
            len: self.len,
            capacity: self.capacity(),
            max_len: self.max_len,
            occupied_buckets,
            longest_chain,
            load_factor: self.len as f64 / self.capacity() as f64,
            bucket_utilization: occupied_buckets as f64 / self.capacity() as f64,
        }
    }
}

impl<V> IntoIterator for BucketTable<V> {
    type IntoIter = IntoIter<V>;
    type Item = (i64, V);

    fn into_iter(mut self) -> Self::IntoIter {
        let remaining = self.len;
        let buckets = core::mem::take(&mut self.buckets);
        IntoIter {
            buckets: buckets.into_iter(),
            link: None,
            remaining,
        }
    }
}

/// A view into a single entry in the table, which may be vacant or occupied.
///
/// This enum is constructed from the [`entry`] method on [`BucketTable`].
///
/// [`entry`]: BucketTable::entry
pub enum Entry<'a, V> {
    /// The key is not present in the table
    Vacant(VacantEntry<'a, V>),
    /// The key is present in the table
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use long_map::bucket_table::BucketTable;
    /// #
    /// let mut table = BucketTable::new();
    /// *table.entry(3).or_insert(0) += 10;
    /// *table.entry(3).or_insert(0) += 10;
    /// assert_eq!(table.find(3), Some(&20));
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant and returns a
    /// mutable reference to the value.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns this entry's key.
    pub fn key(&self) -> i64 {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, V> Entry<'a, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in a [`BucketTable`].
pub struct VacantEntry<'a, V> {
    table: &'a mut BucketTable<V>,
    key: i64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Returns the key that would be used when inserting a value.
    pub fn key(&self) -> i64 {
        self.key
    }

    /// Links a new node at the head of the key's chain and returns a mutable
    /// reference to its value.
    ///
    /// If this insert brings the table to its growth threshold, the bucket
    /// array doubles first and the new node is linked into the grown array.
    pub fn insert(self, value: V) -> &'a mut V {
        self.table.insert_vacant(self.key, value)
    }
}

/// A view into an occupied entry in a [`BucketTable`].
pub struct OccupiedEntry<'a, V> {
    link: &'a mut Link<V>,
    len: &'a mut usize,
    index: &'a mut KeyIndex,
}

impl<'a, V> OccupiedEntry<'a, V> {
    fn node(&self) -> &Node<V> {
        match self.link.as_deref() {
            Some(node) => node,
            None => unreachable!("occupied entry points at an empty link"),
        }
    }

    fn node_mut(&mut self) -> &mut Node<V> {
        match self.link.as_deref_mut() {
            Some(node) => node,
            None => unreachable!("occupied entry points at an empty link"),
        }
    }

    /// Returns the key of the entry.
    pub fn key(&self) -> i64 {
        self.node().key
    }

    /// Returns a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.node().value
    }

    /// Returns a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.node_mut().value
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        match self.link.as_deref_mut() {
            Some(node) => &mut node.value,
            None => unreachable!("occupied entry points at an empty link"),
        }
    }

    /// Replaces the value in the entry and returns the old value.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Unlinks the entry from its chain and returns the value.
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Unlinks the entry from its chain and returns the key and value.
    pub fn remove_entry(self) -> (i64, V) {
        match unlink(self.link, self.len, self.index) {
            Some(entry) => entry,
            None => unreachable!("occupied entry points at an empty link"),
        }
    }
}

/// An iterator over the entries of a [`BucketTable`].
///
/// This struct is created by the [`iter`] method on [`BucketTable`].
///
/// [`iter`]: BucketTable::iter
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Link<V>>,
    node: Option<&'a Node<V>>,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            node: self.node,
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = node.next.as_deref();
                self.remaining -= 1;
                return Some((node.key, &node.value));
            }
            self.node = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// A mutable iterator over the entries of a [`BucketTable`].
///
/// This struct is created by the [`iter_mut`] method on [`BucketTable`].
///
/// [`iter_mut`]: BucketTable::iter_mut
pub struct IterMut<'a, V> {
    buckets: core::slice::IterMut<'a, Link<V>>,
    node: Option<&'a mut Node<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (i64, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node.take() {
                let Node { key, value, next } = node;
                self.node = next.as_deref_mut();
                self.remaining -= 1;
                return Some((*key, value));
            }
            self.node = self.buckets.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}

impl<V> FusedIterator for IterMut<'_, V> {}

/// A draining iterator over the entries of a [`BucketTable`].
///
/// This struct is created by the [`drain`] method on [`BucketTable`].
///
/// [`drain`]: BucketTable::drain
pub struct Drain<'a, V> {
    table: &'a mut BucketTable<V>,
    bucket: usize,
    link: Link<V>,
}

impl<V> Drop for Drain<'_, V> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

impl<V> Iterator for Drain<'_, V> {
    type Item = (i64, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.link.take() {
                let Node { key, value, next } = *node;
                self.link = next;
                self.table.len -= 1;
                self.table.index.remove(key);
                return Some((key, value));
            }
            self.link = self.table.buckets.get_mut(self.bucket)?.take();
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.table.len, Some(self.table.len))
    }
}

impl<V> ExactSizeIterator for Drain<'_, V> {}

impl<V> FusedIterator for Drain<'_, V> {}

/// An owning iterator over the entries of a [`BucketTable`].
pub struct IntoIter<V> {
    buckets: alloc::vec::IntoIter<Link<V>>,
    link: Link<V>,
    remaining: usize,
}

impl<V> Drop for IntoIter<V> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (i64, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.link.take() {
                let Node { key, value, next } = *node;
                self.link = next;
                self.remaining -= 1;
                return Some((key, value));
            }
            self.link = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}
