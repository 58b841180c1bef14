//! Side index of the keys present in a [`BucketTable`].
//!
//! With the `key-index` feature this is a `hashbrown` set hashed with
//! `foldhash`, consulted before walking a chain so that misses never touch the
//! bucket array. Without the feature it is zero-sized and every query answers
//! "maybe", which sends the caller to the chain.
//!
//! [`BucketTable`]: crate::bucket_table::BucketTable

cfg_if::cfg_if! {
    if #[cfg(feature = "key-index")] {
        use foldhash::fast::FixedState;
        use hashbrown::HashSet;

        const KEY_INDEX_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

        #[derive(Clone, Debug)]
        pub(crate) struct KeyIndex {
            keys: HashSet<i64, FixedState>,
        }

        impl KeyIndex {
            pub(crate) fn new() -> Self {
                Self {
                    keys: HashSet::with_hasher(FixedState::with_seed(KEY_INDEX_SEED)),
                }
            }

            /// Returns `false` only when `key` is definitely absent.
            #[inline]
            pub(crate) fn may_contain(&self, key: i64) -> bool {
                self.keys.contains(&key)
            }

            #[inline]
            pub(crate) fn insert(&mut self, key: i64) {
                let inserted = self.keys.insert(key);
                debug_assert!(inserted, "key {key} indexed twice");
            }

            #[inline]
            pub(crate) fn remove(&mut self, key: i64) {
                let removed = self.keys.remove(&key);
                debug_assert!(removed, "key {key} missing from index");
            }

            pub(crate) fn clear(&mut self) {
                self.keys.clear();
            }

            #[cfg(test)]
            pub(crate) fn len(&self) -> usize {
                self.keys.len()
            }
        }
    } else {
        #[derive(Clone, Debug)]
        pub(crate) struct KeyIndex;

        impl KeyIndex {
            pub(crate) fn new() -> Self {
                Self
            }

            #[inline(always)]
            pub(crate) fn may_contain(&self, _key: i64) -> bool {
                true
            }

            #[inline(always)]
            pub(crate) fn insert(&mut self, _key: i64) {}

            #[inline(always)]
            pub(crate) fn remove(&mut self, _key: i64) {}

            #[inline(always)]
            pub(crate) fn clear(&mut self) {}
        }
    }
}
