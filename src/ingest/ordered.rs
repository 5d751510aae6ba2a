//! String-keyed map remembering insertion order, optionally re-sorted
//! naturally once ingestion is over.

use std::collections::HashMap;

use crate::core::natural::natural_cmp;

/// Ordering applied to the keys of a finished aggregate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyOrder {
    /// First-seen order.
    Insertion,
    /// Alphanumeric-aware order (`sort | uniq -c` input).
    Natural,
}

impl KeyOrder {
    #[inline]
    #[must_use]
    pub fn for_sort_unique(sort_unique: bool) -> Self {
        if sort_unique {
            Self::Natural
        } else {
            Self::Insertion
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Store `value` unless `key` is already present; `false` means rejected.
    pub fn insert_if_absent(&mut self, key: &str, value: V) -> bool {
        if self.index.contains_key(key) {
            return false;
        }
        self.push(key.to_owned(), value);
        true
    }

    /// Store `value`, replacing any previous one in place.
    pub fn insert(&mut self, key: &str, value: V) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 = value,
            None => self.push(key.to_owned(), value),
        }
    }

    /// Mutable slot for `key`, created with `make` on first sight.
    pub fn get_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> V) -> &mut V {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.push(key.to_owned(), make());
                self.entries.len() - 1
            }
        };
        &mut self.entries[i].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Apply `order` to the keys.
    pub fn arrange(&mut self, order: KeyOrder) {
        if order == KeyOrder::Natural {
            self.entries.sort_by(|a, b| natural_cmp(&a.0, &b.0));
            for (i, (k, _)) in self.entries.iter().enumerate() {
                if let Some(slot) = self.index.get_mut(k) {
                    *slot = i;
                }
            }
        }
    }

    fn push(&mut self, key: String, value: V) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_kept() {
        let mut m = OrderedMap::new();
        m.insert("b", 1);
        m.insert("a", 2);
        m.insert("b", 3);
        assert_eq!(m.iter().collect::<Vec<_>>(), [("b", &3), ("a", &2)]);
    }

    #[test]
    fn first_write_wins_when_asked() {
        let mut m = OrderedMap::new();
        assert!(m.insert_if_absent("k", 1));
        assert!(!m.insert_if_absent("k", 2));
        assert_eq!(m.get("k"), Some(&1));
    }

    #[test]
    fn natural_arrangement_reindexes() {
        let mut m = OrderedMap::new();
        for k in ["chr10", "chr2", "chr1"] {
            m.insert(k, k.len());
        }
        m.arrange(KeyOrder::Natural);
        assert_eq!(m.keys().collect::<Vec<_>>(), ["chr1", "chr2", "chr10"]);
        assert_eq!(m.get("chr10"), Some(&5));
        *m.get_or_insert_with("chr2", || 0) += 1;
        assert_eq!(m.get("chr2"), Some(&5));
    }
}
