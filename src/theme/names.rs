//! Registry of every style name held by at least one cache.

use indexmap::IndexMap;

/// Ordered, unique style names with a per-name count of holding caches.
///
/// A name is listed while any cache holds it; the theme updates the
/// counts after each cache mutation.
#[derive(Clone, Debug, Default)]
pub struct StyleNames {
    holders: IndexMap<String, usize>,
}

impl StyleNames {
    pub fn list(&self) -> Vec<String> {
        self.holders.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.holders.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.holders.keys().map(String::as_str)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.holders.get_index_of(name)
    }

    /// One more cache holds `name`.
    pub(crate) fn acquire(&mut self, name: &str) {
        *self.holders.entry(name.to_string()).or_insert(0) += 1;
    }

    /// One fewer cache holds `name`; unlisted once none do.
    pub(crate) fn release(&mut self, name: &str) {
        let Some(count) = self.holders.get_mut(name) else {
            return;
        };
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.holders.shift_remove(name);
        }
    }

    pub(crate) fn move_to(&mut self, name: &str, index: usize) {
        if let Some(current) = self.position(name) {
            let last = self.holders.len() - 1;
            self.holders.move_index(current, index.min(last));
        }
    }
}
