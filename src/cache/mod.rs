//! Named-style caches.
//!
//! A [`StyleCache`] maps style names to one stored style of a single kind.
//! `""` is the default slot. Reads hand out clones so callers can never
//! alias stored styles.

mod shape;
mod values;

pub use shape::ShapeKindCache;
pub use values::{CacheValue, ValueCache};

use indexmap::IndexMap;

use crate::errors::ThemeError;
use crate::log::debug;
use crate::style::Style;

/// Named styles of one kind, in insertion order.
#[derive(Clone, Debug)]
pub struct StyleCache<S> {
    styles: IndexMap<String, S>,
}

impl<S: Style> Default for StyleCache<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Style> StyleCache<S> {
    pub fn new() -> Self {
        Self {
            styles: IndexMap::new(),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// A copy of the style stored under `name`.
    pub fn get(&self, name: &str) -> Result<S, ThemeError> {
        self.styles
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::StyleNotFound {
                kind: S::KIND,
                name: name.to_string(),
            })
    }

    /// Store `style` under `name`, replacing any previous entry.
    /// Returns true when the name is new to this cache.
    pub fn set(&mut self, name: &str, style: S) -> bool {
        self.styles.insert(name.to_string(), style).is_none()
    }

    /// Remove `name`, returning the style it held.
    pub fn delete(&mut self, name: &str) -> Result<S, ThemeError> {
        self.styles
            .shift_remove(name)
            .ok_or_else(|| ThemeError::StyleNotFound {
                kind: S::KIND,
                name: name.to_string(),
            })
    }

    pub fn list(&self) -> Vec<String> {
        self.styles.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overlay `style` onto the stored styles named in `targets`
    /// (every stored style when `None`). Unknown targets are skipped.
    pub fn merge(&mut self, style: &S, targets: Option<&[&str]>) {
        let names: Vec<String> = match targets {
            Some(targets) => targets.iter().map(|t| t.to_string()).collect(),
            None => self.list(),
        };
        for name in names {
            match self.styles.get_mut(&name) {
                Some(stored) => *stored = stored.merge(style),
                None => {
                    debug!(kind = S::KIND, name = %name, "merge target not present, skipped");
                }
            }
        }
    }
}

/// Name-level operations the theme fans out across all of its caches.
pub(crate) trait NamedStore {
    /// Copy the entry under `from` to `to`. `None` when `from` is absent,
    /// otherwise whether `to` is new to this store.
    fn duplicate(&mut self, from: &str, to: &str) -> Option<bool>;

    fn discard(&mut self, name: &str) -> bool;
}

impl<S: Style> NamedStore for StyleCache<S> {
    fn duplicate(&mut self, from: &str, to: &str) -> Option<bool> {
        let style = self.styles.get(from)?.clone();
        Some(self.set(to, style))
    }

    fn discard(&mut self, name: &str) -> bool {
        self.styles.shift_remove(name).is_some()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::style::LineStyle;
    use proptest::prelude::*;

    fn line(width: f64) -> LineStyle {
        LineStyle::new().with_width(width).expect("non-negative width")
    }

    proptest! {
        #[test]
        fn last_set_wins_and_first_set_orders(
            names in prop::collection::vec("[a-z_]{0,6}", 1..16),
            width in 0.0f64..20.0,
        ) {
            let mut cache = StyleCache::new();
            let mut expected: Vec<(&str, f64)> = Vec::new();
            for (i, name) in names.iter().enumerate() {
                let w = width + i as f64;
                let fresh = cache.set(name, line(w));
                match expected.iter_mut().find(|(n, _)| *n == name.as_str()) {
                    Some(entry) => {
                        prop_assert!(!fresh);
                        entry.1 = w;
                    }
                    None => {
                        prop_assert!(fresh);
                        expected.push((name.as_str(), w));
                    }
                }
            }

            let order: Vec<&str> = expected.iter().map(|(n, _)| *n).collect();
            prop_assert_eq!(cache.list(), order);
            for (name, w) in expected {
                prop_assert_eq!(cache.get(name).map(|s| s.width()), Ok(Some(w)));
            }
        }

        #[test]
        fn copies_never_alias_the_source(width in 0.0f64..20.0, other in 20.0f64..40.0) {
            let mut cache = StyleCache::new();
            cache.set("a", line(width));
            prop_assert_eq!(cache.duplicate("a", "b"), Some(true));

            cache.merge(&line(other), Some(&["b"][..]));
            let edited = cache.get("a").expect("present").with_width(other).expect("valid");

            prop_assert_eq!(edited.width(), Some(other));
            prop_assert_eq!(cache.get("a").map(|s| s.width()), Ok(Some(width)));
            prop_assert_eq!(cache.get("b").map(|s| s.width()), Ok(Some(other)));
        }
    }
}
