//! Named plain values: theme colors, background colors, source-code fonts.
//!
//! These caches do not take part in the style-name registry.

use indexmap::IndexMap;

use crate::errors::ThemeError;
use crate::fonts::SourceCodeFont;
use crate::types::Color;

/// A value storable in a [`ValueCache`].
pub trait CacheValue: Clone {
    /// Canonical stored form.
    fn normalized(self) -> Self;
}

impl CacheValue for Color {
    fn normalized(self) -> Self {
        self.with_default_alpha()
    }
}

impl CacheValue for SourceCodeFont {
    fn normalized(self) -> Self {
        self
    }
}

#[derive(Clone, Debug)]
pub struct ValueCache<T> {
    label: &'static str,
    values: IndexMap<String, T>,
}

impl<T: CacheValue> ValueCache<T> {
    /// `label` names the cache in not-found errors, e.g. `"colors"`.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            values: IndexMap::new(),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<T, ThemeError> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| self.not_found(name))
    }

    pub fn set(&mut self, name: &str, value: T) {
        self.values.insert(name.to_string(), value.normalized());
    }

    pub fn delete(&mut self, name: &str) -> Result<T, ThemeError> {
        self.values.shift_remove(name).ok_or_else(|| self.not_found(name))
    }

    pub fn list(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn not_found(&self, name: &str) -> ThemeError {
        ThemeError::ValueNotFound {
            cache: self.label,
            name: name.to_string(),
        }
    }
}
