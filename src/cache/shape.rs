//! Per-shape-kind override layer over a generic style cache.

use super::{NamedStore, StyleCache};
use crate::errors::ThemeError;
use crate::style::{ShapeKind, Style};

/// Overrides for one [`ShapeKind`].
///
/// Only the overrides live here; lookups may fall back to the generic
/// cache for the same style kind, which this layer never modifies.
#[derive(Clone, Debug)]
pub struct ShapeKindCache<S> {
    kind: ShapeKind,
    overrides: StyleCache<S>,
}

impl<S: Style> ShapeKindCache<S> {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            overrides: StyleCache::new(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// True when this layer itself defines `name`.
    pub fn has(&self, name: &str) -> bool {
        self.overrides.has(name)
    }

    /// Look up `name` in this layer, falling back to `generic` when given.
    pub fn get(&self, name: &str, generic: Option<&StyleCache<S>>) -> Result<S, ThemeError> {
        if self.overrides.has(name) {
            return self.overrides.get(name);
        }
        match generic {
            Some(generic) => generic.get(name),
            None => Err(ThemeError::ShapeStyleNotFound {
                shape: self.kind,
                kind: S::KIND,
                name: name.to_string(),
            }),
        }
    }

    pub fn set(&mut self, name: &str, style: S) -> bool {
        self.overrides.set(name, style)
    }

    pub fn delete(&mut self, name: &str) -> Result<S, ThemeError> {
        self.overrides
            .delete(name)
            .map_err(|_| ThemeError::ShapeStyleNotFound {
                shape: self.kind,
                kind: S::KIND,
                name: name.to_string(),
            })
    }

    pub fn list(&self) -> Vec<String> {
        self.overrides.list()
    }

    pub fn merge(&mut self, style: &S, targets: Option<&[&str]>) {
        self.overrides.merge(style, targets);
    }
}

impl<S: Style> NamedStore for ShapeKindCache<S> {
    fn duplicate(&mut self, from: &str, to: &str) -> Option<bool> {
        self.overrides.duplicate(from, to)
    }

    fn discard(&mut self, name: &str) -> bool {
        self.overrides.discard(name)
    }
}
