//! Operations that act on a style name across every cache of a theme.

use super::caches::Caches;
use crate::errors::ThemeError;
use crate::log::debug;
use crate::style::ThemeStyles;

/// Cross-cache view returned by [`Theme::all_styles`](super::Theme::all_styles).
pub struct AllStyles<'a> {
    caches: &'a mut Caches,
}

impl<'a> AllStyles<'a> {
    pub(crate) fn new(caches: &'a mut Caches) -> Self {
        Self { caches }
    }

    /// Every known style name in registration order.
    pub fn list(&self) -> Vec<String> {
        self.caches.names.list()
    }

    pub fn has(&self, name: &str) -> bool {
        self.caches.names.contains(name)
    }

    /// Duplicate every entry named `from` under `to`, in every cache holding `from`.
    pub fn copy(&mut self, from: &str, to: &str) -> Result<(), ThemeError> {
        if !self.caches.names.contains(from) {
            return Err(unknown_source(from));
        }
        let (stores, names) = self.caches.stores_mut();
        for store in stores {
            if store.duplicate(from, to) == Some(true) {
                names.acquire(to);
            }
        }
        debug!(from, to, "copied style");
        Ok(())
    }

    /// Remove `name` from every cache. The default name cannot be deleted.
    pub fn delete(&mut self, name: &str) -> Result<(), ThemeError> {
        if name.is_empty() {
            return Err(ThemeError::DefaultNameProhibited {
                operation: "deleting",
            });
        }
        if !self.caches.names.contains(name) {
            return Err(unknown_source(name));
        }
        let (stores, names) = self.caches.stores_mut();
        for store in stores {
            if store.discard(name) {
                names.release(name);
            }
        }
        debug!(name, "deleted style");
        Ok(())
    }

    /// Rename `from` to `to` everywhere, keeping its position in [`list`](Self::list).
    pub fn rename(&mut self, from: &str, to: &str) -> Result<(), ThemeError> {
        if from.is_empty() || to.is_empty() {
            return Err(ThemeError::DefaultNameProhibited {
                operation: "renaming",
            });
        }
        let index = self
            .caches
            .names
            .position(from)
            .ok_or_else(|| unknown_source(from))?;
        if from == to {
            return Ok(());
        }
        if self.caches.names.contains(to) {
            return Err(ThemeError::NameAlreadyExists {
                name: to.to_string(),
            });
        }

        self.copy(from, to)?;
        self.delete(from)?;
        self.caches.names.move_to(to, index);
        debug!(from, to, index, "renamed style");
        Ok(())
    }

    /// Fan `styles` out to every cache it has a style for, overlaying it
    /// onto `targets` (all names when `None`).
    pub fn merge(&mut self, styles: &ThemeStyles, targets: Option<&[&str]>) {
        self.caches.merge(styles, targets);
    }
}

fn unknown_source(name: &str) -> ThemeError {
    ThemeError::StyleNotFound {
        kind: "Original style",
        name: name.to_string(),
    }
}
