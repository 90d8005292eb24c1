//! Process-wide theme.
//!
//! Drawing code that does not thread a [`Theme`] through its calls can use
//! [`dtheme`]. The theme is created on first access with the "default"
//! official theme. Keep one writer at a time: the guard serializes access
//! but long-held guards block every other caller.

use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

use crate::theme::Theme;

static DTHEME: Lazy<Mutex<Theme>> = Lazy::new(|| Mutex::new(Theme::new()));

/// Lock the process-wide theme.
///
/// A panic while the lock was held does not leave the theme half-written
/// (every theme-wide replacement is a single assignment), so poisoning is
/// ignored.
pub fn dtheme() -> MutexGuard<'static, Theme> {
    DTHEME.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
