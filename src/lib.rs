//! Shortcut Context - named keyboard shortcut registries
//!
//! This library provides the per-context registry behind a keyboard shortcut
//! subsystem: key-combination normalization, ordered binding lists with
//! most-recent-first override semantics, and namespace-scoped removal.

pub mod config;
pub mod error;
pub mod logging;
pub mod shortcuts;

pub use error::{Result, ShortcutError};
pub use shortcuts::{create_context, ShortcutBinding, ShortcutContext, ShortcutOptions};
