//! Named keyboard shortcut contexts.
//!
//! This module provides:
//! - Key-combination normalization (`["Ctrl", "S"]` -> `"ctrl+s"`)
//! - `ShortcutContext`, a per-context registry of binding lists
//! - Namespace-scoped bulk removal so an owner can retract its own bindings
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use shortcut_context::shortcuts::{create_context, ShortcutOptions};
//!
//! let mut grid = create_context("grid");
//! grid.add_shortcut(
//!     [vec!["ctrl", "s"], vec!["meta", "s"]],
//!     Rc::new(|| save()),
//!     ShortcutOptions::with_namespace("editor"),
//! );
//!
//! assert!(grid.has_shortcut("ctrl+s"));
//! grid.remove_shortcut_by_namespace(Some("editor"));
//! assert!(grid.is_empty());
//! ```

mod context;
mod keys;
mod types;
mod unique_map;


pub use context::{create_context, Normalizer, ShortcutContext};

pub use keys::{canonicalize_key, keys_list, normalize_keys, KEY_SEPARATOR};

pub use types::{BindingList, Callback, RunAction, ShortcutBinding, ShortcutOptions};

pub use unique_map::UniqueMap;
