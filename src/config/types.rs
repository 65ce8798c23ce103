//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::defaults::*;
use crate::shortcuts::ShortcutOptions;

// ============================================
// BINDING DEFAULTS
// ============================================

/// Firing flags applied to new bindings (default: preventDefault, no stopPropagation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingDefaults {
    #[serde(default = "default_prevent_default")]
    pub prevent_default: bool,
    #[serde(default = "default_stop_propagation")]
    pub stop_propagation: bool,
}

fn default_prevent_default() -> bool {
    DEFAULT_PREVENT_DEFAULT
}
fn default_stop_propagation() -> bool {
    DEFAULT_STOP_PROPAGATION
}

impl Default for BindingDefaults {
    fn default() -> Self {
        BindingDefaults {
            prevent_default: DEFAULT_PREVENT_DEFAULT,
            stop_propagation: DEFAULT_STOP_PROPAGATION,
        }
    }
}

// ============================================
// MAIN CONFIG
// ============================================

/// Shortcut configuration
///
/// ```json
/// {
///   "logFilter": "shortcut_context=debug",
///   "bindings": { "preventDefault": true },
///   "namespaces": { "editor": { "stopPropagation": true } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BindingDefaults>,
    /// Per-namespace overrides of `bindings`
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub namespaces: HashMap<String, BindingDefaults>,
}

impl Config {
    pub fn get_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn get_binding_defaults(&self) -> BindingDefaults {
        self.bindings.unwrap_or_default()
    }

    /// Flags for a namespace, falling back to the global binding defaults.
    pub fn get_namespace_defaults(&self, namespace: &str) -> BindingDefaults {
        self.namespaces
            .get(namespace)
            .copied()
            .unwrap_or_else(|| self.get_binding_defaults())
    }

    /// Build options for a binding registered by `namespace`.
    pub fn options_for(&self, namespace: Option<&str>) -> ShortcutOptions {
        let flags = match namespace {
            Some(ns) => self.get_namespace_defaults(ns),
            None => self.get_binding_defaults(),
        };

        ShortcutOptions {
            namespace: namespace.map(str::to_string),
            ..ShortcutOptions::default()
        }
        .prevent_default(flags.prevent_default)
        .stop_propagation(flags.stop_propagation)
    }
}
