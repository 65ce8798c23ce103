//! Named shortcut context.
//!
//! A context maps normalized key combinations to binding lists. Registering
//! an already-bound combination stacks the new binding in front, so the most
//! recent registration is evaluated first. Bindings carry a namespace so the
//! owner that registered them can retract exactly its own shortcuts.

use smallvec::smallvec;
use tracing::{debug, trace};

use super::keys::normalize_keys;
use super::types::{BindingList, Callback, ShortcutBinding, ShortcutOptions};
use super::unique_map::UniqueMap;
use crate::error::ResultExt;

/// Maps a variant to its canonical combination string.
pub type Normalizer = fn(&[&str]) -> String;

pub struct ShortcutContext {
    name: String,
    shortcuts: UniqueMap<BindingList>,
    normalizer: Normalizer,
}

impl std::fmt::Debug for ShortcutContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutContext")
            .field("name", &self.name)
            .field("shortcuts", &self.shortcuts)
            .finish()
    }
}

/// Create an empty context named `name`.
pub fn create_context(name: impl Into<String>) -> ShortcutContext {
    ShortcutContext::new(name)
}

impl ShortcutContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_normalizer(name, normalize_keys)
    }

    /// Create a context that canonicalizes variants with `normalizer`
    /// instead of [`normalize_keys`].
    pub fn with_normalizer(name: impl Into<String>, normalizer: Normalizer) -> Self {
        let name = name.into();
        let context_name = name.clone();
        let shortcuts = UniqueMap::new(move |keys| {
            format!(
                "The passed keys combination \"{}\" is already registered in the \"{}\" context.",
                keys, context_name
            )
        });

        Self {
            name,
            shortcuts,
            normalizer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register `callback` under every variant.
    ///
    /// Each variant is normalized independently. An existing combination
    /// gets the new binding prepended; a new one gets a single-entry list.
    pub fn add_shortcut<I, V, S>(
        &mut self,
        variants: I,
        callback: Callback,
        options: ShortcutOptions,
    ) where
        I: IntoIterator<Item = V>,
        V: AsRef<[S]>,
        S: AsRef<str>,
    {
        for variant in variants {
            let combination = self.normalize(variant.as_ref());
            let binding = ShortcutBinding::new(callback.clone(), options.clone());

            if let Some(bindings) = self.shortcuts.get_item_mut(&combination) {
                bindings.insert(0, binding);
                trace!(
                    context = %self.name,
                    combination = %combination,
                    namespace = ?options.namespace,
                    depth = bindings.len(),
                    "Stacked shortcut binding"
                );
            } else {
                debug!(
                    context = %self.name,
                    combination = %combination,
                    namespace = ?options.namespace,
                    "Registered shortcut"
                );
                // No entry exists for this key, so `add_item` cannot report `DuplicateKey`.
                self.shortcuts
                    .add_item(combination, smallvec![binding])
                    .log_err();
            }
        }
    }

    /// Drop every binding registered under each variant. Absent
    /// combinations are ignored.
    pub fn remove_shortcut_by_variants<I, V, S>(&mut self, variants: I)
    where
        I: IntoIterator<Item = V>,
        V: AsRef<[S]>,
        S: AsRef<str>,
    {
        for variant in variants {
            let combination = self.normalize(variant.as_ref());
            self.remove_combination(&combination);
        }
    }

    /// Drop the bindings whose namespace equals `namespace`.
    ///
    /// `None` targets bindings registered without a namespace. Combinations
    /// left without bindings are removed; the others keep their surviving
    /// bindings in the original order.
    pub fn remove_shortcut_by_namespace(&mut self, namespace: Option<&str>) {
        let mut emptied: Vec<String> = Vec::new();
        let mut filtered: Vec<(String, BindingList)> = Vec::new();

        for (combination, bindings) in self.shortcuts.items() {
            if !bindings.iter().any(|b| b.namespace() == namespace) {
                continue;
            }

            let left: BindingList = bindings
                .iter()
                .filter(|b| b.namespace() != namespace)
                .cloned()
                .collect();

            if left.is_empty() {
                emptied.push(combination.to_string());
            } else {
                filtered.push((combination.to_string(), left));
            }
        }

        for (combination, left) in filtered {
            if let Some(bindings) = self.shortcuts.get_item_mut(&combination) {
                trace!(
                    context = %self.name,
                    combination = %combination,
                    namespace = ?namespace,
                    removed = bindings.len() - left.len(),
                    "Filtered shortcut bindings"
                );
                *bindings = left;
            }
        }

        for combination in emptied {
            self.remove_combination(&combination);
        }
    }

    /// Bindings for an already-normalized combination.
    pub fn get_shortcuts(&self, combination: &str) -> Option<&[ShortcutBinding]> {
        self.shortcuts.get_item(combination).map(|b| b.as_slice())
    }

    pub fn has_shortcut(&self, combination: &str) -> bool {
        self.shortcuts.has_item(combination)
    }

    /// Registered combinations in registration order.
    pub fn combinations(&self) -> impl Iterator<Item = &str> {
        self.shortcuts.keys()
    }

    /// Number of registered combinations.
    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    fn remove_combination(&mut self, combination: &str) {
        if let Some(bindings) = self.shortcuts.remove_item(combination) {
            debug!(
                context = %self.name,
                combination = %combination,
                removed = bindings.len(),
                "Removed shortcut"
            );
        }
    }

    fn normalize<S: AsRef<str>>(&self, variant: &[S]) -> String {
        let tokens: Vec<&str> = variant.iter().map(|token| token.as_ref()).collect();
        (self.normalizer)(&tokens)
    }
}
