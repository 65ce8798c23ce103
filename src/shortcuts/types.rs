//! Binding and option types stored in a shortcut context.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::config::{DEFAULT_PREVENT_DEFAULT, DEFAULT_STOP_PROPAGATION};

/// Action invoked when a combination fires.
pub type Callback = Rc<dyn Fn()>;

/// Predicate evaluated at fire time to decide whether the callback runs.
pub type RunAction = Rc<dyn Fn() -> bool>;

/// Bindings registered under one combination, most recent first.
pub type BindingList = SmallVec<[ShortcutBinding; 2]>;

/// Firing options attached to a binding.
///
/// `prevent_default` and `stop_propagation` are stored for the dispatcher;
/// the context itself never interprets them.
#[derive(Clone)]
pub struct ShortcutOptions {
    pub namespace: Option<String>,
    pub run_action: RunAction,
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Default for ShortcutOptions {
    fn default() -> Self {
        Self {
            namespace: None,
            run_action: Rc::new(|| true),
            prevent_default: DEFAULT_PREVENT_DEFAULT,
            stop_propagation: DEFAULT_STOP_PROPAGATION,
        }
    }
}

impl ShortcutOptions {
    /// Default options tagged with `namespace`.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..Default::default()
        }
    }

    pub fn run_action(mut self, run_action: impl Fn() -> bool + 'static) -> Self {
        self.run_action = Rc::new(run_action);
        self
    }

    pub fn prevent_default(mut self, prevent_default: bool) -> Self {
        self.prevent_default = prevent_default;
        self
    }

    pub fn stop_propagation(mut self, stop_propagation: bool) -> Self {
        self.stop_propagation = stop_propagation;
        self
    }

    /// Evaluate the `run_action` predicate.
    pub fn should_run(&self) -> bool {
        (self.run_action)()
    }
}

impl fmt::Debug for ShortcutOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutOptions")
            .field("namespace", &self.namespace)
            .field("prevent_default", &self.prevent_default)
            .field("stop_propagation", &self.stop_propagation)
            .finish_non_exhaustive()
    }
}

/// A registered callback plus its firing options.
#[derive(Clone)]
pub struct ShortcutBinding {
    pub callback: Callback,
    pub options: ShortcutOptions,
}

impl ShortcutBinding {
    pub fn new(callback: Callback, options: ShortcutOptions) -> Self {
        Self { callback, options }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.options.namespace.as_deref()
    }

    /// Whether this binding shares its callback with `other`.
    pub fn same_callback(&self, other: &Callback) -> bool {
        Rc::ptr_eq(&self.callback, other)
    }
}

impl fmt::Debug for ShortcutBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutBinding")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn default_options() {
        let options = ShortcutOptions::default();
        assert_eq!(options.namespace, None);
        assert!(options.prevent_default);
        assert!(!options.stop_propagation);
        assert!(options.should_run());
    }

    #[test]
    fn builder_overrides_fields() {
        let options = ShortcutOptions::with_namespace("grid")
            .prevent_default(false)
            .stop_propagation(true)
            .run_action(|| false);

        assert_eq!(options.namespace.as_deref(), Some("grid"));
        assert!(!options.prevent_default);
        assert!(options.stop_propagation);
        assert!(!options.should_run());
    }

    #[test]
    fn run_action_is_evaluated_each_time() {
        let enabled = Rc::new(Cell::new(true));
        let flag = Rc::clone(&enabled);
        let options = ShortcutOptions::default().run_action(move || flag.get());

        assert!(options.should_run());
        enabled.set(false);
        assert!(!options.should_run());
    }

    #[test]
    fn binding_tracks_callback_identity() {
        let callback: Callback = Rc::new(|| {});
        let other: Callback = Rc::new(|| {});
        let binding = ShortcutBinding::new(Rc::clone(&callback), ShortcutOptions::default());

        assert!(binding.same_callback(&callback));
        assert!(!binding.same_callback(&other));
        assert_eq!(binding.namespace(), None);
    }

    #[test]
    fn debug_output_omits_closures() {
        let binding = ShortcutBinding::new(Rc::new(|| {}), ShortcutOptions::with_namespace("ns"));
        let debug = format!("{:?}", binding);
        assert!(debug.contains("\"ns\""));
        assert!(debug.contains(".."));
    }
}
