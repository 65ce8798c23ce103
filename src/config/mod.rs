//! Configuration module - shortcut defaults and user preferences
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, BindingDefaults)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_LOG_FILTER, DEFAULT_PREVENT_DEFAULT, DEFAULT_STOP_PROPAGATION};

pub use types::{BindingDefaults, Config};

pub use loader::{default_config_path, load_config};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
