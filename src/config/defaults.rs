//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Bindings suppress the host's default key behavior unless told otherwise
pub const DEFAULT_PREVENT_DEFAULT: bool = true;

/// Bindings let the event continue down the context chain by default
pub const DEFAULT_STOP_PROPAGATION: bool = false;

/// Default `EnvFilter` directive when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
