//! # Levelgate
//!
//! Leveled logging systems with a compile-time dynamic range. Each call site
//! lands in one of three tiers, decided at build time:
//!
//! - **Hardwired**: severities below the dynamic minimum always emit, with no
//!   threshold check at all.
//! - **Dynamic**: severities within the range emit when the logging system's
//!   current threshold permits them.
//! - **Compiled out**: severities above the dynamic maximum cost nothing;
//!   neither the message arguments nor the system expression are evaluated.
//!
//! ## Features
//!
//! - **Named Systems**: independent logging channels, each with its own
//!   runtime threshold
//! - **Zero-Cost Gating**: the tier split folds to constants; stripped call
//!   sites leave no code behind
//! - **Pluggable Output**: one [`Action`] seam, with a console default that
//!   routes urgent severities to stderr
//! - **Easy to Use**: one macro per severity, `format!`-style
//!
//! ## Example
//!
//! ```
//! use levelgate::prelude::*;
//! use levelgate::{error, info};
//!
//! let registry = Registry::new();
//! let net = registry.define("net", Level::Info).unwrap();
//!
//! error!(net, "listener died: {}", "connection reset");
//! info!(net, "accepted peer {}", 7);
//!
//! // Elsewhere in the program, the same system by name:
//! let net_again = registry.declare("net").unwrap();
//! net_again.set_level(Level::Verbose);
//! ```

pub mod actions;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::actions::ConsoleAction;
    pub use crate::core::{
        dynamic_level_enabled, Action, Level, LevelFilter, LogSystem, Registry, RegistryError,
        Result, DYNAMIC_LEVEL_MAX, DYNAMIC_LEVEL_MIN,
    };
}

pub use crate::actions::ConsoleAction;
pub use crate::core::{
    dynamic_level_enabled, Action, Level, LevelFilter, LogSystem, Registry, RegistryError, Result,
    DYNAMIC_LEVEL_MAX, DYNAMIC_LEVEL_MIN,
};
