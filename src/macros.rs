//! Logging macros for gated message emission.
//!
//! These macros are the zero-cost front door: each expansion carries the
//! three-tier policy, folded against the compile-time dynamic range. A
//! compiled-out severity expands to a branch that is never taken, so neither
//! the logging-system expression nor the message arguments are evaluated. A
//! hardwired severity short-circuits past the threshold read entirely.
//!
//! # Examples
//!
//! ```
//! use levelgate::prelude::*;
//! use levelgate::info;
//!
//! let registry = Registry::new();
//! let server = registry.define("server", Level::Info).unwrap();
//!
//! // Basic logging
//! info!(server, "started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(server, "listening on port {}", port);
//! ```

/// Log a message on a system at an explicit level.
///
/// # Examples
///
/// ```
/// # use levelgate::prelude::*;
/// # let registry = Registry::new();
/// # let server = registry.define("server", Level::Info).unwrap();
/// use levelgate::log;
/// log!(server, Level::Msg, "simple message");
/// log!(server, Level::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($system:expr, $lvl:expr, $($arg:tt)+) => {{
        let level: $crate::Level = $lvl;
        if !level.is_compiled_out() {
            let system = &$system;
            if level.is_hardwired() || system.permits(level) {
                system.emit(level, ::core::format_args!($($arg)+));
            }
        }
    }};
}

/// Log a message at the fatal level.
///
/// # Examples
///
/// ```
/// # use levelgate::prelude::*;
/// # let registry = Registry::new();
/// # let server = registry.define("server", Level::Info).unwrap();
/// use levelgate::fatal;
/// fatal!(server, "unrecoverable: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($system:expr, $($arg:tt)+) => {
        $crate::log!($system, $crate::Level::Fatal, $($arg)+)
    };
}

/// Log a message at the error level.
///
/// # Examples
///
/// ```
/// # use levelgate::prelude::*;
/// # let registry = Registry::new();
/// # let server = registry.define("server", Level::Info).unwrap();
/// use levelgate::error;
/// error!(server, "request failed: {}", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($system:expr, $($arg:tt)+) => {
        $crate::log!($system, $crate::Level::Error, $($arg)+)
    };
}

/// Log a message at the warning level.
///
/// # Examples
///
/// ```
/// # use levelgate::prelude::*;
/// # let registry = Registry::new();
/// # let server = registry.define("server", Level::Info).unwrap();
/// use levelgate::warn;
/// warn!(server, "retry {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! warn {
    ($system:expr, $($arg:tt)+) => {
        $crate::log!($system, $crate::Level::Warn, $($arg)+)
    };
}

/// Log a message at the message level.
///
/// # Examples
///
/// ```
/// # use levelgate::prelude::*;
/// # let registry = Registry::new();
/// # let server = registry.define("server", Level::Info).unwrap();
/// use levelgate::msg;
/// msg!(server, "rebuilding index");
/// ```
#[macro_export]
macro_rules! msg {
    ($system:expr, $($arg:tt)+) => {
        $crate::log!($system, $crate::Level::Msg, $($arg)+)
    };
}

/// Log a message at the info level.
///
/// # Examples
///
/// ```
/// # use levelgate::prelude::*;
/// # let registry = Registry::new();
/// # let server = registry.define("server", Level::Info).unwrap();
/// use levelgate::info;
/// info!(server, "processed {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($system:expr, $($arg:tt)+) => {
        $crate::log!($system, $crate::Level::Info, $($arg)+)
    };
}

/// Log a message at the verbose level.
///
/// # Examples
///
/// ```
/// # use levelgate::prelude::*;
/// # let registry = Registry::new();
/// # let server = registry.define("server", Level::Verbose).unwrap();
/// use levelgate::verbose;
/// verbose!(server, "cache hit for {}", "key");
/// ```
#[macro_export]
macro_rules! verbose {
    ($system:expr, $($arg:tt)+) => {
        $crate::log!($system, $crate::Level::Verbose, $($arg)+)
    };
}

/// Log a message at the debug level.
///
/// With the default dynamic range this severity is compiled out; the call
/// still type-checks but produces no output and evaluates nothing.
///
/// # Examples
///
/// ```
/// # use levelgate::prelude::*;
/// # let registry = Registry::new();
/// # let server = registry.define("server", Level::Info).unwrap();
/// use levelgate::debug;
/// debug!(server, "counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($system:expr, $($arg:tt)+) => {
        $crate::log!($system, $crate::Level::Debug, $($arg)+)
    };
}

/// Log a message at the trace level.
///
/// With the default dynamic range this severity is compiled out; the call
/// still type-checks but produces no output and evaluates nothing.
///
/// # Examples
///
/// ```
/// # use levelgate::prelude::*;
/// # let registry = Registry::new();
/// # let server = registry.define("server", Level::Info).unwrap();
/// use levelgate::trace;
/// trace!(server, "entering handler");
/// ```
#[macro_export]
macro_rules! trace {
    ($system:expr, $($arg:tt)+) => {
        $crate::log!($system, $crate::Level::Trace, $($arg)+)
    };
}
