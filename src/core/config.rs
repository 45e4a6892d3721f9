//! Build-time configuration of the dynamic level range
//!
//! The bounds are fixed by cargo features and surface here as constants, so
//! the call-site macros can fold the tier decision away. With no bound
//! features enabled the range is `[Warn, Verbose]`, leaving Fatal and Error
//! hardwired and Debug and Trace compiled out.

use super::level::{Level, LevelFilter};

/// Lower bound of the dynamic range. Statements below it are hardwired on,
/// and no threshold may be set lower.
pub const DYNAMIC_LEVEL_MIN: LevelFilter = if cfg!(feature = "min-level-none") {
    LevelFilter::NONE
} else if cfg!(feature = "min-level-fatal") {
    LevelFilter::from_level(Level::Fatal)
} else if cfg!(feature = "min-level-error") {
    LevelFilter::from_level(Level::Error)
} else if cfg!(feature = "min-level-warn") {
    LevelFilter::from_level(Level::Warn)
} else if cfg!(feature = "min-level-msg") {
    LevelFilter::from_level(Level::Msg)
} else if cfg!(feature = "min-level-info") {
    LevelFilter::from_level(Level::Info)
} else if cfg!(feature = "min-level-verbose") {
    LevelFilter::from_level(Level::Verbose)
} else if cfg!(feature = "min-level-debug") {
    LevelFilter::from_level(Level::Debug)
} else if cfg!(feature = "min-level-trace") {
    LevelFilter::from_level(Level::Trace)
} else {
    LevelFilter::from_level(Level::Warn)
};

/// Upper bound of the dynamic range. Statements above it are compiled out,
/// and no threshold may be set higher.
pub const DYNAMIC_LEVEL_MAX: LevelFilter = if cfg!(feature = "max-level-fatal") {
    LevelFilter::from_level(Level::Fatal)
} else if cfg!(feature = "max-level-error") {
    LevelFilter::from_level(Level::Error)
} else if cfg!(feature = "max-level-warn") {
    LevelFilter::from_level(Level::Warn)
} else if cfg!(feature = "max-level-msg") {
    LevelFilter::from_level(Level::Msg)
} else if cfg!(feature = "max-level-info") {
    LevelFilter::from_level(Level::Info)
} else if cfg!(feature = "max-level-verbose") {
    LevelFilter::from_level(Level::Verbose)
} else if cfg!(feature = "max-level-debug") {
    LevelFilter::from_level(Level::Debug)
} else if cfg!(feature = "max-level-trace") {
    LevelFilter::from_level(Level::Trace)
} else if cfg!(feature = "max-level-all") {
    LevelFilter::ALL
} else {
    LevelFilter::from_level(Level::Verbose)
};

// A minimum above the maximum leaves no valid threshold for any system.
const _: () = assert!(
    DYNAMIC_LEVEL_MIN.raw() <= DYNAMIC_LEVEL_MAX.raw(),
    "minimum dynamic level exceeds maximum dynamic level"
);

/// Whether per-system thresholds can change at runtime.
#[inline]
pub const fn dynamic_level_enabled() -> bool {
    cfg!(feature = "dynamic-level")
}
