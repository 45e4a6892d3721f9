//! Named logging systems
//!
//! A `LogSystem` is one independently-leveled logging channel: a name, the
//! output action, and (when the `dynamic-level` feature is enabled) a single
//! mutable threshold byte. Handles are cheap to share and every operation
//! takes `&self`.
//!
//! The threshold uses relaxed atomic loads and stores. That makes concurrent
//! level changes sound without promising any ordering between a `set_level`
//! and emissions on other threads; callers that need such ordering must
//! synchronize externally.

use std::fmt;
#[cfg(feature = "dynamic-level")]
use std::sync::atomic::{AtomicI8, Ordering};
use std::sync::Arc;

use super::action::Action;
#[cfg(not(feature = "dynamic-level"))]
use super::config::DYNAMIC_LEVEL_MAX;
use super::level::{Level, LevelFilter};
use crate::actions::ConsoleAction;

pub struct LogSystem {
    name: String,
    #[cfg(feature = "dynamic-level")]
    level: AtomicI8,
    action: Arc<dyn Action>,
}

impl LogSystem {
    /// Create a system that writes through the default console action.
    ///
    /// The initial level is clamped into the configured dynamic range.
    pub fn new(name: impl Into<String>, initial: impl Into<LevelFilter>) -> Self {
        Self::with_action(name, initial, Arc::new(ConsoleAction::new()))
    }

    /// Create a system with an explicit output action.
    pub fn with_action(
        name: impl Into<String>,
        initial: impl Into<LevelFilter>,
        action: Arc<dyn Action>,
    ) -> Self {
        #[cfg(not(feature = "dynamic-level"))]
        let _ = &initial;
        Self {
            name: name.into(),
            #[cfg(feature = "dynamic-level")]
            level: AtomicI8::new(initial.into().clamped().raw()),
            action,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current threshold. Always within the dynamic range; without the
    /// `dynamic-level` feature it reports the compile-time maximum.
    #[inline]
    pub fn level(&self) -> LevelFilter {
        #[cfg(feature = "dynamic-level")]
        return LevelFilter::from_raw(self.level.load(Ordering::Relaxed));
        #[cfg(not(feature = "dynamic-level"))]
        return DYNAMIC_LEVEL_MAX;
    }

    /// Store `clamped(level)` as the new threshold. Out-of-range values,
    /// including the `NONE` and `ALL` sentinels, are clamped silently.
    /// Without the `dynamic-level` feature this is a no-op.
    #[inline]
    pub fn set_level(&self, level: impl Into<LevelFilter>) {
        #[cfg(feature = "dynamic-level")]
        self.level
            .store(level.into().clamped().raw(), Ordering::Relaxed);
        #[cfg(not(feature = "dynamic-level"))]
        let _ = level;
    }

    /// The raw threshold comparison for the dynamic tier, with no tier
    /// bookkeeping of its own. The logging macros pair it with the
    /// compile-time tier predicates; most callers want [`enabled`] instead.
    ///
    /// [`enabled`]: LogSystem::enabled
    #[inline]
    pub fn permits(&self, level: Level) -> bool {
        #[cfg(feature = "dynamic-level")]
        return self.level.load(Ordering::Relaxed) >= level.as_i8();
        #[cfg(not(feature = "dynamic-level"))]
        return DYNAMIC_LEVEL_MAX.permits(level);
    }

    /// Whether a statement at `level` on this system would emit output.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        !level.is_compiled_out() && (level.is_hardwired() || self.permits(level))
    }

    /// Runtime-gated emission. The per-level macros are the zero-cost form
    /// of this; the method exists for call sites built at runtime.
    pub fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.action.emit(level, message);
        }
    }

    /// Invoke the output action unconditionally, bypassing every gate.
    #[inline]
    pub fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        self.action.emit(level, message);
    }

    pub fn flush(&self) {
        self.action.flush();
    }

    #[inline]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(Level::Fatal, format_args!("{}", message));
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, format_args!("{}", message));
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, format_args!("{}", message));
    }

    #[inline]
    pub fn msg(&self, message: impl fmt::Display) {
        self.log(Level::Msg, format_args!("{}", message));
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, format_args!("{}", message));
    }

    #[inline]
    pub fn verbose(&self, message: impl fmt::Display) {
        self.log(Level::Verbose, format_args!("{}", message));
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, format_args!("{}", message));
    }

    #[inline]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Level::Trace, format_args!("{}", message));
    }
}

impl fmt::Debug for LogSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSystem")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("action", &self.action.name())
            .finish()
    }
}
