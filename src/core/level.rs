//! Severity levels and threshold values
//!
//! `Level` names the eight call-site severities with their bit-exact raw
//! values (Fatal=0 through Trace=7; lower is more severe). `LevelFilter`
//! names everything a system's threshold may be set to: any `Level` plus the
//! `NONE` and `ALL` sentinels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::config::{DYNAMIC_LEVEL_MAX, DYNAMIC_LEVEL_MIN};

/// Call-site severity. Ordering follows the raw value, so more severe levels
/// compare as smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i8)]
pub enum Level {
    /// Fatal conditions.
    Fatal = 0,
    /// Non-fatal errors.
    Error = 1,
    /// Likely problems.
    Warn = 2,
    /// Terse messages during normal operation.
    Msg = 3,
    /// Progress messages during normal operation.
    Info = 4,
    /// Verbose messages during normal operation.
    Verbose = 5,
    /// Debug messages.
    Debug = 6,
    /// Trace debugging.
    Trace = 7,
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Msg => "MSG",
            Level::Info => "INFO",
            Level::Verbose => "VERBOSE",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// The raw wire value (Fatal=0 … Trace=7).
    #[inline]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    pub const fn from_raw(raw: i8) -> Option<Level> {
        match raw {
            0 => Some(Level::Fatal),
            1 => Some(Level::Error),
            2 => Some(Level::Warn),
            3 => Some(Level::Msg),
            4 => Some(Level::Info),
            5 => Some(Level::Verbose),
            6 => Some(Level::Debug),
            7 => Some(Level::Trace),
            _ => None,
        }
    }

    /// Whether this severity belongs on the urgent output stream.
    #[inline]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Level::Fatal | Level::Error | Level::Warn)
    }

    /// Whether statements at this severity are eliminated at compile time.
    #[inline]
    pub const fn is_compiled_out(self) -> bool {
        (self as i8) > DYNAMIC_LEVEL_MAX.raw()
    }

    /// Whether statements at this severity emit unconditionally, without a
    /// threshold check. Every retained severity is hardwired when the
    /// `dynamic-level` feature is disabled.
    #[inline]
    pub const fn is_hardwired(self) -> bool {
        !self.is_compiled_out()
            && (!cfg!(feature = "dynamic-level") || (self as i8) < DYNAMIC_LEVEL_MIN.raw())
    }

    /// Whether statements at this severity are checked against the system's
    /// runtime threshold.
    #[inline]
    pub const fn is_dynamic(self) -> bool {
        !self.is_compiled_out() && !self.is_hardwired()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Fatal => BrightRed,
            Level::Error => Red,
            Level::Warn => Yellow,
            Level::Msg => White,
            Level::Info => Green,
            Level::Verbose => Cyan,
            Level::Debug => Blue,
            Level::Trace => BrightBlack,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FATAL" => Ok(Level::Fatal),
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "MSG" | "MESSAGE" => Ok(Level::Msg),
            "INFO" => Ok(Level::Info),
            "VERBOSE" => Ok(Level::Verbose),
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// A value a logging system's threshold may be set to.
///
/// Wraps the raw `i8` so the two sentinels stay representable without
/// widening `Level` itself. Out-of-range values are accepted everywhere and
/// silently clamped into the dynamic range before they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelFilter(i8);

impl LevelFilter {
    /// Suppress every dynamically-controlled statement.
    pub const NONE: LevelFilter = LevelFilter(-1);

    /// Allow every retained statement.
    pub const ALL: LevelFilter = LevelFilter(0x7f);

    #[inline]
    pub const fn from_level(level: Level) -> LevelFilter {
        LevelFilter(level as i8)
    }

    #[inline]
    pub const fn from_raw(raw: i8) -> LevelFilter {
        LevelFilter(raw)
    }

    #[inline]
    pub const fn raw(self) -> i8 {
        self.0
    }

    /// The `Level` with the same raw value, if there is one. Sentinels and
    /// other out-of-range values return `None`.
    #[inline]
    pub const fn as_level(self) -> Option<Level> {
        Level::from_raw(self.0)
    }

    /// Whether a threshold at this value lets a statement at `level` emit.
    #[inline]
    pub const fn permits(self, level: Level) -> bool {
        self.0 >= level as i8
    }

    /// Constrain this value into the configured dynamic range. Idempotent,
    /// and the identity on values already within the range.
    #[inline]
    pub const fn clamped(self) -> LevelFilter {
        if self.0 > DYNAMIC_LEVEL_MAX.raw() {
            DYNAMIC_LEVEL_MAX
        } else if self.0 < DYNAMIC_LEVEL_MIN.raw() {
            DYNAMIC_LEVEL_MIN
        } else {
            self
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        LevelFilter::from_level(level)
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LevelFilter::NONE => write!(f, "NONE"),
            LevelFilter::ALL => write!(f, "ALL"),
            other => match other.as_level() {
                Some(level) => write!(f, "{}", level),
                None => write!(f, "{}", other.0),
            },
        }
    }
}
