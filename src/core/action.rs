//! Action trait for log output destinations
//!
//! The action receives the severity and the already-templated message and
//! owns everything downstream. It reports nothing back: output failures are
//! outside this crate's contract.

use std::fmt;

use super::level::Level;

pub trait Action: Send + Sync {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>);
    fn flush(&self);
    fn name(&self) -> &str;
}
