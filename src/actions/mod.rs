//! Action implementations

pub mod console;

pub use console::ConsoleAction;

// Re-export the trait next to its implementations.
pub use crate::core::Action;
